use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::WorkoutRecord;

/// Maximum gap between two consecutive workouts of the same streak.
pub const STREAK_GAP: TimeDelta = TimeDelta::days(2);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streaks {
    pub current: u32,
    pub longest: u32,
}

/// Which part of the workout history counts as the current streak.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakWindow {
    /// The run that contains the most recent workout.
    #[default]
    LeadingRun,
    /// Only the first `n` workouts (most recent first) update the current streak. A break
    /// within them restarts it, breaks beyond them are ignored.
    Positions(usize),
}

#[must_use]
pub fn compute_streaks(records: &[WorkoutRecord], window: StreakWindow) -> Streaks {
    let dates = completion_dates(records);

    if dates.is_empty() {
        return Streaks::default();
    }

    let mut current = 1;
    let mut longest = 0;
    let mut temp = 1;
    let mut in_leading_run = true;

    for (index, pair) in dates.windows(2).enumerate().map(|(i, p)| (i + 1, p)) {
        let tracked = match window {
            StreakWindow::LeadingRun => in_leading_run,
            StreakWindow::Positions(n) => index < n,
        };

        if pair[0] - pair[1] <= STREAK_GAP {
            temp += 1;
            if tracked {
                current = temp;
            }
        } else {
            longest = longest.max(temp);
            temp = 1;
            in_leading_run = false;
            if tracked && matches!(window, StreakWindow::Positions(_)) {
                current = 1;
            }
        }
    }

    Streaks {
        current,
        longest: longest.max(temp).max(current),
    }
}

/// Effective dates of all completed workouts, most recent first.
fn completion_dates(records: &[WorkoutRecord]) -> Vec<DateTime<Utc>> {
    let mut dates = records
        .iter()
        .filter(|r| r.is_completed)
        .map(WorkoutRecord::effective_date)
        .collect::<Vec<_>>();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates
}
