use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::WorkoutRecord;

pub const MONTHLY_STATS_MONTHS: u32 = 6;
pub const WEEKLY_ACTIVITY_DAYS: u64 = 7;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TimeFrame {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl TimeFrame {
    #[must_use]
    pub fn days(self) -> i64 {
        match self {
            TimeFrame::Week => 7,
            TimeFrame::Month => 30,
            TimeFrame::Quarter => 90,
            TimeFrame::Year => 365,
        }
    }
}

/// Rough classification of a workout based on keywords in its title.
#[derive(
    Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
pub enum WorkoutKind {
    Cardio,
    Strength,
    Flexibility,
    #[serde(rename = "HIIT")]
    #[strum(to_string = "HIIT")]
    Hiit,
    General,
}

impl WorkoutKind {
    #[must_use]
    pub fn classify(title: &str) -> Self {
        let title = title.to_lowercase();
        let contains_any = |keywords: &[&str]| keywords.iter().any(|k| title.contains(k));

        if contains_any(&["cardio", "running", "cycling"]) {
            WorkoutKind::Cardio
        } else if contains_any(&["strength", "weight", "muscle"]) {
            WorkoutKind::Strength
        } else if contains_any(&["flexibility", "stretch", "yoga"]) {
            WorkoutKind::Flexibility
        } else if contains_any(&["hiit", "interval"]) {
            WorkoutKind::Hiit
        } else {
            WorkoutKind::General
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutKindShare {
    pub kind: WorkoutKind,
    pub count: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutAnalytics {
    pub time_frame: TimeFrame,
    pub total_workouts: u32,
    pub total_hours: f64,
    pub average_duration_minutes: f64,
    pub average_difficulty: f64,
    pub completion_rate: f64,
    pub weekly_trend: f64,
    pub workout_kinds: Vec<WorkoutKindShare>,
    pub this_month: u32,
    pub this_week: u32,
}

/// Summarize the workouts created within the time frame before `now`.
#[must_use]
pub fn analyze(
    records: &[WorkoutRecord],
    time_frame: TimeFrame,
    now: DateTime<Utc>,
) -> WorkoutAnalytics {
    let cutoff = now - TimeDelta::days(time_frame.days());
    let in_frame = records
        .iter()
        .filter(|r| r.created_at >= cutoff)
        .collect::<Vec<_>>();
    let completed = in_frame
        .iter()
        .copied()
        .filter(|r| r.is_completed)
        .collect::<Vec<_>>();

    let total_workouts = count(completed.len());
    let total_minutes = completed
        .iter()
        .map(|r| f64::from(r.duration_minutes))
        .sum::<f64>();
    let average_difficulty = mean(
        completed
            .iter()
            .map(|r| f64::from(u8::from(r.difficulty_level))),
    );

    let one_week_ago = now - TimeDelta::days(7);
    let two_weeks_ago = now - TimeDelta::days(14);
    let this_week = count(completed.iter().filter(|r| r.created_at >= one_week_ago).count());
    let last_week = count(
        completed
            .iter()
            .filter(|r| r.created_at >= two_weeks_ago && r.created_at < one_week_ago)
            .count(),
    );
    let weekly_trend = if last_week > 0 {
        (f64::from(this_week) - f64::from(last_week)) / f64::from(last_week) * 100.0
    } else {
        0.0
    };

    let mut kinds = BTreeMap::<WorkoutKind, u32>::new();
    for record in &completed {
        *kinds.entry(WorkoutKind::classify(&record.title)).or_default() += 1;
    }
    let workout_kinds = kinds
        .into_iter()
        .map(|(kind, count)| WorkoutKindShare {
            kind,
            count,
            percentage: f64::from(count) / f64::from(total_workouts) * 100.0,
        })
        .collect();

    let month_start = now.date_naive().with_day(1);
    let this_month = count(
        completed
            .iter()
            .filter(|r| month_start.is_some_and(|start| r.created_at.date_naive() >= start))
            .count(),
    );

    WorkoutAnalytics {
        time_frame,
        total_workouts,
        total_hours: total_minutes / 60.0,
        average_duration_minutes: if total_workouts > 0 {
            total_minutes / f64::from(total_workouts)
        } else {
            0.0
        },
        average_difficulty,
        completion_rate: if in_frame.is_empty() {
            0.0
        } else {
            f64::from(total_workouts) / f64::from(count(in_frame.len())) * 100.0
        },
        weekly_trend,
        workout_kinds,
        this_month,
        this_week,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyStats {
    pub year: i32,
    pub month: String,
    pub workouts: u32,
    pub hours: f64,
}

/// Completed workouts and hours for the last six calendar months, oldest first.
#[must_use]
pub fn monthly_stats(records: &[WorkoutRecord], now: DateTime<Utc>) -> Vec<MonthlyStats> {
    let Some(current_month) = now.date_naive().with_day(1) else {
        return vec![];
    };

    (0..MONTHLY_STATS_MONTHS)
        .rev()
        .filter_map(|i| current_month.checked_sub_months(Months::new(i)))
        .map(|start| {
            let in_month = records
                .iter()
                .filter(|r| r.is_completed)
                .filter(|r| {
                    let date = r.created_at.date_naive();
                    date.year() == start.year() && date.month() == start.month()
                })
                .collect::<Vec<_>>();
            MonthlyStats {
                year: start.year(),
                month: start.format("%b").to_string(),
                workouts: count(in_month.len()),
                hours: in_month
                    .iter()
                    .map(|r| f64::from(r.duration_minutes))
                    .sum::<f64>()
                    / 60.0,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayActivity {
    pub date: NaiveDate,
    pub label: String,
    pub workouts: u32,
}

/// Completed workouts per day for the week ending with `today`, oldest first.
#[must_use]
pub fn weekly_activity(records: &[WorkoutRecord], today: NaiveDate) -> Vec<DayActivity> {
    (0..WEEKLY_ACTIVITY_DAYS)
        .rev()
        .filter_map(|i| today.checked_sub_days(Days::new(i)))
        .map(|date| DayActivity {
            date,
            label: date.format("%a").to_string(),
            workouts: count(
                records
                    .iter()
                    .filter(|r| r.is_completed && r.effective_date().date_naive() == date)
                    .count(),
            ),
        })
        .collect()
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0_u32), |(sum, n), v| (sum + v, n + 1));
    if n == 0 { 0.0 } else { sum / f64::from(n) }
}
