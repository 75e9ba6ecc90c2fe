use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::WorkoutRecord;

pub const WEEKLY_WARRIOR_WORKOUTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: AchievementIcon,
    pub date: DateTime<Utc>,
    pub is_new: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AchievementIcon {
    Trophy,
    Trending,
    Calendar,
    Zap,
}

struct Milestone {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    icon: AchievementIcon,
}

impl Milestone {
    fn achieved(&self, date: DateTime<Utc>) -> Achievement {
        Achievement {
            id: self.id,
            title: self.title,
            description: self.description,
            icon: self.icon,
            date,
            is_new: false,
        }
    }
}

static COUNT_MILESTONES: [(usize, Milestone); 3] = [
    (
        1,
        Milestone {
            id: "first-workout",
            title: "First Steps",
            description: "Completed your first workout! Great start on your fitness journey.",
            icon: AchievementIcon::Trophy,
        },
    ),
    (
        5,
        Milestone {
            id: "consistency-5",
            title: "Building Momentum",
            description: "Completed 5 workouts! You're building great habits.",
            icon: AchievementIcon::Trending,
        },
    ),
    (
        10,
        Milestone {
            id: "consistency-10",
            title: "Dedication",
            description: "Reached 10 completed workouts! Your commitment is paying off.",
            icon: AchievementIcon::Zap,
        },
    ),
];

static WEEKLY_WARRIOR: Milestone = Milestone {
    id: "weekly-consistency",
    title: "Weekly Warrior",
    description: "Completed 3+ workouts this week! Excellent consistency.",
    icon: AchievementIcon::Calendar,
};

/// Achievements earned by the completed workouts, most recent first.
///
/// Count milestones are dated by the workout that reached them. The weekly achievement
/// requires three completions within the seven days before `now` and is dated by the latest
/// of them. Only the most recent achievement can be new, and only when it was earned by the
/// latest completed workout.
#[must_use]
pub fn compute_achievements(records: &[WorkoutRecord], now: DateTime<Utc>) -> Vec<Achievement> {
    let mut dates = records
        .iter()
        .filter(|r| r.is_completed)
        .map(WorkoutRecord::effective_date)
        .collect::<Vec<_>>();
    dates.sort_unstable();

    let Some(latest) = dates.last().copied() else {
        return vec![];
    };

    let mut achievements = COUNT_MILESTONES
        .iter()
        .filter_map(|(count, milestone)| {
            dates
                .get(count - 1)
                .map(|date| milestone.achieved(*date))
        })
        .collect::<Vec<_>>();

    let one_week_ago = now - TimeDelta::days(7);
    let this_week = dates
        .iter()
        .filter(|date| **date >= one_week_ago && **date <= now)
        .collect::<Vec<_>>();
    if let Some(date) = this_week
        .last()
        .filter(|_| this_week.len() >= WEEKLY_WARRIOR_WORKOUTS)
    {
        achievements.push(WEEKLY_WARRIOR.achieved(**date));
    }

    achievements.sort_by(|a, b| b.date.cmp(&a.date));

    if let Some(first) = achievements.first_mut() {
        first.is_new = first.date == latest;
    }

    achievements
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::Difficulty;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 18, 0, 0).unwrap()
    }

    fn record(id: u128, days_ago: i64, is_completed: bool) -> WorkoutRecord {
        let date = now() - TimeDelta::days(days_ago);
        WorkoutRecord {
            id: id.into(),
            title: format!("Workout {id}"),
            description: String::new(),
            exercises: vec![],
            duration_minutes: 30,
            difficulty_level: Difficulty::MODERATE,
            is_completed,
            completed_at: is_completed.then_some(date),
            created_at: date,
        }
    }

    fn completed(days_ago: &[i64]) -> Vec<WorkoutRecord> {
        days_ago
            .iter()
            .zip(1..)
            .map(|(days, id)| record(id, *days, true))
            .collect()
    }

    fn ids(achievements: &[Achievement]) -> Vec<&str> {
        achievements.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_compute_achievements_empty() {
        assert!(compute_achievements(&[], now()).is_empty());
        assert!(
            compute_achievements(&[record(1, 0, false), record(2, 1, false)], now()).is_empty()
        );
    }

    #[rstest]
    #[case::first(&[20], &["first-workout"])]
    #[case::four(&[40, 30, 20, 10], &["first-workout"])]
    #[case::five(&[50, 40, 30, 20, 10], &["consistency-5", "first-workout"])]
    #[case::weekly(&[20, 5, 3, 1], &["weekly-consistency", "first-workout"])]
    #[case::ten(
        &[100, 90, 80, 70, 60, 50, 40, 30, 20, 10],
        &["consistency-10", "consistency-5", "first-workout"]
    )]
    #[case::weekly_and_ten(
        &[100, 90, 80, 70, 60, 50, 40, 6, 4, 2],
        &["consistency-10", "weekly-consistency", "consistency-5", "first-workout"]
    )]
    fn test_compute_achievements(#[case] days_ago: &[i64], #[case] expected: &[&str]) {
        assert_eq!(
            ids(&compute_achievements(&completed(days_ago), now())),
            expected
        );
    }

    #[test]
    fn test_compute_achievements_five_not_dedication() {
        let achievements = compute_achievements(&completed(&[9, 8, 7, 6, 5]), now());

        assert!(achievements.iter().any(|a| a.title == "Building Momentum"));
        assert!(achievements.iter().all(|a| a.title != "Dedication"));
    }

    #[test]
    fn test_compute_achievements_dated_by_triggering_workout() {
        let achievements = compute_achievements(&completed(&[2, 40, 30, 20, 10, 1]), now());

        assert_eq!(ids(&achievements), vec!["consistency-5", "first-workout"]);
        assert_eq!(achievements[0].date, now() - TimeDelta::days(2));
        assert_eq!(achievements[1].date, now() - TimeDelta::days(40));
    }

    #[test]
    fn test_compute_achievements_ignores_incomplete() {
        let mut records = completed(&[40, 30, 20, 10]);
        records.push(record(5, 5, false));

        assert_eq!(
            ids(&compute_achievements(&records, now())),
            vec!["first-workout"]
        );
    }

    #[test]
    fn test_compute_achievements_weekly_dated_by_latest() {
        let achievements = compute_achievements(&completed(&[3, 1, 5]), now());

        assert_eq!(achievements[0].id, "weekly-consistency");
        assert_eq!(achievements[0].icon, AchievementIcon::Calendar);
        assert_eq!(achievements[0].date, now() - TimeDelta::days(1));
    }

    #[rstest]
    #[case::earned_by_latest(&[0], &[true])]
    #[case::earned_earlier(&[10, 1], &[false])]
    #[case::only_first_entry(&[6, 4, 2], &[true, false])]
    fn test_compute_achievements_is_new(#[case] days_ago: &[i64], #[case] expected: &[bool]) {
        assert_eq!(
            compute_achievements(&completed(days_ago), now())
                .iter()
                .map(|a| a.is_new)
                .collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn test_achievement_serialize() {
        let achievements = compute_achievements(&completed(&[0]), now());

        assert_eq!(
            serde_json::to_value(&achievements[0]).unwrap(),
            serde_json::json!({
                "id": "first-workout",
                "title": "First Steps",
                "description": "Completed your first workout! Great start on your fitness journey.",
                "icon": "trophy",
                "date": "2024-06-15T18:00:00Z",
                "is_new": true
            })
        );
    }
}
