//! Personal wellbeing records: moods, goals, habits, journal.
//!
//! # Responsibility
//! - Define the self-tracking entities and their derived properties.
//!
//! # Invariants
//! - `Habit::completed_dates` is the source of truth for completion;
//!   streaks are always recomputed from it.
//! - `Goal` status is a function of `progress`, never stored.

use crate::model::social::Visibility;
use crate::model::user::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

pub type MoodEntryId = Uuid;
pub type GoalId = Uuid;
pub type HabitId = Uuid;
pub type JournalEntryId = Uuid;

/// Categorical mood selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Joy,
    Calm,
    Energy,
    Love,
    Neutral,
    Sadness,
    Anxiety,
    Anger,
}

impl Mood {
    /// Numeric score on a descending 8..=1 scale from most to least
    /// positive. Derived from the category, never persisted.
    pub fn score(self) -> u8 {
        match self {
            Self::Joy => 8,
            Self::Calm => 7,
            Self::Energy => 6,
            Self::Love => 5,
            Self::Neutral => 4,
            Self::Sadness => 3,
            Self::Anxiety => 2,
            Self::Anger => 1,
        }
    }
}

/// One mood check-in, keyed by caller convention to (owner, calendar day).
///
/// The store does not enforce per-day uniqueness; create/edit flows look
/// entries up through the `(user_id, date)` pair before deciding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: MoodEntryId,
    pub user_id: UserId,
    pub date: NaiveDate,
    pub mood: Mood,
    /// Subjective intensity, 0..=100. Not validated here.
    pub intensity: u8,
    /// Secondary emotion tags picked alongside the main category.
    pub emotions: Vec<String>,
    pub note: Option<String>,
    pub is_private: bool,
}

impl MoodEntry {
    pub fn new(user_id: UserId, date: NaiveDate, mood: Mood, intensity: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            mood,
            intensity,
            emotions: Vec::new(),
            note: None,
            is_private: true,
        }
    }

    /// Numeric score of the selected mood category.
    pub fn score(&self) -> u8 {
        self.mood.score()
    }
}

/// Goal lifecycle state, derived from progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Active,
    Completed,
}

/// A user-owned aspiration with progress tracking and a visibility scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    /// Why the owner wants this.
    pub motivation: String,
    /// What the owner fears about failing it.
    pub fear: Option<String>,
    /// Subjective difficulty, 1..=10. Not validated here.
    pub difficulty: u8,
    /// Completion percentage, 0..=100.
    pub progress: u8,
    pub visibility: Visibility,
    /// Habits supporting this goal.
    pub linked_habits: Vec<HabitId>,
    pub created_at: DateTime<Utc>,
    pub target_date: Option<NaiveDate>,
}

impl Goal {
    pub fn new(user_id: UserId, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: title.into(),
            description: String::new(),
            motivation: String::new(),
            fear: None,
            difficulty: 1,
            progress: 0,
            visibility: Visibility::Private,
            linked_habits: Vec::new(),
            created_at: Utc::now(),
            target_date: None,
        }
    }

    /// Current lifecycle state: completed once progress reaches 100.
    pub fn status(&self) -> GoalStatus {
        if self.progress >= 100 {
            GoalStatus::Completed
        } else {
            GoalStatus::Active
        }
    }
}

/// Recurrence cadence of a habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitFrequency {
    Daily,
    Weekly,
    Custom,
}

/// A recurring commitment with a per-day completion ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub user_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub frequency: HabitFrequency,
    /// Days on which the habit was marked done. Source of truth for all
    /// streak math.
    pub completed_dates: BTreeSet<NaiveDate>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

impl Habit {
    pub fn new(user_id: UserId, title: impl Into<String>, frequency: HabitFrequency) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: title.into(),
            description: None,
            frequency,
            completed_dates: BTreeSet::new(),
            is_public: false,
            created_at: Utc::now(),
        }
    }

    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completed_dates.contains(&date)
    }

    /// Consecutive completed days ending at `today`, walking backwards.
    ///
    /// An as-yet-uncompleted `today` does not break the run; the count
    /// then starts at yesterday. Any earlier gap ends it.
    pub fn streak_through(&self, today: NaiveDate) -> u32 {
        let mut streak = 0;
        let mut cursor = today;
        loop {
            if self.completed_dates.contains(&cursor) {
                streak += 1;
            } else if cursor != today {
                break;
            }
            match cursor.pred_opt() {
                Some(previous) => cursor = previous,
                None => break,
            }
        }
        streak
    }
}

/// Private free-text note. The journal has no visibility scope: it is
/// owner-only by convention throughout the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: JournalEntryId,
    pub user_id: UserId,
    pub content: String,
    pub tags: Vec<String>,
    /// Optional mood label attached at writing time.
    pub mood: Option<Mood>,
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    pub fn new(user_id: UserId, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            content: content.into(),
            tags: Vec::new(),
            mood: None,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Goal, GoalStatus, Habit, HabitFrequency, Mood};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn mood_scores_span_descending_scale() {
        assert_eq!(Mood::Joy.score(), 8);
        assert_eq!(Mood::Neutral.score(), 4);
        assert_eq!(Mood::Anger.score(), 1);
    }

    #[test]
    fn goal_status_flips_at_full_progress() {
        let mut goal = Goal::new(Uuid::new_v4(), "learn rust");
        assert_eq!(goal.status(), GoalStatus::Active);
        goal.progress = 99;
        assert_eq!(goal.status(), GoalStatus::Active);
        goal.progress = 100;
        assert_eq!(goal.status(), GoalStatus::Completed);
    }

    #[test]
    fn streak_counts_consecutive_days_up_to_today() {
        let mut habit = Habit::new(Uuid::new_v4(), "walk", HabitFrequency::Daily);
        habit.completed_dates.insert(date(2026, 3, 8));
        habit.completed_dates.insert(date(2026, 3, 9));
        habit.completed_dates.insert(date(2026, 3, 10));
        assert_eq!(habit.streak_through(date(2026, 3, 10)), 3);
    }

    #[test]
    fn streak_tolerates_uncompleted_today() {
        let mut habit = Habit::new(Uuid::new_v4(), "read", HabitFrequency::Daily);
        habit.completed_dates.insert(date(2026, 3, 8));
        habit.completed_dates.insert(date(2026, 3, 9));
        assert_eq!(habit.streak_through(date(2026, 3, 10)), 2);
    }

    #[test]
    fn streak_breaks_on_gap_before_yesterday() {
        let mut habit = Habit::new(Uuid::new_v4(), "stretch", HabitFrequency::Daily);
        habit.completed_dates.insert(date(2026, 3, 6));
        habit.completed_dates.insert(date(2026, 3, 7));
        // 2026-03-08 missing.
        habit.completed_dates.insert(date(2026, 3, 9));
        assert_eq!(habit.streak_through(date(2026, 3, 9)), 1);
    }

    #[test]
    fn streak_is_zero_without_recent_completions() {
        let habit = Habit::new(Uuid::new_v4(), "meditate", HabitFrequency::Daily);
        assert_eq!(habit.streak_through(date(2026, 3, 10)), 0);
    }
}
