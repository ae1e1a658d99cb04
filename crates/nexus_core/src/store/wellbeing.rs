//! Self-tracking operations: moods, goals, habits, journal.
//!
//! # Responsibility
//! - CRUD families for the wellbeing entities and the habit completion
//!   toggle.
//!
//! # Invariants
//! - No field content is validated here; the store trusts its callers.
//! - Mood entries expose no delete; goals, habits and journal entries do.

use crate::model::user::UserId;
use crate::model::wellbeing::{
    Goal, GoalId, Habit, HabitId, JournalEntry, JournalEntryId, MoodEntry, MoodEntryId,
};
use crate::repo::snapshot_repo::SnapshotRepository;
use crate::store::{NexusStore, StoreError, StoreResult};
use chrono::NaiveDate;

impl<R: SnapshotRepository> NexusStore<R> {
    // --- moods ---

    /// Appends a mood entry and returns its id.
    pub fn add_mood_entry(&mut self, entry: MoodEntry) -> StoreResult<MoodEntryId> {
        let id = entry.id;
        self.state.mood_entries.push(entry);
        self.commit()?;
        Ok(id)
    }

    /// Applies a partial update to the matching mood entry.
    pub fn update_mood_entry(
        &mut self,
        id: MoodEntryId,
        mutate: impl FnOnce(&mut MoodEntry),
    ) -> StoreResult<()> {
        let index = self
            .state
            .mood_entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(StoreError::NotFound {
                entity: "mood entry",
                id,
            })?;
        mutate(&mut self.state.mood_entries[index]);
        self.commit()
    }

    /// The entry a user recorded for a calendar day, if any. Create/edit
    /// flows key their lookups on this pair.
    pub fn mood_entry_for(&self, user: UserId, date: NaiveDate) -> Option<&MoodEntry> {
        self.state
            .mood_entries
            .iter()
            .find(|entry| entry.user_id == user && entry.date == date)
    }

    /// All of a user's mood entries in insertion order.
    pub fn mood_entries_for(&self, user: UserId) -> Vec<&MoodEntry> {
        self.state
            .mood_entries
            .iter()
            .filter(|entry| entry.user_id == user)
            .collect()
    }

    // --- goals ---

    /// Appends a goal and returns its id.
    pub fn add_goal(&mut self, goal: Goal) -> StoreResult<GoalId> {
        let id = goal.id;
        self.state.goals.push(goal);
        self.commit()?;
        Ok(id)
    }

    /// Applies a partial update to the matching goal.
    pub fn update_goal(
        &mut self,
        id: GoalId,
        mutate: impl FnOnce(&mut Goal),
    ) -> StoreResult<()> {
        let index = self
            .state
            .goals
            .iter()
            .position(|goal| goal.id == id)
            .ok_or(StoreError::NotFound { entity: "goal", id })?;
        mutate(&mut self.state.goals[index]);
        self.commit()
    }

    /// Removes the matching goal.
    pub fn delete_goal(&mut self, id: GoalId) -> StoreResult<()> {
        if !self.state.goals.iter().any(|goal| goal.id == id) {
            return Err(StoreError::NotFound { entity: "goal", id });
        }
        self.state.goals.retain(|goal| goal.id != id);
        self.commit()
    }

    pub fn goal(&self, id: GoalId) -> Option<&Goal> {
        self.state.goals.iter().find(|goal| goal.id == id)
    }

    /// All of a user's goals in insertion order.
    pub fn goals_for(&self, user: UserId) -> Vec<&Goal> {
        self.state
            .goals
            .iter()
            .filter(|goal| goal.user_id == user)
            .collect()
    }

    // --- habits ---

    /// Appends a habit and returns its id.
    pub fn add_habit(&mut self, habit: Habit) -> StoreResult<HabitId> {
        let id = habit.id;
        self.state.habits.push(habit);
        self.commit()?;
        Ok(id)
    }

    /// Applies a partial update to the matching habit.
    pub fn update_habit(
        &mut self,
        id: HabitId,
        mutate: impl FnOnce(&mut Habit),
    ) -> StoreResult<()> {
        let index = self.require_habit_index(id)?;
        mutate(&mut self.state.habits[index]);
        self.commit()
    }

    /// Removes the matching habit.
    pub fn delete_habit(&mut self, id: HabitId) -> StoreResult<()> {
        self.require_habit_index(id)?;
        self.state.habits.retain(|habit| habit.id != id);
        self.commit()
    }

    /// Toggles a day in the habit's completion ledger. Marking the same
    /// day twice restores the original state.
    pub fn toggle_habit_completion(&mut self, id: HabitId, date: NaiveDate) -> StoreResult<()> {
        let index = self.require_habit_index(id)?;
        let dates = &mut self.state.habits[index].completed_dates;
        if !dates.remove(&date) {
            dates.insert(date);
        }
        self.commit()
    }

    pub fn habit(&self, id: HabitId) -> Option<&Habit> {
        self.state.habits.iter().find(|habit| habit.id == id)
    }

    /// All of a user's habits in insertion order.
    pub fn habits_for(&self, user: UserId) -> Vec<&Habit> {
        self.state
            .habits
            .iter()
            .filter(|habit| habit.user_id == user)
            .collect()
    }

    // --- journal ---

    /// Appends a journal entry and returns its id.
    pub fn add_journal_entry(&mut self, entry: JournalEntry) -> StoreResult<JournalEntryId> {
        let id = entry.id;
        self.state.journal_entries.push(entry);
        self.commit()?;
        Ok(id)
    }

    /// Applies a partial update to the matching journal entry.
    pub fn update_journal_entry(
        &mut self,
        id: JournalEntryId,
        mutate: impl FnOnce(&mut JournalEntry),
    ) -> StoreResult<()> {
        let index = self
            .state
            .journal_entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(StoreError::NotFound {
                entity: "journal entry",
                id,
            })?;
        mutate(&mut self.state.journal_entries[index]);
        self.commit()
    }

    /// Removes the matching journal entry.
    pub fn delete_journal_entry(&mut self, id: JournalEntryId) -> StoreResult<()> {
        if !self.state.journal_entries.iter().any(|entry| entry.id == id) {
            return Err(StoreError::NotFound {
                entity: "journal entry",
                id,
            });
        }
        self.state.journal_entries.retain(|entry| entry.id != id);
        self.commit()
    }

    /// All of a user's journal entries in insertion order, which equals
    /// creation order under the single-writer model.
    pub fn journal_entries_for(&self, user: UserId) -> Vec<&JournalEntry> {
        self.state
            .journal_entries
            .iter()
            .filter(|entry| entry.user_id == user)
            .collect()
    }

    fn require_habit_index(&self, id: HabitId) -> StoreResult<usize> {
        self.state
            .habits
            .iter()
            .position(|habit| habit.id == id)
            .ok_or(StoreError::NotFound {
                entity: "habit",
                id,
            })
    }
}
