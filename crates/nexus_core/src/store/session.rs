//! Identity and session operations.
//!
//! # Responsibility
//! - Registration, login/logout and account maintenance, including the
//!   cascade on account deletion.
//!
//! # Invariants
//! - Usernames are unique case-insensitively; registration returns an
//!   absent result on collision.
//! - Credential comparison is exact on password, case-insensitive on
//!   username, both in plaintext.
//! - Deleting an account removes every entity it owns and every
//!   social-graph reference to it held by surviving accounts.

use crate::model::user::{User, UserId};
use crate::repo::snapshot_repo::SnapshotRepository;
use crate::store::{NexusStore, StoreResult};

impl<R: SnapshotRepository> NexusStore<R> {
    /// Creates an account and makes it the active session.
    ///
    /// Returns `None` when the username collides case-insensitively with
    /// an existing account. The new account is private and non-admin.
    pub fn register(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        display_name: impl Into<String>,
    ) -> StoreResult<Option<User>> {
        let username = username.into();
        if self.username_taken(&username) {
            return Ok(None);
        }

        let user = User::new(username, password.into(), display_name.into());
        self.state.current_user = Some(user.id);
        self.state.users.push(user.clone());
        self.commit()?;
        Ok(Some(user))
    }

    /// Authenticates and activates a session.
    ///
    /// Returns `None` when no account matches both the username
    /// (case-insensitively) and the password (exactly).
    pub fn login(
        &mut self,
        username: &str,
        password: &str,
    ) -> StoreResult<Option<User>> {
        let needle = username.to_lowercase();
        let matched = self
            .state
            .users
            .iter()
            .find(|user| user.username.to_lowercase() == needle && user.password == password)
            .cloned();

        if let Some(user) = &matched {
            self.state.current_user = Some(user.id);
            self.commit()?;
        }
        Ok(matched)
    }

    /// Clears the active session. No data is deleted.
    pub fn logout(&mut self) -> StoreResult<()> {
        self.state.current_user = None;
        self.commit()
    }

    /// Resolves the active session against the user collection.
    pub fn current_user(&self) -> Option<&User> {
        self.state.current_user.and_then(|id| self.user(id))
    }

    /// Applies a partial update to the matching account.
    pub fn update_user(
        &mut self,
        id: UserId,
        mutate: impl FnOnce(&mut User),
    ) -> StoreResult<()> {
        let index = self.require_user_index(id)?;
        mutate(&mut self.state.users[index]);
        self.commit()
    }

    /// Removes an account and cascades over everything it owns.
    ///
    /// Posts, mood entries, goals, achievements, journal entries, habits
    /// and resource groups owned by the account are deleted. Surviving
    /// accounts' friend/invite/block lists are scrubbed of the id, and a
    /// session held by the deleted account is closed. Reports referencing
    /// the account are kept as moderation history.
    pub fn delete_user(&mut self, id: UserId) -> StoreResult<()> {
        self.require_user_index(id)?;
        let state = &mut self.state;

        state.users.retain(|user| user.id != id);
        state.posts.retain(|post| post.user_id != id);
        state.mood_entries.retain(|entry| entry.user_id != id);
        state.goals.retain(|goal| goal.user_id != id);
        state.achievements.retain(|achievement| achievement.user_id != id);
        state.journal_entries.retain(|entry| entry.user_id != id);
        state.habits.retain(|habit| habit.user_id != id);
        state.resource_groups.retain(|group| group.user_id != id);

        for user in &mut state.users {
            user.friends.retain(|friend| *friend != id);
            user.pending_invites.retain(|sender| *sender != id);
            user.blocked_users.retain(|blocked| *blocked != id);
        }

        if state.current_user == Some(id) {
            state.current_user = None;
        }

        self.commit()
    }
}
