//! Account and social-graph record.
//!
//! # Invariants
//! - `friends` is symmetric across users: if A lists B, B lists A. The
//!   accept/remove operations maintain this; the record itself cannot
//!   enforce it.
//! - `pending_invites` holds the ids of users who sent an invite to this
//!   account and are awaiting accept/decline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a platform account.
pub type UserId = Uuid;

/// Platform account with credentials, profile and social-graph state.
///
/// Credentials are stored and compared in plaintext. The store is a
/// single-process, locally persisted model with no network surface; any
/// remote deployment must replace this with salted hashing first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Login name, unique case-insensitively across the store.
    pub username: String,
    pub password: String,
    pub display_name: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    /// Free-form personal values shown on the profile.
    pub values: Vec<String>,
    pub is_admin: bool,
    pub is_private: bool,
    pub created_at: DateTime<Utc>,
    /// Ids of mutually confirmed friends.
    pub friends: Vec<UserId>,
    /// Ids of users whose invite awaits a decision by this account.
    pub pending_invites: Vec<UserId>,
    pub blocked_users: Vec<UserId>,
}

impl User {
    /// Creates a fresh non-admin, private-by-default account.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password: password.into(),
            display_name: display_name.into(),
            avatar: None,
            bio: None,
            values: Vec::new(),
            is_admin: false,
            is_private: true,
            created_at: Utc::now(),
            friends: Vec::new(),
            pending_invites: Vec::new(),
            blocked_users: Vec::new(),
        }
    }

    /// Returns whether `other` is a confirmed friend of this account.
    pub fn is_friend_of(&self, other: UserId) -> bool {
        self.friends.contains(&other)
    }

    /// Returns whether `sender` has an invite awaiting this account's decision.
    pub fn has_pending_invite_from(&self, sender: UserId) -> bool {
        self.pending_invites.contains(&sender)
    }
}
