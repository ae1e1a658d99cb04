//! The persisted whole-store document.
//!
//! # Responsibility
//! - Aggregate every collection plus the active session and the admin
//!   settings into one JSON-serializable record.
//!
//! # Invariants
//! - The document is persisted and reloaded as a unit; there is no
//!   schema versioning or migration of its shape.
//! - Collection order is insertion order and equals display order unless
//!   a read path sorts explicitly.

use crate::model::admin::{AdminSettings, Report};
use crate::model::circle::ResourceGroup;
use crate::model::social::{Achievement, Post};
use crate::model::user::{User, UserId};
use crate::model::wellbeing::{Goal, Habit, JournalEntry, MoodEntry};
use serde::{Deserialize, Serialize};

/// Complete in-memory state of the application, mirrored verbatim to the
/// durable slot on every mutation.
///
/// The active session is stored as the user id, not a copy of the user
/// record, so profile updates can never leave a stale session duplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub users: Vec<User>,
    pub current_user: Option<UserId>,
    pub mood_entries: Vec<MoodEntry>,
    pub goals: Vec<Goal>,
    pub achievements: Vec<Achievement>,
    pub posts: Vec<Post>,
    pub journal_entries: Vec<JournalEntry>,
    pub habits: Vec<Habit>,
    pub resource_groups: Vec<ResourceGroup>,
    pub reports: Vec<Report>,
    pub admin_settings: AdminSettings,
}
