//! Core domain logic for NEXUS.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod export;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use export::{journal_markdown, snapshot_json};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::admin::{AdminSettings, Report, ReportId, ReportStatus};
pub use model::circle::{ResourceGroup, ResourceGroupId, ResourceMember, ResourceMemberId};
pub use model::snapshot::StoreSnapshot;
pub use model::social::{
    Achievement, AchievementId, AchievementKind, Comment, CommentId, Post, PostId, PostKind,
    Visibility,
};
pub use model::user::{User, UserId};
pub use model::wellbeing::{
    Goal, GoalId, GoalStatus, Habit, HabitFrequency, HabitId, JournalEntry, JournalEntryId, Mood,
    MoodEntry, MoodEntryId,
};
pub use repo::snapshot_repo::{
    RepoError, RepoResult, SnapshotRepository, SqliteSnapshotRepository,
};
pub use store::{NexusStore, SeedAdmin, StoreError, StoreResult, SNAPSHOT_SLOT};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
