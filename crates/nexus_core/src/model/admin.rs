//! Moderation tickets and instance-wide settings.
//!
//! # Invariants
//! - Reports enter the store as `Pending` and move through
//!   `Reviewed`/`Resolved` exclusively via the admin update operation.
//! - `AdminSettings` is a singleton record with no versioning or audit
//!   trail.

use crate::model::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ReportId = Uuid;

/// Moderation ticket lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    Reviewed,
    Resolved,
}

/// A user-filed moderation ticket about another user.
///
/// Reports reference both parties by id but are owned by neither; they
/// survive deletion of the reported account as moderation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    pub reporter_id: UserId,
    pub reported_user_id: UserId,
    pub reason: String,
    pub status: ReportStatus,
    pub admin_note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Report {
    pub fn new(reporter_id: UserId, reported_user_id: UserId, reason: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            reporter_id,
            reported_user_id,
            reason: reason.into(),
            status: ReportStatus::Pending,
            admin_note: None,
            created_at: Utc::now(),
        }
    }
}

/// Instance branding and operational flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSettings {
    /// HSL triple used by the UI theme.
    pub primary_color: String,
    pub accent_color: String,
    pub app_name: String,
    pub welcome_message: String,
    pub maintenance_mode: bool,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            primary_color: "174 72% 56%".to_string(),
            accent_color: "262 60% 60%".to_string(),
            app_name: "NEXUS".to_string(),
            welcome_message: "Bienvenue dans votre espace personnel".to_string(),
            maintenance_mode: false,
        }
    }
}
