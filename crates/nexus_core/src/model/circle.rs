//! Personal resource circles.
//!
//! Circles are user-curated contact groups for private reference. Their
//! members are named records, not platform accounts, and never take part
//! in the social graph.

use crate::model::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ResourceGroupId = Uuid;
pub type ResourceMemberId = Uuid;

/// A named contact inside a resource group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceMember {
    pub id: ResourceMemberId,
    pub name: String,
    pub image: Option<String>,
    pub notes: Option<String>,
    pub tags: Vec<String>,
}

impl ResourceMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            image: None,
            notes: None,
            tags: Vec::new(),
        }
    }
}

/// A user-owned circle of contacts with a display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceGroup {
    pub id: ResourceGroupId,
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub members: Vec<ResourceMember>,
    pub created_at: DateTime<Utc>,
}

impl ResourceGroup {
    pub fn new(user_id: UserId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            description: None,
            color: color.into(),
            members: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
