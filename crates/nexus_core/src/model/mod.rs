//! Domain model for the NEXUS wellbeing store.
//!
//! # Responsibility
//! - Define the canonical entity records held by the state store.
//! - Keep derived values (mood score, goal status, habit streak) as
//!   computed properties instead of stored fields.
//!
//! # Invariants
//! - Every entity is identified by a stable v4 UUID generated at
//!   construction time and never reused.
//! - User-scoped entities carry the owning `user_id`; nothing is
//!   shared-owned.

pub mod admin;
pub mod circle;
pub mod snapshot;
pub mod social;
pub mod user;
pub mod wellbeing;
