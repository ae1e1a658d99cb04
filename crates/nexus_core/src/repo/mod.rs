//! Persistence layer abstractions and SQLite implementation.
//!
//! # Responsibility
//! - Define the snapshot load/save contract consumed by the state store.
//! - Isolate SQLite and JSON encoding details from store orchestration.
//!
//! # Invariants
//! - Repository constructors verify connection readiness (schema version,
//!   required table and columns) before any data access.

pub mod snapshot_repo;
