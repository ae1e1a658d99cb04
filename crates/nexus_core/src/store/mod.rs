//! The application state store.
//!
//! # Responsibility
//! - Hold every entity collection in memory and expose the mutation and
//!   query operations consumed by presentation layers.
//! - Mirror the whole snapshot to the durable slot after every mutation.
//!
//! # Invariants
//! - Single-writer, run-to-completion: every operation is one synchronous
//!   in-memory transform followed by a write-through commit. No operation
//!   suspends, times out or observes concurrent state.
//! - Mutations targeting a missing id fail with `StoreError::NotFound`
//!   before any state change is committed.
//!
//! # See also
//! - DESIGN.md

use crate::model::snapshot::StoreSnapshot;
use crate::model::user::{User, UserId};
use crate::repo::snapshot_repo::{RepoError, SnapshotRepository};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

mod admin;
mod circles;
mod session;
mod social;
mod wellbeing;

/// Fixed slot key the whole store is persisted under.
pub const SNAPSHOT_SLOT: &str = "nexus-storage";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level operation error.
#[derive(Debug)]
pub enum StoreError {
    /// Persistence-layer failure while loading or committing.
    Repo(RepoError),
    /// The targeted record does not exist.
    NotFound { entity: &'static str, id: Uuid },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Credentials for the administrator account seeded into a fresh store.
///
/// The caller owns this secret; no default credential is compiled into the
/// library.
#[derive(Debug, Clone)]
pub struct SeedAdmin {
    pub username: String,
    pub password: String,
    pub display_name: String,
}

/// Process-wide state container, explicitly constructed and passed by
/// reference to consumers. There is no implicit module-level instance.
pub struct NexusStore<R: SnapshotRepository> {
    repo: R,
    state: StoreSnapshot,
}

impl<R: SnapshotRepository> NexusStore<R> {
    /// Loads the persisted snapshot, or seeds a fresh store holding
    /// exactly one administrator account built from `seed`.
    pub fn open(repo: R, seed: SeedAdmin) -> StoreResult<Self> {
        if let Some(state) = repo.load(SNAPSHOT_SLOT)? {
            info!(
                "event=store_open module=store status=ok mode=loaded users={}",
                state.users.len()
            );
            return Ok(Self { repo, state });
        }

        let mut admin = User::new(seed.username, seed.password, seed.display_name);
        admin.is_admin = true;

        let mut state = StoreSnapshot::default();
        state.users.push(admin);
        repo.save(SNAPSHOT_SLOT, &state)?;

        info!("event=store_open module=store status=ok mode=seeded users=1");
        Ok(Self { repo, state })
    }

    /// Read access to the complete current snapshot.
    pub fn snapshot(&self) -> &StoreSnapshot {
        &self.state
    }

    /// Looks up a user by id.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.state.users.iter().find(|user| user.id == id)
    }

    /// All known accounts in insertion order.
    pub fn users(&self) -> &[User] {
        &self.state.users
    }

    pub(crate) fn require_user_index(&self, id: UserId) -> StoreResult<usize> {
        self.state
            .users
            .iter()
            .position(|user| user.id == id)
            .ok_or(StoreError::NotFound {
                entity: "user",
                id,
            })
    }

    pub(crate) fn username_taken(&self, username: &str) -> bool {
        let needle = username.to_lowercase();
        self.state
            .users
            .iter()
            .any(|user| user.username.to_lowercase() == needle)
    }

    /// Writes the current snapshot through to the durable slot.
    pub(crate) fn commit(&mut self) -> StoreResult<()> {
        if let Err(err) = self.repo.save(SNAPSHOT_SLOT, &self.state) {
            error!("event=store_commit module=store status=error error={err}");
            return Err(err.into());
        }
        Ok(())
    }
}
