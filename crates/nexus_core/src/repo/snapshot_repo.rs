//! Snapshot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Load and save whole-store snapshot documents under named slots.
//! - Keep SQL and JSON encoding details inside the persistence boundary.
//!
//! # Invariants
//! - One slot holds at most one document; `save` upserts in place.
//! - Read paths reject malformed persisted documents instead of masking
//!   them.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::snapshot::StoreSnapshot;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for snapshot load/save operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Snapshot could not be encoded to JSON.
    Serialize(serde_json::Error),
    /// Persisted document exists but does not decode to a snapshot.
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to encode snapshot: {err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted snapshot data: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not migrated: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Load/save contract for whole-store snapshot documents.
pub trait SnapshotRepository {
    /// Reads the document stored under `slot`, if any.
    fn load(&self, slot: &str) -> RepoResult<Option<StoreSnapshot>>;
    /// Writes `snapshot` under `slot`, replacing any previous document.
    fn save(&self, slot: &str, snapshot: &StoreSnapshot) -> RepoResult<()>;
}

/// SQLite-backed snapshot repository over the `snapshots` slot table.
pub struct SqliteSnapshotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl SnapshotRepository for SqliteSnapshotRepository<'_> {
    fn load(&self, slot: &str) -> RepoResult<Option<StoreSnapshot>> {
        let document: Option<String> = self
            .conn
            .query_row(
                "SELECT document FROM snapshots WHERE slot = ?1;",
                [slot],
                |row| row.get(0),
            )
            .optional()?;

        match document {
            Some(text) => {
                let snapshot = serde_json::from_str(&text).map_err(|err| {
                    RepoError::InvalidData(format!(
                        "slot `{slot}` holds a malformed snapshot document: {err}"
                    ))
                })?;
                Ok(Some(snapshot))
            }
            None => Ok(None),
        }
    }

    fn save(&self, slot: &str, snapshot: &StoreSnapshot) -> RepoResult<()> {
        let document = serde_json::to_string(snapshot).map_err(RepoError::Serialize)?;

        self.conn.execute(
            "INSERT INTO snapshots (slot, document, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(slot) DO UPDATE SET
                document = excluded.document,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![slot, document],
        )?;

        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "snapshots")? {
        return Err(RepoError::MissingRequiredTable("snapshots"));
    }

    for column in ["slot", "document", "updated_at"] {
        if !table_has_column(conn, "snapshots", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "snapshots",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
