//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `nexus_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use nexus_core::db::open_db_in_memory;
use nexus_core::{NexusStore, SeedAdmin, SqliteSnapshotRepository};

fn main() {
    println!("nexus_core version={}", nexus_core::core_version());

    // Exercise the full open path against a throwaway in-memory database.
    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("db open failed: {err}");
            std::process::exit(1);
        }
    };

    let repo = match SqliteSnapshotRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("repository init failed: {err}");
            std::process::exit(1);
        }
    };

    let seed = SeedAdmin {
        username: "admin".to_string(),
        password: "local-smoke-only".to_string(),
        display_name: "Administrator".to_string(),
    };

    match NexusStore::open(repo, seed) {
        Ok(store) => println!("store seeded users={}", store.users().len()),
        Err(err) => {
            eprintln!("store open failed: {err}");
            std::process::exit(1);
        }
    }
}
