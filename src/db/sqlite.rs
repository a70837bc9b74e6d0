//! Schema setup for a SilverCare database connection.
//!
//! `SqliteStore::open` and `SqliteStore::open_in_memory` are the only
//! callers outside tests: every connection they hand out has gone
//! through `initialize`.

use rusqlite::Connection;

use super::DatabaseError;

/// Ordered schema migrations. Each runs once, inside its own transaction
/// together with its `schema_version` row.
const MIGRATIONS: &[(i64, &str)] = &[(
    1,
    include_str!("../../resources/migrations/001_initial.sql"),
)];

/// Configure a fresh connection and bring it up to the latest schema.
pub(crate) fn initialize(conn: &Connection) -> Result<(), DatabaseError> {
    // foreign_keys is a no-op inside a transaction, so set it first.
    conn.execute_batch(
        "PRAGMA journal_mode=DELETE;
         PRAGMA foreign_keys=ON;",
    )?;

    let current = schema_version(conn)?;
    for &(version, sql) in MIGRATIONS {
        if version > current {
            apply_migration(conn, version, sql)?;
        }
    }
    Ok(())
}

/// Highest applied migration, 0 for a blank database.
pub(crate) fn schema_version(conn: &Connection) -> Result<i64, DatabaseError> {
    let tracked: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'schema_version')",
        [],
        |row| row.get(0),
    )?;
    if !tracked {
        return Ok(0);
    }
    Ok(conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?)
}

fn apply_migration(conn: &Connection, version: i64, sql: &str) -> Result<(), DatabaseError> {
    let failed = |e: rusqlite::Error| DatabaseError::MigrationFailed {
        version,
        reason: e.to_string(),
    };

    tracing::info!(version, "Applying schema migration");
    // Dropped without commit on any error, which rolls the migration back.
    let tx = conn.unchecked_transaction().map_err(failed)?;
    tx.execute_batch(sql).map_err(failed)?;
    tx.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )
    .map_err(failed)?;
    tx.commit().map_err(failed)
}

/// Migrated in-memory connection for repository tests.
#[cfg(test)]
pub(crate) fn open_memory_database() -> Result<Connection, DatabaseError> {
    let conn = Connection::open_in_memory()?;
    initialize(&conn)?;
    Ok(conn)
}
