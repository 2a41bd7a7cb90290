//! Database manager for SQLite storage.
//!
//! ## Migration System
//!
//! Migrations are numbered sequentially and stored in `migrations/`. Each one
//! runs exactly once, tracked via the `schema_migrations` table. To add one,
//! create `migrations/NNN_description.sql` and append it to `MIGRATIONS`.

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;
use tracing::{debug, info};

/// A database migration with version number and SQL content.
struct Migration {
    version: i64,
    name: &'static str,
    sql: &'static str,
}

/// All migrations in order.
const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial",
    sql: include_str!("migrations/001_initial.sql"),
}];

/// SQLite database wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) a database at the given path and apply migrations.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create database directory: {:?}", parent))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database at {:?}", path))?;

        conn.pragma_update(None, "journal_mode", "WAL")?;

        debug!("Opened database at {:?}", path);

        let db = Self { conn };
        db.run_migrations()?;

        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;

        debug!("Opened in-memory database");

        let db = Self { conn };
        db.run_migrations()?;

        Ok(db)
    }

    fn run_migrations(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                applied_at TEXT NOT NULL
            )",
            [],
        )?;

        let current_version = self.schema_version();

        for migration in MIGRATIONS.iter().filter(|m| m.version > current_version) {
            info!(
                "Running migration {} ({})...",
                migration.version, migration.name
            );

            let tx = self.conn.unchecked_transaction()?;

            tx.execute_batch(migration.sql).with_context(|| {
                format!(
                    "Failed to run migration {} ({})",
                    migration.version, migration.name
                )
            })?;

            tx.execute(
                "INSERT OR REPLACE INTO schema_migrations (version, name, applied_at) VALUES (?1, ?2, datetime('now'))",
                rusqlite::params![migration.version, migration.name],
            )?;

            tx.commit()?;
        }

        Ok(())
    }

    /// Current schema version (highest applied migration).
    pub fn schema_version(&self) -> i64 {
        self.conn
            .query_row(
                "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
                [],
                |row| row.get(0),
            )
            .unwrap_or(0)
    }

    /// Get a reference to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
