//! CulinarySeoul Storage Layer
//!
//! SQLite-backed implementations of the core storage ports.
//!
//! # Usage
//!
//! ```rust,ignore
//! use culinary_storage::{Database, SqliteAppSettingsRepository};
//! use std::sync::Arc;
//! use tokio::sync::Mutex;
//!
//! let db = Database::open(&path)?;
//! let db = Arc::new(Mutex::new(db));
//! let settings = SqliteAppSettingsRepository::new(db.clone());
//! ```

mod database;
mod repositories;

pub use database::Database;
pub use repositories::*;

/// Default database file name.
pub const DATABASE_FILE: &str = "culinaryseoul.db";

/// Database path inside a data directory.
pub fn database_path(data_dir: &std::path::Path) -> std::path::PathBuf {
    data_dir.join(DATABASE_FILE)
}
