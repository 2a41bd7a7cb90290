//! Repository traits for data access
//!
//! These traits define the interface for data storage without specifying
//! the implementation (SQLite, HTTP, in-memory, etc.)

use async_trait::async_trait;

use crate::domain::Brand;

/// Result type for repository operations
pub type RepoResult<T> = anyhow::Result<T>;

/// Source of the brand directory (the external brand data service).
///
/// Authentication and tenant scoping belong to the implementation.
#[async_trait]
pub trait BrandSource: Send + Sync {
    /// List brands available to the current session, in service order
    async fn list_brands(&self) -> RepoResult<Vec<Brand>>;
}

/// App settings repository trait
///
/// Key-value storage for durable client-side state. Keys use dot-notation
/// namespacing:
/// - `culinaryseoul.selectedBrandId` - active brand identifier
#[async_trait]
pub trait AppSettingsRepository: Send + Sync {
    /// Get a setting value by key
    async fn get(&self, key: &str) -> RepoResult<Option<String>>;

    /// Set a setting value (insert or update)
    async fn set(&self, key: &str, value: &str) -> RepoResult<()>;

    /// Delete a setting. Returns whether a value was removed.
    async fn delete(&self, key: &str) -> RepoResult<bool>;

    /// Get all settings with a given prefix (e.g., "culinaryseoul.")
    async fn list_by_prefix(&self, prefix: &str) -> RepoResult<Vec<(String, String)>>;
}
