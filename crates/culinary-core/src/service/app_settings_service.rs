//! App Settings Service
//!
//! Typed access to durable client-side settings on top of the
//! `AppSettingsRepository` port.

use std::sync::Arc;
use tracing::debug;

use crate::AppSettingsRepository;

// =============================================================================
// Setting Keys (centralized constants)
// =============================================================================

/// Setting key constants for type-safe access.
pub mod keys {
    /// Namespace shared by all dashboard keys
    pub const NAMESPACE: &str = "culinaryseoul.";

    /// Brand selection namespace
    pub mod brand {
        /// Identifier of the active brand (string)
        pub const SELECTED_BRAND_ID: &str = "culinaryseoul.selectedBrandId";
    }
}

// =============================================================================
// AppSettingsService
// =============================================================================

/// Service for managing application settings with typed access.
///
/// # Example
/// ```ignore
/// let service = AppSettingsService::new(repo);
///
/// service.set_selected_brand_id("b2").await?;
/// assert_eq!(service.selected_brand_id().await?, Some("b2".into()));
/// ```
pub struct AppSettingsService {
    repository: Arc<dyn AppSettingsRepository>,
}

impl AppSettingsService {
    /// Create a new settings service with the given repository.
    pub fn new(repository: Arc<dyn AppSettingsRepository>) -> Self {
        Self { repository }
    }

    // =========================================================================
    // Brand selection
    // =========================================================================

    /// Get the persisted brand selection.
    ///
    /// Read failures are returned rather than treated as unset, so
    /// reconciliation never overwrites a selection it could not read.
    pub async fn selected_brand_id(&self) -> anyhow::Result<Option<String>> {
        let value = self.repository.get(keys::brand::SELECTED_BRAND_ID).await?;
        Ok(value.filter(|id| !id.is_empty()))
    }

    /// Persist the brand selection, overwriting any prior value.
    pub async fn set_selected_brand_id(&self, brand_id: &str) -> anyhow::Result<()> {
        debug!(brand_id, "[Settings] Persisting selected brand");
        self.repository
            .set(keys::brand::SELECTED_BRAND_ID, brand_id)
            .await
    }

    /// Forget the persisted brand selection.
    pub async fn clear_selected_brand_id(&self) -> anyhow::Result<bool> {
        debug!("[Settings] Clearing selected brand");
        self.repository.delete(keys::brand::SELECTED_BRAND_ID).await
    }
}
