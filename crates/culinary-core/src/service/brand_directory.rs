//! Brand directory - loads the brands available to the current session
//!
//! Wraps a `BrandSource` with loading/error state that views can poll.
//! One attempt per call, no retry; when loads overlap the last one to
//! resolve determines the final state.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::domain::Brand;
use crate::repository::BrandSource;

/// The brand service could not be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load brand directory: {reason}")]
pub struct DirectoryLoadError {
    pub reason: String,
}

impl DirectoryLoadError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Snapshot of the directory as last loaded
#[derive(Debug, Clone, Default, Serialize)]
pub struct DirectoryState {
    /// Brands in service order
    pub brands: Vec<Brand>,
    pub loading: bool,
    /// Message of the last failed load, cleared on success
    pub error: Option<String>,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl DirectoryState {
    pub fn find(&self, brand_id: &str) -> Option<&Brand> {
        self.brands.iter().find(|b| b.id == brand_id)
    }
}

/// Brand directory provider
pub struct BrandDirectory {
    source: Arc<dyn BrandSource>,
    state: RwLock<DirectoryState>,
}

impl BrandDirectory {
    pub fn new(source: Arc<dyn BrandSource>) -> Self {
        Self {
            source,
            state: RwLock::new(DirectoryState::default()),
        }
    }

    /// Load brands from the source, in the order it returns them.
    pub async fn load_brands(&self) -> Result<Vec<Brand>, DirectoryLoadError> {
        self.state.write().await.loading = true;

        // The lock is not held across the fetch
        let result = self.source.list_brands().await;

        let mut state = self.state.write().await;
        state.loading = false;

        match result {
            Ok(brands) => {
                info!(count = brands.len(), "[BrandDirectory] Loaded brands");
                state.brands = brands.clone();
                state.error = None;
                state.loaded_at = Some(Utc::now());
                Ok(brands)
            }
            Err(e) => {
                let err = DirectoryLoadError::new(format!("{:#}", e));
                warn!(error = %err.reason, "[BrandDirectory] Failed to load brands");
                state.brands.clear();
                state.error = Some(err.reason.clone());
                Err(err)
            }
        }
    }

    /// Current directory snapshot
    pub async fn state(&self) -> DirectoryState {
        self.state.read().await.clone()
    }

    /// Brands from the last successful load
    pub async fn brands(&self) -> Vec<Brand> {
        self.state.read().await.brands.clone()
    }

    /// Look up a loaded brand by id
    pub async fn find(&self, brand_id: &str) -> Option<Brand> {
        self.state.read().await.find(brand_id).cloned()
    }
}
