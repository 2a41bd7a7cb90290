//! Brand Selection Coordinator
//!
//! Tracks the single active brand for the session, persists it across
//! reloads and keeps the displayed route consistent with it.

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::ports::{Navigator, Notifier};
use crate::domain::{brand_route, reconcile, Brand, DomainEvent, NavigationContext, Notification};
use crate::event_bus::EventSender;
use crate::service::{AppSettingsService, BrandDirectory, DirectoryLoadError, DirectoryState};

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error(transparent)]
    DirectoryLoad(#[from] DirectoryLoadError),

    #[error("brand not found: {brand_id}")]
    SelectionNotFound { brand_id: String },

    #[error("selection storage failed: {0}")]
    Storage(anyhow::Error),
}

/// Navigation side effect performed after a switch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "path", rename_all = "snake_case")]
pub enum NavigationAction {
    /// Navigated to the same view under the new brand
    Navigated(String),
    /// Current (inventory) route re-rendered in place
    Refreshed,
    None,
}

/// Result of a successful `switch_brand`
#[derive(Debug, Clone, Serialize)]
pub struct BrandSwitch {
    pub brand: Brand,
    pub previous_brand_id: Option<String>,
    pub navigation: NavigationAction,
}

/// Coordinates the brand directory, persisted selection and navigation.
///
/// Injected explicitly into whatever needs it; there is no global instance.
pub struct BrandSelectionCoordinator {
    directory: BrandDirectory,
    settings: AppSettingsService,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    event_sender: EventSender,
    active: RwLock<Option<Brand>>,
}

impl BrandSelectionCoordinator {
    pub fn new(
        directory: BrandDirectory,
        settings: AppSettingsService,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        event_sender: EventSender,
    ) -> Self {
        Self {
            directory,
            settings,
            navigator,
            notifier,
            event_sender,
            active: RwLock::new(None),
        }
    }

    /// Load the directory and resolve the active brand.
    ///
    /// On failure the selection is left absent and the error is surfaced
    /// both as a notification and to the caller.
    pub async fn initialize(&self) -> Result<Option<Brand>, SelectionError> {
        let brands = self.load_directory().await?;
        self.apply_reconciliation(&brands).await
    }

    /// Reload the directory, keeping the current selection while it exists.
    pub async fn refresh(&self) -> Result<Option<Brand>, SelectionError> {
        let previous = self.active.read().await.as_ref().map(|b| b.id.clone());
        let brands = self.load_directory().await?;

        if let Some(previous) = previous {
            if let Some(fresh) = brands.iter().find(|b| b.id == previous) {
                *self.active.write().await = Some(fresh.clone());
                info!(brand_id = %fresh.id, "[BrandSelection] Kept selection after refresh");
                return Ok(Some(fresh.clone()));
            }
            info!(
                brand_id = %previous,
                "[BrandSelection] Selected brand disappeared, reconciling"
            );
        }

        self.apply_reconciliation(&brands).await
    }

    /// Make `brand_id` the active brand.
    ///
    /// Emits: `BrandActivated`
    pub async fn switch_brand(&self, brand_id: &str) -> Result<BrandSwitch, SelectionError> {
        let Some(brand) = self.directory.find(brand_id).await else {
            warn!(brand_id, "[BrandSelection] Switch to unknown brand rejected");
            self.notifier.notify(Notification::brand_not_found(brand_id));
            return Err(SelectionError::SelectionNotFound {
                brand_id: brand_id.to_string(),
            });
        };

        // Persist before activating so storage never points at an unverified id
        if let Err(e) = self.settings.set_selected_brand_id(&brand.id).await {
            return Err(self.storage_failure(e));
        }

        let previous_brand_id = self
            .active
            .write()
            .await
            .replace(brand.clone())
            .map(|b| b.id);

        info!(
            brand_id = %brand.id,
            name = %brand.name,
            "[BrandSelection] Activated brand"
        );

        self.event_sender.emit(DomainEvent::BrandActivated {
            from_brand_id: previous_brand_id.clone(),
            to_brand_id: brand.id.clone(),
            to_brand_name: brand.name.clone(),
        });

        let navigation = self.follow_navigation(&brand.id).await;

        self.notifier.notify(Notification::brand_switched(&brand.name));

        Ok(BrandSwitch {
            brand,
            previous_brand_id,
            navigation,
        })
    }

    /// Forget the persisted selection and deactivate the current brand.
    ///
    /// The next `initialize` seeds the first brand of the directory.
    pub async fn forget_selection(&self) -> Result<bool, SelectionError> {
        let removed = match self.settings.clear_selected_brand_id().await {
            Ok(removed) => removed,
            Err(e) => return Err(self.storage_failure(e)),
        };
        *self.active.write().await = None;
        info!(removed, "[BrandSelection] Forgot persisted selection");
        Ok(removed)
    }

    /// Currently active brand
    pub async fn active_brand(&self) -> Option<Brand> {
        self.active.read().await.clone()
    }

    /// Brands from the last successful load
    pub async fn brands(&self) -> Vec<Brand> {
        self.directory.brands().await
    }

    pub async fn directory_state(&self) -> DirectoryState {
        self.directory.state().await
    }

    /// Persisted selection, which may be stale while the directory is empty
    pub async fn selected_brand_id(&self) -> Result<Option<String>, SelectionError> {
        self.settings
            .selected_brand_id()
            .await
            .map_err(SelectionError::Storage)
    }

    async fn load_directory(&self) -> Result<Vec<Brand>, SelectionError> {
        match self.directory.load_brands().await {
            Ok(brands) => {
                self.event_sender.emit(DomainEvent::BrandDirectoryLoaded {
                    count: brands.len(),
                });
                Ok(brands)
            }
            Err(e) => {
                *self.active.write().await = None;
                self.notifier
                    .notify(Notification::directory_load_failed(&e.reason));
                self.event_sender.emit(DomainEvent::BrandDirectoryLoadFailed {
                    error: e.reason.clone(),
                });
                Err(e.into())
            }
        }
    }

    /// Emits: `BrandSelectionReconciled`
    async fn apply_reconciliation(&self, brands: &[Brand]) -> Result<Option<Brand>, SelectionError> {
        let persisted = match self.settings.selected_brand_id().await {
            Ok(persisted) => persisted,
            Err(e) => return Err(self.storage_failure(e)),
        };

        let result = reconcile(brands, persisted.as_deref());

        if let Some(brand_id) = &result.persist {
            if let Err(e) = self.settings.set_selected_brand_id(brand_id).await {
                return Err(self.storage_failure(e));
            }
        }

        *self.active.write().await = result.active.clone();

        let brand_id = result.active.as_ref().map(|b| b.id.clone());
        info!(
            brand_id = ?brand_id,
            outcome = result.outcome.as_str(),
            "[BrandSelection] Reconciled active brand"
        );

        self.event_sender.emit(DomainEvent::BrandSelectionReconciled {
            brand_id,
            outcome: result.outcome,
        });

        Ok(result.active)
    }

    async fn follow_navigation(&self, brand_id: &str) -> NavigationAction {
        let path = self.navigator.current_path().await;

        match NavigationContext::classify(&path) {
            NavigationContext::BrandScoped { rest, .. } => {
                let target = brand_route(brand_id, rest.as_deref());
                match self.navigator.navigate_to(&target).await {
                    Ok(()) => NavigationAction::Navigated(target),
                    Err(e) => {
                        warn!(from = %path, to = %target, error = %e, "[BrandSelection] Navigation failed");
                        NavigationAction::None
                    }
                }
            }
            NavigationContext::InventoryScoped => match self.navigator.refresh_current().await {
                Ok(()) => NavigationAction::Refreshed,
                Err(e) => {
                    warn!(path = %path, error = %e, "[BrandSelection] Route refresh failed");
                    NavigationAction::None
                }
            },
            NavigationContext::Other => NavigationAction::None,
        }
    }

    fn storage_failure(&self, e: anyhow::Error) -> SelectionError {
        warn!(error = %e, "[BrandSelection] Selection storage failed");
        self.notifier
            .notify(Notification::error("Could not access the saved brand selection"));
        SelectionError::Storage(e)
    }
}
