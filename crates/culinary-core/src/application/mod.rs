//! Application Services - orchestration layer with event emission
//!
//! Application services sit between the presentation layer (router, CLI
//! commands) and the domain layer (repositories, domain services). They
//! orchestrate operations across ports, emit events after state changes and
//! decide when the user is notified.
//!
//! ```text
//! Presentation (router, toasts, CLI)
//!         │        ▲
//!         ▼        │ Navigator / Notifier
//! ┌─────────────────────────────────┐
//! │   BrandSelectionCoordinator     │──► Event Bus
//! └──────────────┬──────────────────┘
//!                ▼
//!   BrandDirectory · AppSettingsService
//!                ▼
//!   BrandSource · AppSettingsRepository
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let coordinator = BrandSelectionBuilder::new()
//!     .with_event_bus(bus)
//!     .with_brand_source(source)
//!     .with_settings_repo(settings)
//!     .with_navigator(navigator)
//!     .with_notifier(notifier)
//!     .build()?;
//!
//! coordinator.initialize().await?;
//! ```

mod brand_selection;
mod ports;

pub use brand_selection::{BrandSelectionCoordinator, BrandSwitch, NavigationAction, SelectionError};
pub use ports::{Navigator, Notifier};

use std::sync::Arc;

use crate::event_bus::EventBus;
use crate::repository::{AppSettingsRepository, BrandSource};
use crate::service::{AppSettingsService, BrandDirectory};

/// Builder wiring the coordinator to its ports
#[derive(Default)]
pub struct BrandSelectionBuilder {
    event_bus: Option<Arc<EventBus>>,
    brand_source: Option<Arc<dyn BrandSource>>,
    settings_repo: Option<Arc<dyn AppSettingsRepository>>,
    navigator: Option<Arc<dyn Navigator>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl BrandSelectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_event_bus(mut self, bus: Arc<EventBus>) -> Self {
        self.event_bus = Some(bus);
        self
    }

    pub fn with_brand_source(mut self, source: Arc<dyn BrandSource>) -> Self {
        self.brand_source = Some(source);
        self
    }

    pub fn with_settings_repo(mut self, repo: Arc<dyn AppSettingsRepository>) -> Self {
        self.settings_repo = Some(repo);
        self
    }

    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn build(self) -> anyhow::Result<BrandSelectionCoordinator> {
        let event_bus = self
            .event_bus
            .ok_or_else(|| anyhow::anyhow!("Event bus required"))?;
        let brand_source = self
            .brand_source
            .ok_or_else(|| anyhow::anyhow!("Brand source required"))?;
        let settings_repo = self
            .settings_repo
            .ok_or_else(|| anyhow::anyhow!("Settings repository required"))?;
        let navigator = self
            .navigator
            .ok_or_else(|| anyhow::anyhow!("Navigator required"))?;
        let notifier = self
            .notifier
            .ok_or_else(|| anyhow::anyhow!("Notifier required"))?;

        Ok(BrandSelectionCoordinator::new(
            BrandDirectory::new(brand_source),
            AppSettingsService::new(settings_repo),
            navigator,
            notifier,
            event_bus.sender(),
        ))
    }
}
