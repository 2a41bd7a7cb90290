//! Application state: wires storage, the brand service and terminal adapters
//! into a brand selection coordinator.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use culinary_core::{
    BrandSelectionBuilder, BrandSelectionCoordinator, DashboardConfig, DomainEventEnvelope,
    EventBus, EventReceiver, HttpBrandSource,
};
use culinary_storage::{database_path, Database, SqliteAppSettingsRepository};
use tokio::sync::Mutex;
use tracing::info;

use crate::adapters::{SessionNavigator, TerminalNotifier};

pub struct AppState {
    pub coordinator: BrandSelectionCoordinator,
    pub navigator: Arc<SessionNavigator>,
    events: EventReceiver,
}

impl AppState {
    /// Build the state for one invocation, starting at `current_path`.
    pub fn new(config: &DashboardConfig, current_path: &str) -> anyhow::Result<Self> {
        let brand_service = config.brand_service.as_ref().with_context(|| {
            format!(
                "{} is not set; cannot reach the brand service",
                culinary_core::config::ENV_BRAND_API_URL
            )
        })?;

        let db_path: PathBuf = database_path(&config.data_dir);
        info!("Opening settings database at {:?}", db_path);
        let db = Arc::new(Mutex::new(Database::open(&db_path)?));

        let bus = Arc::new(EventBus::new());
        let events = bus.subscribe();
        let navigator = Arc::new(SessionNavigator::new(current_path));

        let coordinator = BrandSelectionBuilder::new()
            .with_event_bus(bus)
            .with_brand_source(Arc::new(HttpBrandSource::new(brand_service)?))
            .with_settings_repo(Arc::new(SqliteAppSettingsRepository::new(db)))
            .with_navigator(navigator.clone())
            .with_notifier(Arc::new(TerminalNotifier))
            .build()?;

        Ok(Self {
            coordinator,
            navigator,
            events,
        })
    }

    /// Log events emitted during the command
    pub fn flush_events(&mut self) {
        for event in self.events.drain() {
            let event_type = event.type_name();
            let brand_id = event.brand_id().map(str::to_string);
            let envelope = DomainEventEnvelope::new(event);
            tracing::debug!(
                event_type,
                brand_id = ?brand_id,
                "[Events] {}",
                serde_json::to_string(&envelope).unwrap_or_default()
            );
        }
    }
}
