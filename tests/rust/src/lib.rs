//! Shared test utilities and fixtures for CulinarySeoul integration tests.

pub use culinary_core::{Brand, DomainEvent, Notification, NotificationLevel};

/// Mock port implementations
pub mod mocks;
pub use mocks::{MockBrandSource, MockSettingsRepository, RecordingNavigator, RecordingNotifier};

/// Service test helpers
pub mod harness {
    use std::sync::Arc;

    use culinary_core::service::keys;
    use culinary_core::{BrandSelectionBuilder, BrandSelectionCoordinator, EventBus, EventReceiver};

    use crate::mocks::*;

    /// Coordinator wired to recording fakes
    pub struct CoordinatorHarness {
        pub coordinator: BrandSelectionCoordinator,
        pub source: Arc<MockBrandSource>,
        pub settings: Arc<MockSettingsRepository>,
        pub navigator: Arc<RecordingNavigator>,
        pub notifier: Arc<RecordingNotifier>,
        pub events: EventReceiver,
    }

    impl CoordinatorHarness {
        pub fn new(source: MockBrandSource, settings: MockSettingsRepository) -> Self {
            Self::at_path(source, settings, "/")
        }

        pub fn at_path(source: MockBrandSource, settings: MockSettingsRepository, path: &str) -> Self {
            crate::init_test_tracing();

            let bus = Arc::new(EventBus::new());
            let events = bus.subscribe();
            let source = Arc::new(source);
            let settings = Arc::new(settings);
            let navigator = Arc::new(RecordingNavigator::at(path));
            let notifier = Arc::new(RecordingNotifier::new());

            let coordinator = BrandSelectionBuilder::new()
                .with_event_bus(bus)
                .with_brand_source(source.clone())
                .with_settings_repo(settings.clone())
                .with_navigator(navigator.clone())
                .with_notifier(notifier.clone())
                .build()
                .expect("Failed to build coordinator");

            Self {
                coordinator,
                source,
                settings,
                navigator,
                notifier,
                events,
            }
        }

        /// Persisted brand selection
        pub fn persisted(&self) -> Option<String> {
            self.settings.value(keys::brand::SELECTED_BRAND_ID)
        }

        /// Number of writes to the selection key
        pub fn selection_writes(&self) -> usize {
            self.settings
                .writes()
                .iter()
                .filter(|(k, _)| k == keys::brand::SELECTED_BRAND_ID)
                .count()
        }

        pub async fn active_id(&self) -> Option<String> {
            self.coordinator.active_brand().await.map(|b| b.id)
        }
    }
}

/// Test fixture utilities
pub mod fixtures {
    use super::*;
    use culinary_core::service::keys;

    /// `[b1 "Cafe A", b2 "Cafe B"]`
    pub fn two_cafes() -> Vec<Brand> {
        vec![Brand::new("b1", "Cafe A"), Brand::new("b2", "Cafe B")]
    }

    pub fn test_brand(id: &str) -> Brand {
        Brand::new(id, format!("Brand {}", id)).with_description(format!("Test brand: {}", id))
    }

    /// Settings with the selection key pre-populated
    pub fn settings_with_selection(brand_id: &str) -> MockSettingsRepository {
        MockSettingsRepository::new().with_value(keys::brand::SELECTED_BRAND_ID, brand_id)
    }

    /// Brand service row as JSON
    pub fn brand_row(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": name,
            "description": null,
            "is_active": true,
            "created_at": "2024-03-01T09:00:00Z",
        })
    }
}

/// Database test helpers
pub mod db {
    use culinary_storage::Database;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Temporary on-disk database
    pub struct TestDatabase {
        pub db: Database,
        temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestDatabase {
        pub fn new() -> Self {
            let temp_dir = TempDir::new().expect("Failed to create temp dir");
            let db_path = culinary_storage::database_path(temp_dir.path());
            let db = Database::open(&db_path).expect("Failed to open test database");
            Self {
                db,
                temp_dir,
                db_path,
            }
        }

        pub fn dir(&self) -> &Path {
            self.temp_dir.path()
        }

        pub fn db_path(&self) -> &Path {
            &self.db_path
        }
    }

    impl Default for TestDatabase {
        fn default() -> Self {
            Self::new()
        }
    }
}

/// Install a test subscriber once (respects RUST_LOG)
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
