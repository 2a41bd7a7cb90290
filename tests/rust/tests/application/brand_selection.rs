//! Tests for BrandSelectionCoordinator::initialize
//!
//! Reconciliation of the persisted selection against the loaded directory.

use culinary_core::{DomainEvent, ReconcileOutcome, SelectionError};
use pretty_assertions::assert_eq;
use tests::fixtures::{self, settings_with_selection, two_cafes};
use tests::harness::CoordinatorHarness;
use tests::{MockBrandSource, MockSettingsRepository};

#[tokio::test]
async fn initialize_restores_persisted_brand() {
    let h = CoordinatorHarness::new(
        MockBrandSource::with_brands(two_cafes()),
        settings_with_selection("b2"),
    );

    let active = h.coordinator.initialize().await.unwrap();

    assert_eq!(active.map(|b| b.name), Some("Cafe B".to_string()));
    assert_eq!(h.persisted(), Some("b2".to_string()));
    assert_eq!(h.selection_writes(), 0, "Matching selection must not be rewritten");
}

#[tokio::test]
async fn initialize_falls_back_from_stale_selection() {
    let h = CoordinatorHarness::new(
        MockBrandSource::with_brands(two_cafes()),
        settings_with_selection("b9"),
    );

    h.coordinator.initialize().await.unwrap();

    assert_eq!(h.active_id().await, Some("b1".to_string()));
    assert_eq!(h.persisted(), Some("b1".to_string()));
    assert_eq!(h.selection_writes(), 1);
}

#[tokio::test]
async fn initialize_with_empty_directory_keeps_storage() {
    let h = CoordinatorHarness::new(MockBrandSource::new(), settings_with_selection("b1"));

    let active = h.coordinator.initialize().await.unwrap();

    assert!(active.is_none());
    assert_eq!(h.persisted(), Some("b1".to_string()));
    assert_eq!(h.selection_writes(), 0);
}

#[tokio::test]
async fn initialize_seeds_first_brand_when_nothing_persisted() {
    let h = CoordinatorHarness::new(
        MockBrandSource::with_brands(two_cafes()),
        MockSettingsRepository::new(),
    );

    h.coordinator.initialize().await.unwrap();

    assert_eq!(h.active_id().await, Some("b1".to_string()));
    assert_eq!(h.persisted(), Some("b1".to_string()));
    assert_eq!(h.selection_writes(), 1);
}

#[tokio::test]
async fn initialize_empty_without_selection_writes_nothing() {
    let h = CoordinatorHarness::new(MockBrandSource::new(), MockSettingsRepository::new());

    assert!(h.coordinator.initialize().await.unwrap().is_none());
    assert_eq!(h.persisted(), None);
}

#[tokio::test]
async fn reconciliation_is_idempotent() {
    let h = CoordinatorHarness::new(
        MockBrandSource::with_brands(two_cafes()),
        settings_with_selection("b2"),
    );

    let first = h.coordinator.initialize().await.unwrap();
    let second = h.coordinator.initialize().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(h.persisted(), Some("b2".to_string()));
    assert_eq!(h.selection_writes(), 0);
}

#[tokio::test]
async fn fallback_is_written_only_once() {
    let h = CoordinatorHarness::new(
        MockBrandSource::with_brands(two_cafes()),
        settings_with_selection("b9"),
    );

    h.coordinator.initialize().await.unwrap();
    h.coordinator.initialize().await.unwrap();

    assert_eq!(h.selection_writes(), 1);
    assert_eq!(h.persisted(), Some("b1".to_string()));
}

#[tokio::test]
async fn initialize_respects_service_order() {
    let brands = vec![fixtures::test_brand("z9"), fixtures::test_brand("a1")];
    let h = CoordinatorHarness::new(
        MockBrandSource::with_brands(brands),
        MockSettingsRepository::new(),
    );

    h.coordinator.initialize().await.unwrap();

    assert_eq!(h.active_id().await, Some("z9".to_string()));
}

#[tokio::test]
async fn initialize_failure_surfaces_error() {
    let source = MockBrandSource::with_brands(two_cafes());
    source.fail_next("connection reset");
    let h = CoordinatorHarness::new(source, settings_with_selection("b2"));

    let err = h.coordinator.initialize().await.unwrap_err();

    assert!(matches!(err, SelectionError::DirectoryLoad(_)));
    assert!(h.coordinator.active_brand().await.is_none());
    assert_eq!(h.persisted(), Some("b2".to_string()));
    assert_eq!(h.source.call_count(), 1, "No retry on failure");

    let errors = h.notifier.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("connection reset"));

    let state = h.coordinator.directory_state().await;
    assert!(!state.loading);
    assert!(state.brands.is_empty());
    assert!(state.error.unwrap().contains("connection reset"));
}

#[tokio::test]
async fn initialize_storage_failure_is_reported() {
    let settings = MockSettingsRepository::new();
    settings.set_fail_writes(true);
    let h = CoordinatorHarness::new(MockBrandSource::with_brands(two_cafes()), settings);

    let err = h.coordinator.initialize().await.unwrap_err();

    assert!(matches!(err, SelectionError::Storage(_)));
    assert!(h.coordinator.active_brand().await.is_none());
    assert_eq!(h.notifier.errors().len(), 1);
}

#[tokio::test]
async fn initialize_emits_events() {
    let mut h = CoordinatorHarness::new(
        MockBrandSource::with_brands(two_cafes()),
        settings_with_selection("b9"),
    );

    h.coordinator.initialize().await.unwrap();

    let events = h.events.drain();
    assert_eq!(events.len(), 2);
    assert!(matches!(
        events[0],
        DomainEvent::BrandDirectoryLoaded { count: 2 }
    ));
    match &events[1] {
        DomainEvent::BrandSelectionReconciled { brand_id, outcome } => {
            assert_eq!(brand_id.as_deref(), Some("b1"));
            assert_eq!(*outcome, ReconcileOutcome::FellBack);
        }
        other => panic!("Expected BrandSelectionReconciled, got {:?}", other),
    }
}

#[tokio::test]
async fn failed_load_emits_failure_event() {
    let source = MockBrandSource::new();
    source.fail_next("503");
    let mut h = CoordinatorHarness::new(source, MockSettingsRepository::new());

    let _ = h.coordinator.initialize().await;

    let events = h.events.drain();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].type_name(), "brand_directory_load_failed");
}

#[tokio::test]
async fn forget_selection_clears_storage_and_active_brand() {
    let h = CoordinatorHarness::new(
        MockBrandSource::with_brands(two_cafes()),
        settings_with_selection("b2"),
    );
    h.coordinator.initialize().await.unwrap();

    assert!(h.coordinator.forget_selection().await.unwrap());

    assert!(h.coordinator.active_brand().await.is_none());
    assert_eq!(h.persisted(), None);

    // Next session seeds the first brand again
    h.coordinator.initialize().await.unwrap();
    assert_eq!(h.active_id().await, Some("b1".to_string()));
    assert_eq!(h.persisted(), Some("b1".to_string()));
}

#[tokio::test]
async fn forget_selection_storage_failure_keeps_active_brand() {
    let h = CoordinatorHarness::new(
        MockBrandSource::with_brands(two_cafes()),
        settings_with_selection("b2"),
    );
    h.coordinator.initialize().await.unwrap();
    h.settings.set_fail_writes(true);

    let err = h.coordinator.forget_selection().await.unwrap_err();

    assert!(matches!(err, SelectionError::Storage(_)));
    assert_eq!(h.active_id().await, Some("b2".to_string()));
    assert_eq!(h.notifier.errors().len(), 1);
}
