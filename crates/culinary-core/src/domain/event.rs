//! Domain Events - brand directory and selection changes
//!
//! Events are emitted by the brand selection coordinator after state changes
//! and consumed by anything that needs to react (views refetching
//! brand-scoped data, audit logging).
//!
//! Events serialize with a `type` field containing the snake_case variant name:
//! ```json
//! { "type": "brand_activated", "to_brand_id": "b2", "to_brand_name": "Cafe B" }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ReconcileOutcome;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    // ════════════════════════════════════════════════════════════════════════
    // BRAND DIRECTORY
    // ════════════════════════════════════════════════════════════════════════
    /// The brand directory was (re)loaded
    BrandDirectoryLoaded { count: usize },

    /// Loading the brand directory failed
    BrandDirectoryLoadFailed { error: String },

    // ════════════════════════════════════════════════════════════════════════
    // BRAND SELECTION
    // ════════════════════════════════════════════════════════════════════════
    /// Reconciliation resolved the active brand after a load
    BrandSelectionReconciled {
        #[serde(skip_serializing_if = "Option::is_none")]
        brand_id: Option<String>,
        outcome: ReconcileOutcome,
    },

    /// The user switched the active brand
    BrandActivated {
        #[serde(skip_serializing_if = "Option::is_none")]
        from_brand_id: Option<String>,
        to_brand_id: String,
        to_brand_name: String,
    },
}

impl DomainEvent {
    /// Get the event type name (for logging and filtering)
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::BrandDirectoryLoaded { .. } => "brand_directory_loaded",
            Self::BrandDirectoryLoadFailed { .. } => "brand_directory_load_failed",
            Self::BrandSelectionReconciled { .. } => "brand_selection_reconciled",
            Self::BrandActivated { .. } => "brand_activated",
        }
    }

    /// Brand the event resolves to, if any
    pub fn brand_id(&self) -> Option<&str> {
        match self {
            Self::BrandSelectionReconciled { brand_id, .. } => brand_id.as_deref(),
            Self::BrandActivated { to_brand_id, .. } => Some(to_brand_id),
            Self::BrandDirectoryLoaded { .. } | Self::BrandDirectoryLoadFailed { .. } => None,
        }
    }

    /// Whether views showing brand-scoped data should refetch
    pub fn changes_active_brand(&self) -> bool {
        matches!(
            self,
            Self::BrandActivated { .. } | Self::BrandSelectionReconciled { .. }
        )
    }
}

/// Event with metadata for transport or audit logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEventEnvelope {
    pub timestamp: DateTime<Utc>,
    pub event: DomainEvent,
}

impl DomainEventEnvelope {
    pub fn new(event: DomainEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
        }
    }
}
