//! Brand selection reconciliation
//!
//! Resolves the active brand from the persisted selection and a freshly
//! loaded directory. Precedence is: persisted match, then first available,
//! then absent.

use serde::{Deserialize, Serialize};

use super::Brand;

/// How the active brand was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileOutcome {
    /// Persisted id matched a brand in the directory
    Restored,
    /// Persisted id was stale; fell back to the first brand
    FellBack,
    /// Nothing was persisted; seeded from the first brand
    Seeded,
    /// Directory was empty; no active brand
    Empty,
}

impl ReconcileOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Restored => "restored",
            Self::FellBack => "fell_back",
            Self::Seeded => "seeded",
            Self::Empty => "empty",
        }
    }
}

/// Result of running reconciliation
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    /// Brand that becomes active, if any
    pub active: Option<Brand>,
    /// Identifier to write to persisted storage, if it must change
    pub persist: Option<String>,
    pub outcome: ReconcileOutcome,
}

/// Resolve the active brand.
///
/// Never asks for a write when the directory is empty: a stale persisted id is
/// retained for when brands reappear.
pub fn reconcile(directory: &[Brand], persisted: Option<&str>) -> Reconciliation {
    if let Some(id) = persisted {
        if let Some(brand) = directory.iter().find(|b| b.id == id) {
            return Reconciliation {
                active: Some(brand.clone()),
                persist: None,
                outcome: ReconcileOutcome::Restored,
            };
        }
    }

    match directory.first() {
        Some(first) => Reconciliation {
            active: Some(first.clone()),
            persist: Some(first.id.clone()),
            outcome: if persisted.is_some() {
                ReconcileOutcome::FellBack
            } else {
                ReconcileOutcome::Seeded
            },
        },
        None => Reconciliation {
            active: None,
            persist: None,
            outcome: ReconcileOutcome::Empty,
        },
    }
}
