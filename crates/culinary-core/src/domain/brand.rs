//! Brand entity - a tenant-scoped restaurant concept owned by the brand service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Brand as returned by the external brand data service.
///
/// The dashboard only ever holds read-only copies; creation, mutation and
/// deletion happen upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    /// Opaque unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Whether the brand is currently active upstream
    #[serde(default = "default_is_active")]
    pub is_active: bool,

    /// Free-form metadata attached by the brand service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_is_active() -> bool {
    true
}

impl Brand {
    /// Create an active brand with the given id and name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            is_active: true,
            metadata: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Mark the brand as deactivated upstream
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}
