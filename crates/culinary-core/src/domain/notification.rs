//! User-visible notifications (toasts)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient message for the notification surface.
///
/// Presentation is up to the notifier; this only carries level and text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn brand_switched(brand_name: &str) -> Self {
        Self::success(format!("Switched to {}", brand_name))
    }

    pub fn brand_not_found(brand_id: &str) -> Self {
        Self::error(format!("Brand not found: {}", brand_id))
    }

    pub fn directory_load_failed(reason: &str) -> Self {
        Self::error(format!("Failed to load brands: {}", reason))
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}
