//! Presentation-side ports used by the brand selection coordinator
//!
//! The host (router, toast surface) implements these; tests substitute
//! recording fakes.

use async_trait::async_trait;

use crate::domain::Notification;

/// Navigation surface (the dashboard router)
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Path of the route currently displayed
    async fn current_path(&self) -> String;

    /// Navigate to another route
    async fn navigate_to(&self, path: &str) -> anyhow::Result<()>;

    /// Re-render the current route without changing the path
    async fn refresh_current(&self) -> anyhow::Result<()>;
}

/// Notification surface (toasts)
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
