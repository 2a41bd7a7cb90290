//! Terminal implementations of the presentation ports.

use async_trait::async_trait;
use culinary_core::{Navigator, Notification, NotificationLevel, Notifier};
use tokio::sync::Mutex;
use tracing::info;

/// Prints notifications to the terminal
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => println!("✔ {}", notification.message),
            NotificationLevel::Error => eprintln!("✖ {}", notification.message),
        }
    }
}

/// Keeps the "current route" for a single CLI invocation.
pub struct SessionNavigator {
    path: Mutex<String>,
}

impl SessionNavigator {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Mutex::new(path.into()),
        }
    }
}

#[async_trait]
impl Navigator for SessionNavigator {
    async fn current_path(&self) -> String {
        self.path.lock().await.clone()
    }

    async fn navigate_to(&self, path: &str) -> anyhow::Result<()> {
        let mut current = self.path.lock().await;
        info!(from = %current, to = %path, "[Navigator] Navigating");
        *current = path.to_string();
        Ok(())
    }

    async fn refresh_current(&self) -> anyhow::Result<()> {
        let path = self.path.lock().await;
        info!(path = %path, "[Navigator] Re-rendering current route");
        Ok(())
    }
}
