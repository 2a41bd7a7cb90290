//! Mock port implementations for testing
//!
//! In-memory implementations of every port the coordinator depends on, with
//! call recording for assertions.

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};

use culinary_core::{
    AppSettingsRepository, Brand, BrandSource, Navigator, Notification, Notifier, RepoResult,
};

// ============================================================================
// MockBrandSource
// ============================================================================

/// Brand source returning a fixed directory, or queued one-shot responses.
#[derive(Default)]
pub struct MockBrandSource {
    brands: RwLock<Vec<Brand>>,
    queued: Mutex<VecDeque<Result<Vec<Brand>, String>>>,
    calls: AtomicUsize,
}

impl MockBrandSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_brands(brands: Vec<Brand>) -> Self {
        let source = Self::default();
        source.set_brands(brands);
        source
    }

    /// Replace the directory returned by subsequent calls
    pub fn set_brands(&self, brands: Vec<Brand>) {
        *self.brands.write() = brands;
    }

    /// Make the next call fail with `message`
    pub fn fail_next(&self, message: &str) {
        self.queued.lock().push_back(Err(message.to_string()));
    }

    /// Make the next call return `brands` once
    pub fn respond_next(&self, brands: Vec<Brand>) {
        self.queued.lock().push_back(Ok(brands));
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BrandSource for MockBrandSource {
    async fn list_brands(&self) -> RepoResult<Vec<Brand>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.queued.lock().pop_front() {
            Some(Ok(brands)) => Ok(brands),
            Some(Err(message)) => Err(anyhow::anyhow!(message)),
            None => Ok(self.brands.read().clone()),
        }
    }
}

// ============================================================================
// MockSettingsRepository
// ============================================================================

/// In-memory key-value storage that records every write
#[derive(Default)]
pub struct MockSettingsRepository {
    data: RwLock<HashMap<String, String>>,
    writes: Mutex<Vec<(String, String)>>,
    fail_writes: RwLock<bool>,
}

impl MockSettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value without recording it as a write
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.data.write().insert(key.to_string(), value.to_string());
        self
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.data.read().get(key).cloned()
    }

    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().clone()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.write() = fail;
    }
}

#[async_trait]
impl AppSettingsRepository for MockSettingsRepository {
    async fn get(&self, key: &str) -> RepoResult<Option<String>> {
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        if *self.fail_writes.read() {
            anyhow::bail!("disk full");
        }
        self.data.write().insert(key.to_string(), value.to_string());
        self.writes.lock().push((key.to_string(), value.to_string()));
        Ok(())
    }

    async fn delete(&self, key: &str) -> RepoResult<bool> {
        if *self.fail_writes.read() {
            anyhow::bail!("disk full");
        }
        Ok(self.data.write().remove(key).is_some())
    }

    async fn list_by_prefix(&self, prefix: &str) -> RepoResult<Vec<(String, String)>> {
        let mut items: Vec<_> = self
            .data
            .read()
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        items.sort();
        Ok(items)
    }
}

// ============================================================================
// RecordingNavigator
// ============================================================================

/// Navigator that records navigation requests and refreshes
pub struct RecordingNavigator {
    path: RwLock<String>,
    navigations: Mutex<Vec<String>>,
    refreshes: AtomicUsize,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self {
            path: RwLock::new(path.to_string()),
            navigations: Mutex::new(Vec::new()),
            refreshes: AtomicUsize::new(0),
        }
    }

    pub fn path(&self) -> String {
        self.path.read().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().clone()
    }

    pub fn refresh_count(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }
}

impl Default for RecordingNavigator {
    fn default() -> Self {
        Self::at("/")
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn current_path(&self) -> String {
        self.path()
    }

    async fn navigate_to(&self, path: &str) -> anyhow::Result<()> {
        *self.path.write() = path.to_string();
        self.navigations.lock().push(path.to_string());
        Ok(())
    }

    async fn refresh_current(&self) -> anyhow::Result<()> {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// RecordingNotifier
// ============================================================================

#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().clone()
    }

    pub fn errors(&self) -> Vec<Notification> {
        self.notifications()
            .into_iter()
            .filter(|n| n.is_error())
            .collect()
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications.lock().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().push(notification);
    }
}
