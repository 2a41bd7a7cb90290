//! # CulinarySeoul Core Library
//!
//! Brand directory and brand selection for the CulinarySeoul dashboard.
//!
//! ## Modules
//!
//! - `domain` - Core entities and value objects (Brand, NavigationContext, events)
//! - `repository` - Data access traits (brand source, settings storage)
//! - `service` - Domain services (brand directory, settings, HTTP brand source)
//! - `application` - Brand selection coordinator with event emission
//! - `event_bus` - Event distribution to brand-scoped views
//! - `config` - Environment-driven configuration

pub mod application;
pub mod config;
pub mod domain;
pub mod event_bus;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use domain::*;
pub use repository::*;
pub use service::*;

pub use application::{
    BrandSelectionBuilder, BrandSelectionCoordinator, BrandSwitch, NavigationAction, Navigator,
    Notifier, SelectionError,
};
pub use config::{BrandServiceConfig, ConfigError, DashboardConfig};
pub use event_bus::{EventBus, EventReceiver, EventSender, SharedEventBus};
