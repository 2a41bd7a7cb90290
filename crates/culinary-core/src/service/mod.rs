//! Domain services
//!
//! Business logic that operates on domain entities via repositories.

pub mod app_settings_service;
mod brand_api_client;
mod brand_directory;

pub use app_settings_service::{keys, AppSettingsService};
pub use brand_api_client::{HttpBrandSource, BRANDS_ENDPOINT};
pub use brand_directory::{BrandDirectory, DirectoryLoadError, DirectoryState};
