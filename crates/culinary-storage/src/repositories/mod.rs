//! Repository implementations using SQLite.

mod app_settings_repository;

pub use app_settings_repository::SqliteAppSettingsRepository;
