// State management module
// Handles SQLite persistence of settings

pub mod db;
pub mod models;
pub mod repository;

pub use db::{DbError, DbResult, SettingsDb};
pub use models::{Setting, SettingsMap, StoreOutcome};
pub use repository::{delete_setting, get_setting, list_all, store_setting, update_setting};
