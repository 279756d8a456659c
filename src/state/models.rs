// Data models for settings state
use std::collections::BTreeMap;

/// One row of the settings table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub id: i64,
    pub name: String,
    pub value: String,
}

/// Setting name to value. Ordering carries no meaning.
pub type SettingsMap = BTreeMap<String, String>;

/// Result of trying to store a setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOutcome {
    Inserted,
    /// The name is taken; nothing was written
    AlreadyExists { current: String },
}
