// Fixed application settings

/// Database file, relative to the working directory
pub const DB_FILE_NAME: &str = "settings_app.db";

/// Log filter used when RUST_LOG is unset
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "info"
    } else {
        "warn"
    }
}
