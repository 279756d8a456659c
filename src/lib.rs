// Settings App - store and manage settings in a local SQLite file
// Module declarations

pub mod commands;
pub mod config;
pub mod error;
pub mod menu;
pub mod state;

use std::io;

pub use error::{AppError, AppResult};

fn init_logging() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config::default_log_filter()),
    )
    .try_init();
}

/// Open the settings database and run the interactive menu on stdin/stdout
pub fn run() -> AppResult<()> {
    init_logging();

    let db = state::SettingsDb::open(config::DB_FILE_NAME)?;

    let stdin = io::stdin();
    let mut console = menu::Console::new(stdin.lock(), io::stdout());

    log::info!("Settings app initialized successfully");
    commands::run_session(db, &mut console)
}
