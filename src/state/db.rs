// SQLite connection and schema setup for the settings table
use rusqlite::{Connection, Params};
use std::path::Path;
use thiserror::Error;

use super::models::Setting;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type DbResult<T> = Result<T, DbError>;

/// The single connection to the settings database.
///
/// Mutations run inside a deferred transaction that is only made durable by
/// [`SettingsDb::commit`]. Dropping the handle with work still pending rolls it back.
pub struct SettingsDb {
    conn: Connection,
}

impl SettingsDb {
    /// Open (or create) the database file at `path`
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let path = path.as_ref();
        log::info!("Opening settings database at {}", path.display());
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Create the settings table if it doesn't exist. Safe to call repeatedly.
    pub fn initialize(&self) -> DbResult<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                settingId INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
                setting TEXT NOT NULL,
                value TEXT NOT NULL
            )",
            [],
        )?;
        log::debug!("Settings table ready");
        Ok(())
    }

    /// Run an INSERT/UPDATE/DELETE and return the number of affected rows.
    ///
    /// Opens a transaction first if none is pending, so nothing reaches the file
    /// until the next [`commit`](Self::commit).
    pub fn execute_mutation<P: Params>(&self, sql: &str, params: P) -> DbResult<usize> {
        if self.conn.is_autocommit() {
            self.conn.execute_batch("BEGIN DEFERRED")?;
        }
        let affected = self.conn.execute(sql, params)?;
        log::debug!("Mutation affected {} row(s)", affected);
        Ok(affected)
    }

    /// Read every stored setting in row order
    pub fn select_all(&self) -> DbResult<Vec<Setting>> {
        let mut stmt = self
            .conn
            .prepare("SELECT settingId, setting, value FROM settings ORDER BY settingId")?;

        let settings = stmt
            .query_map([], |row| {
                Ok(Setting {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    value: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(settings)
    }

    /// Make pending mutations durable. No-op when nothing is pending.
    pub fn commit(&self) -> DbResult<()> {
        if !self.conn.is_autocommit() {
            self.conn.execute_batch("COMMIT")?;
            log::debug!("Committed pending changes");
        }
        Ok(())
    }

    /// Commit outstanding work and release the connection
    pub fn close(self) -> DbResult<()> {
        self.commit()?;
        self.conn.close().map_err(|(_, e)| DbError::Sqlite(e))?;
        log::info!("Settings database closed");
        Ok(())
    }
}
