// Settings CRUD operations
use rusqlite::params;

use super::db::{DbResult, SettingsDb};
use super::models::{SettingsMap, StoreOutcome};

/// All stored settings keyed by name. A later row wins if a name was stored twice.
pub fn list_all(db: &SettingsDb) -> DbResult<SettingsMap> {
    let settings = db
        .select_all()?
        .into_iter()
        .map(|setting| (setting.name, setting.value))
        .collect();

    Ok(settings)
}

/// Get the value stored under `name`, if any
pub fn get_setting(db: &SettingsDb, name: &str) -> DbResult<Option<String>> {
    let mut settings = list_all(db)?;
    Ok(settings.remove(name))
}

/// Insert a new setting unless the name is already taken.
///
/// An existing value is never overwritten here; callers confirm with the user and
/// go through [`update_setting`].
pub fn store_setting(db: &SettingsDb, name: &str, value: &str) -> DbResult<StoreOutcome> {
    if let Some(current) = get_setting(db, name)? {
        return Ok(StoreOutcome::AlreadyExists { current });
    }

    db.execute_mutation(
        "INSERT INTO settings (setting, value) VALUES (?1, ?2)",
        params![name, value],
    )?;
    log::info!("Stored setting {}", name);

    Ok(StoreOutcome::Inserted)
}

/// Overwrite the value of `name`. Returns false when no such setting exists.
pub fn update_setting(db: &SettingsDb, name: &str, value: &str) -> DbResult<bool> {
    let affected = db.execute_mutation(
        "UPDATE settings SET value = ?1 WHERE setting = ?2",
        params![value, name],
    )?;

    if affected == 0 {
        log::debug!("Update matched no setting named {}", name);
    } else {
        log::info!("Updated setting {}", name);
    }

    Ok(affected > 0)
}

/// Remove `name`. Returns false when there was nothing to remove.
pub fn delete_setting(db: &SettingsDb, name: &str) -> DbResult<bool> {
    if get_setting(db, name)?.is_none() {
        return Ok(false);
    }

    db.execute_mutation("DELETE FROM settings WHERE setting = ?1", params![name])?;
    log::info!("Deleted setting {}", name);

    Ok(true)
}
