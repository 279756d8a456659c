// Menu actions and the main loop
use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use crate::error::AppResult;
use crate::menu::{choose_option, Console, MenuOption};
use crate::state::{self, SettingsDb, StoreOutcome};

const NOT_FOUND: &str = "Setting not found. Please check again.\n";

type Flow = ControlFlow<()>;

/// Run the menu loop until the user exits, then commit and close the database
pub fn run_session<R: BufRead, W: Write>(
    db: SettingsDb,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    db.initialize()?;

    loop {
        let option = choose_option(console)?;
        console.say("")?;
        log::debug!("Dispatching {:?}", option);

        match dispatch(&db, console, option)? {
            ControlFlow::Continue(()) => db.commit()?,
            ControlFlow::Break(()) => break,
        }
    }

    db.close()?;
    console.say("Good bye!")?;
    Ok(())
}

pub fn dispatch<R: BufRead, W: Write>(
    db: &SettingsDb,
    console: &mut Console<R, W>,
    option: MenuOption,
) -> AppResult<Flow> {
    match option {
        MenuOption::Store => store_setting(db, console)?,
        MenuOption::ViewAll => view_all_settings(db, console)?,
        MenuOption::View => view_setting(db, console)?,
        MenuOption::Change => change_setting(db, console)?,
        MenuOption::Delete => delete_setting(db, console)?,
        MenuOption::Exit => return Ok(ControlFlow::Break(())),
    }
    Ok(ControlFlow::Continue(()))
}

fn store_setting<R: BufRead, W: Write>(
    db: &SettingsDb,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let name = console.prompt("What is the name of the setting?\n")?;

    if let Some(current) = state::get_setting(db, &name)? {
        return offer_change(db, console, &name, &current);
    }

    let value = console.prompt("What is the value of this setting?\n")?;
    match state::store_setting(db, &name, &value)? {
        StoreOutcome::Inserted => console.say(&format!("{} set to: {}", name, value))?,
        StoreOutcome::AlreadyExists { current } => {
            offer_change(db, console, &name, &current)?
        }
    }
    Ok(())
}

/// Show the stored value of `name` and change it if the user answers "y"
fn offer_change<R: BufRead, W: Write>(
    db: &SettingsDb,
    console: &mut Console<R, W>,
    name: &str,
    current: &str,
) -> AppResult<()> {
    console.say(&format!("Setting for {} already found.\n", name))?;
    console.say(&format!("{}: {}", name, current))?;
    let answer = console.prompt("Would you like to change the setting? (y/n): \n")?;
    if answer == "y" {
        set_new_value(db, console, name)?;
    }
    Ok(())
}

fn view_all_settings<R: BufRead, W: Write>(
    db: &SettingsDb,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let settings = state::list_all(db)?;
    if settings.is_empty() {
        console.say("No settings stored yet.\n")?;
        return Ok(());
    }

    for (name, value) in &settings {
        console.say(&format!("{}: {}", name, value))?;
    }
    console.say("")?;
    Ok(())
}

fn view_setting<R: BufRead, W: Write>(
    db: &SettingsDb,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let name = console.prompt("Select item to view: ")?;
    match state::get_setting(db, &name)? {
        Some(value) => console.say(&format!("{}: {}\n", name, value))?,
        None => console.say(NOT_FOUND)?,
    }
    Ok(())
}

fn change_setting<R: BufRead, W: Write>(
    db: &SettingsDb,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let name = console.prompt("What setting would you like to change? ")?;
    if state::get_setting(db, &name)?.is_none() {
        console.say(&format!("\n{}", NOT_FOUND))?;
        return Ok(());
    }
    set_new_value(db, console, &name)
}

/// Ask for a new value and write it to an existing setting
fn set_new_value<R: BufRead, W: Write>(
    db: &SettingsDb,
    console: &mut Console<R, W>,
    name: &str,
) -> AppResult<()> {
    let value = console.prompt("What would you like to set the setting to?\n")?;
    if state::update_setting(db, name, &value)? {
        console.say(&format!("{} changed to {}\n", name, value))?;
    } else {
        console.say(NOT_FOUND)?;
    }
    Ok(())
}

fn delete_setting<R: BufRead, W: Write>(
    db: &SettingsDb,
    console: &mut Console<R, W>,
) -> AppResult<()> {
    let name = console.prompt("Select item to delete:\n")?;
    if state::delete_setting(db, &name)? {
        console.say(&format!("{} removed from settings.\n", name))?;
    } else {
        console.say(NOT_FOUND)?;
    }
    Ok(())
}
