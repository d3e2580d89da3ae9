//! The screen abstraction and its render/read/dispatch loop.
//!
//! Every menu in the application, from the root to a species CRUD screen,
//! runs the same state machine:
//!
//! ```text
//! Running: apply color -> render menu -> read choice
//!            |  "0"            -> Done (Exit::Chosen)
//!            |  end of input   -> Done (Exit::EndOfInput)
//!            |  1..=n          -> handle(choice) -> Running
//!            |  anything else  -> "Invalid choice" -> Running
//! ```

use std::io;

use menagerie_config::SettingsStore;
use menagerie_core::Catalog;
use menagerie_types::ScreenId;

use crate::Console;

pub const CHOICE_PROMPT: &str = "Please enter your choice: ";
pub const INVALID_CHOICE: &str = "Invalid choice. Try again.";
pub const BACK_TO_PARENT: &str = "Going back to parent menu.";
pub const SETTINGS_UNREADABLE: &str = "Could not read settings:";

/// Borrowed collaborators threaded through the screen tree.
pub struct Session<'a> {
    pub console: &'a mut dyn Console,
    pub catalog: &'a mut Catalog,
    pub settings: &'a dyn SettingsStore,
}

impl<'a> Session<'a> {
    pub fn new(
        console: &'a mut dyn Console,
        catalog: &'a mut Catalog,
        settings: &'a dyn SettingsStore,
    ) -> Self {
        Self {
            console,
            catalog,
            settings,
        }
    }
}

/// How a screen's loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The operator picked "0. Exit".
    Chosen,
    /// Input ran out; every enclosing screen should stop as well.
    EndOfInput,
}

/// What the loop does after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    EndOfInput,
}

impl From<Exit> for Flow {
    fn from(exit: Exit) -> Self {
        match exit {
            Exit::Chosen => Flow::Continue,
            Exit::EndOfInput => Flow::EndOfInput,
        }
    }
}

pub trait Screen {
    fn id(&self) -> ScreenId;

    /// Menu entries numbered from 1; "0. Exit" is implied.
    fn options(&self) -> Vec<String>;

    fn exit_message(&self) -> &'static str {
        BACK_TO_PARENT
    }

    /// Handle a validated choice in `1..=options().len()`.
    fn handle(&mut self, choice: usize, session: &mut Session<'_>) -> io::Result<Flow>;

    fn run(&mut self, session: &mut Session<'_>) -> io::Result<Exit> {
        run_loop(self, session)
    }
}

pub fn run_loop<S: Screen + ?Sized>(screen: &mut S, session: &mut Session<'_>) -> io::Result<Exit> {
    let id = screen.id();
    tracing::debug!(screen = %id, "Entering screen");
    let mut settings_reported = false;

    loop {
        apply_screen_color(id, session, &mut settings_reported)?;

        let options = screen.options();
        session.console.write_line("")?;
        for line in render_menu(&options) {
            session.console.write_line(&line)?;
        }
        session.console.write(CHOICE_PROMPT)?;

        let Some(raw) = session.console.read_line()? else {
            tracing::info!(screen = %id, "Input ended; leaving screen");
            return Ok(Exit::EndOfInput);
        };

        match parse_choice(&raw, options.len()) {
            Some(0) => {
                session.console.write_line(screen.exit_message())?;
                tracing::debug!(screen = %id, "Leaving screen");
                return Ok(Exit::Chosen);
            }
            Some(choice) => {
                if screen.handle(choice, session)? == Flow::EndOfInput {
                    return Ok(Exit::EndOfInput);
                }
            }
            None => session.console.write_line(INVALID_CHOICE)?,
        }
    }
}

/// Re-read the settings store and apply this screen's color.
///
/// Runs on every pass through the loop so edits take effect on the next
/// render. Store failures fall back to the default color and are reported
/// on the console once per visit.
fn apply_screen_color(
    id: ScreenId,
    session: &mut Session<'_>,
    reported: &mut bool,
) -> io::Result<()> {
    let color = match session.settings.load() {
        Ok(Some(settings)) => settings.color_for(id),
        Ok(None) => None,
        Err(err) => {
            tracing::warn!(screen = %id, "Could not load screen settings: {err}");
            if !*reported {
                session
                    .console
                    .write_line(&format!("{SETTINGS_UNREADABLE} {err}"))?;
                *reported = true;
            }
            None
        }
    };
    session.console.set_color(color)
}

#[must_use]
pub fn render_menu(options: &[String]) -> Vec<String> {
    let mut lines = Vec::with_capacity(options.len() + 2);
    lines.push("Your available choices are:".to_string());
    lines.push("0. Exit".to_string());
    lines.extend(
        options
            .iter()
            .enumerate()
            .map(|(index, option)| format!("{}. {option}", index + 1)),
    );
    lines
}

/// Parse a menu choice in `0..=option_count`.
#[must_use]
pub fn parse_choice(raw: &str, option_count: usize) -> Option<usize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|choice| *choice <= option_count)
}
