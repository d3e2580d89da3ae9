//! Interactive editor for the per-screen color settings.
//!
//! Reached from the root menu. Creates the store when it is missing,
//! otherwise shows the current mapping and changes one screen's color.
//! Every change is written back as a whole map before returning.

use std::io;

use menagerie_config::{ScreenSettings, SettingsError};
use menagerie_types::{ConsoleColor, ScreenId, parse_flag, parse_integer};

use crate::{INVALID_CHOICE, SETTINGS_UNREADABLE, Session, prompt_line};

const SCREEN_PROMPT: &str = "Please enter screen number: ";
const COLOR_PROMPT: &str = "Please enter color code: ";
const UNKNOWN_COLOR: &str = "Unknown color. Try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOutcome {
    Changed { screen: ScreenId, color: ConsoleColor },
    Created,
    Declined,
    /// Input ended mid-edit; nothing was written.
    Aborted,
    /// The store could not be read or written; the operator was told why.
    Failed,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SettingsEditor;

impl SettingsEditor {
    pub fn run(&self, session: &mut Session<'_>) -> io::Result<EditorOutcome> {
        match session.settings.load() {
            Ok(None) => self.offer_bootstrap(session),
            Ok(Some(settings)) => {
                self.view(session, &settings)?;
                self.edit_one(session, settings)
            }
            Err(err) => {
                tracing::warn!("Settings editor could not load store: {err}");
                session
                    .console
                    .write_line(&format!("{SETTINGS_UNREADABLE} {err}"))?;
                Ok(EditorOutcome::Failed)
            }
        }
    }

    /// Print every stored `key: color` pair.
    pub fn view(&self, session: &mut Session<'_>, settings: &ScreenSettings) -> io::Result<()> {
        session.console.write_line("")?;
        session.console.write_line("Current screen colors:")?;
        for (key, color) in settings.iter() {
            session.console.write_line(&format!("{key}: {color}"))?;
        }
        Ok(())
    }

    /// Change the color of one screen chosen by number.
    pub fn edit_one(
        &self,
        session: &mut Session<'_>,
        mut settings: ScreenSettings,
    ) -> io::Result<EditorOutcome> {
        session
            .console
            .write_line("Here is the list of available screens")?;
        for (index, screen) in ScreenId::ALL.iter().enumerate() {
            session
                .console
                .write_line(&format!("{}. {screen}", index + 1))?;
        }
        let Some(screen) = read_screen(session)? else {
            return Ok(EditorOutcome::Aborted);
        };

        let current = settings.color_for(screen).map_or("not set", ConsoleColor::name);
        session
            .console
            .write_line(&format!("Current {screen} color is {current}. Write new color"))?;
        session.console.write_line("Available colors:")?;
        for color in ConsoleColor::ALL {
            session
                .console
                .write_line(&format!("{}. {}", color.code(), color.name()))?;
        }
        let Some(color) = read_color_code(session)? else {
            return Ok(EditorOutcome::Aborted);
        };

        settings.set(screen.key(), color.name());
        if !persist(session, &settings)? {
            return Ok(EditorOutcome::Failed);
        }
        session.console.write_line(&format!(
            "Color of {screen} has successfully changed to {}",
            color.name()
        ))?;
        tracing::info!(screen = %screen, color = color.name(), "Screen color changed");
        Ok(EditorOutcome::Changed { screen, color })
    }

    /// Ask before creating a missing store.
    pub fn offer_bootstrap(&self, session: &mut Session<'_>) -> io::Result<EditorOutcome> {
        let Some(answer) =
            prompt_line(session.console, "File does not exist, do you want to create? y/n ")?
        else {
            return Ok(EditorOutcome::Aborted);
        };
        if !parse_flag(&answer) {
            tracing::info!("Settings bootstrap declined");
            return Ok(EditorOutcome::Declined);
        }
        self.bootstrap(session)
    }

    /// Prompt for a color for every known screen in order, then persist.
    pub fn bootstrap(&self, session: &mut Session<'_>) -> io::Result<EditorOutcome> {
        session
            .console
            .write_line("Write color for every screen from list")?;
        let mut settings = ScreenSettings::new();
        for screen in ScreenId::ALL {
            let Some(color) = read_color_for(session, screen)? else {
                return Ok(EditorOutcome::Aborted);
            };
            settings.set(screen.key(), color.name());
        }

        if !persist(session, &settings)? {
            return Ok(EditorOutcome::Failed);
        }
        tracing::info!(entries = settings.len(), "Settings store created");
        Ok(EditorOutcome::Created)
    }
}

// ============================================================================
// Prompts
// ============================================================================

fn read_screen(session: &mut Session<'_>) -> io::Result<Option<ScreenId>> {
    loop {
        let Some(raw) = prompt_line(session.console, SCREEN_PROMPT)? else {
            return Ok(None);
        };
        let screen = raw
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(ScreenId::from_number);
        match screen {
            Some(screen) => return Ok(Some(screen)),
            None => session.console.write_line(INVALID_CHOICE)?,
        }
    }
}

fn read_color_code(session: &mut Session<'_>) -> io::Result<Option<ConsoleColor>> {
    loop {
        let Some(raw) = prompt_line(session.console, COLOR_PROMPT)? else {
            return Ok(None);
        };
        match parse_integer(&raw).and_then(ConsoleColor::from_code) {
            Some(color) => return Ok(Some(color)),
            None => session.console.write_line(INVALID_CHOICE)?,
        }
    }
}

/// Accepts a palette name or code.
fn read_color_for(session: &mut Session<'_>, screen: ScreenId) -> io::Result<Option<ConsoleColor>> {
    let prompt = format!("{screen}: ");
    loop {
        let Some(raw) = prompt_line(session.console, &prompt)? else {
            return Ok(None);
        };
        let color = ConsoleColor::parse(&raw)
            .or_else(|| parse_integer(&raw).and_then(ConsoleColor::from_code));
        match color {
            Some(color) => return Ok(Some(color)),
            None => session.console.write_line(UNKNOWN_COLOR)?,
        }
    }
}

/// Save the map, reporting a failure to the operator. Returns whether the
/// write succeeded.
fn persist(session: &mut Session<'_>, settings: &ScreenSettings) -> io::Result<bool> {
    match session.settings.save(settings) {
        Ok(()) => Ok(true),
        Err(err) => {
            report_save_failure(session, &err)?;
            Ok(false)
        }
    }
}

fn report_save_failure(session: &mut Session<'_>, err: &SettingsError) -> io::Result<()> {
    tracing::warn!("Could not save settings: {err}");
    session
        .console
        .write_line(&format!("Could not save settings: {err}"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{EditorOutcome, SettingsEditor};
    use crate::{MemoryConsole, Session};
    use menagerie_config::{
        JsonSettingsStore, MemorySettingsStore, ScreenSettings, SettingsStore,
    };
    use menagerie_core::Catalog;
    use menagerie_types::{ConsoleColor, ScreenId};

    fn run_editor(store: &dyn SettingsStore, input: &[&str]) -> (EditorOutcome, MemoryConsole) {
        let mut console = MemoryConsole::new(input.iter().copied());
        let mut catalog = Catalog::new();
        let outcome = SettingsEditor
            .run(&mut Session::new(&mut console, &mut catalog, store))
            .unwrap();
        (outcome, console)
    }

    #[test]
    fn edit_replaces_one_key_and_keeps_the_rest() {
        let settings: ScreenSettings = [("MainScreen", "Red"), ("BeaverScreen", "Green")]
            .into_iter()
            .collect();
        let store = MemorySettingsStore::with_settings(settings);

        let (outcome, console) = run_editor(&store, &["1", "9"]);

        assert_eq!(
            outcome,
            EditorOutcome::Changed {
                screen: ScreenId::Main,
                color: ConsoleColor::Blue,
            }
        );
        let saved = store.snapshot().unwrap();
        assert_eq!(saved.get("MainScreen"), Some("Blue"));
        assert_eq!(saved.get("BeaverScreen"), Some("Green"));
        assert_eq!(saved.len(), 2);
        let transcript = console.transcript();
        assert!(transcript.contains("MainScreen: Red\n"));
        assert!(transcript.contains("Current MainScreen color is Red. Write new color\n"));
        assert!(transcript.contains("9. Blue\n"));
        assert!(transcript.ends_with("Color of MainScreen has successfully changed to Blue\n"));
    }

    #[test]
    fn edit_writes_the_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ColorSettings.json");
        fs::write(&path, r#"{"MainScreen":"Red"}"#).unwrap();
        let store = JsonSettingsStore::new(&path);

        run_editor(&store, &["1", "9"]);

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, serde_json::json!({ "MainScreen": "Blue" }));
    }

    #[test]
    fn out_of_range_entries_are_asked_again() {
        let store = MemorySettingsStore::with_settings(ScreenSettings::new());
        let (outcome, console) = run_editor(&store, &["0", "8", "x", "7", "16", "-1", "Red", "14"]);
        assert_eq!(
            outcome,
            EditorOutcome::Changed {
                screen: ScreenId::Beavers,
                color: ConsoleColor::Yellow,
            }
        );
        assert_eq!(
            console.transcript().matches("Invalid choice. Try again.").count(),
            6
        );
        assert!(console
            .transcript()
            .contains("Current BeaverScreen color is not set. Write new color\n"));
    }

    #[test]
    fn end_of_input_aborts_without_writing() {
        let settings: ScreenSettings = [("MainScreen", "Red")].into_iter().collect();
        let store = MemorySettingsStore::with_settings(settings.clone());
        let (outcome, _) = run_editor(&store, &["1"]);
        assert_eq!(outcome, EditorOutcome::Aborted);
        assert_eq!(store.snapshot(), Some(settings));
    }

    #[test]
    fn bootstrap_prompts_every_screen_in_order() {
        let store = MemorySettingsStore::new();
        let (outcome, console) = run_editor(
            &store,
            &["y", "Red", "blue", "purple", "2", "Cyan", "15", "Gray", "dark_red", "DarkRed"],
        );
        assert_eq!(outcome, EditorOutcome::Created);

        let saved = store.snapshot().unwrap();
        let colors: Vec<_> = ScreenId::ALL
            .iter()
            .map(|screen| saved.get(screen.key()).unwrap())
            .collect();
        assert_eq!(
            colors,
            ["Red", "Blue", "DarkGreen", "Cyan", "White", "Gray", "DarkRed"]
        );
        let transcript = console.transcript();
        assert_eq!(transcript.matches("Unknown color. Try again.").count(), 2);
        assert!(transcript.contains("African_Elephant: 15\n"));
    }

    #[test]
    fn declined_bootstrap_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ColorSettings.json");
        let store = JsonSettingsStore::new(&path);
        let (outcome, console) = run_editor(&store, &["n"]);
        assert_eq!(outcome, EditorOutcome::Declined);
        assert!(!path.exists());
        assert!(console
            .transcript()
            .starts_with("File does not exist, do you want to create? y/n n\n"));
    }

    #[test]
    fn malformed_store_is_reported_in_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ColorSettings.json");
        fs::write(&path, "{ not json").unwrap();
        let store = JsonSettingsStore::new(&path);

        let (outcome, console) = run_editor(&store, &["1", "9"]);

        assert_eq!(outcome, EditorOutcome::Failed);
        assert_eq!(console.transcript().lines().count(), 1);
        assert!(console.transcript().starts_with("Could not read settings:"));
        assert_eq!(console.remaining_input(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }
}
