//! Menu loop behavior across the whole tree

use menagerie_config::MemorySettingsStore;
use menagerie_engine::{Exit, SETTINGS_UNREADABLE};
use menagerie_types::ConsoleColor;

use crate::common::{TempSettings, run_session};

#[test]
fn root_menu_lists_animals_and_settings() {
    let run = run_session(&MemorySettingsStore::new(), &["0"]);
    insta::assert_snapshot!(run.transcript().trim(), @r"
    Your available choices are:
    0. Exit
    1. Animals
    2. Create a new settings
    Please enter your choice: 0
    Goodbye.
    ");
    assert_eq!(run.exit, Exit::Chosen);
}

#[test]
fn invalid_choices_are_retried() {
    let run = run_session(&MemorySettingsStore::new(), &["3", "abc", "-1", "", "0"]);
    assert_eq!(
        run.transcript().matches("Invalid choice. Try again.").count(),
        4
    );
    assert_eq!(run.exit, Exit::Chosen);
}

#[test]
fn closed_input_ends_the_session_from_any_depth() {
    let run = run_session(&MemorySettingsStore::new(), &["1", "1", "2"]);
    assert_eq!(run.exit, Exit::EndOfInput);
    assert_eq!(run.console.remaining_input(), 0);
    assert!(!run.transcript().contains("Goodbye."));
}

#[test]
fn empty_input_exits_immediately() {
    let run = run_session(&MemorySettingsStore::new(), &[]);
    assert_eq!(run.exit, Exit::EndOfInput);
}

#[test]
fn back_out_prints_parent_message_at_each_level() {
    let run = run_session(&MemorySettingsStore::new(), &["1", "1", "0", "0", "0"]);
    assert_eq!(
        run.transcript().matches("Going back to parent menu.").count(),
        2
    );
}

#[test]
fn screen_colors_come_from_the_settings_file() {
    let settings = TempSettings::with_contents(
        r#"{"MainScreen":"Red","AnimalsScreen":"Green","MammalsScreen":"Purple"}"#,
    );
    let run = run_session(&settings.store, &["1", "1", "0", "0", "0"]);
    assert_eq!(
        run.console.colors(),
        [
            Some(ConsoleColor::Red),
            Some(ConsoleColor::Green),
            Some(ConsoleColor::White),
            Some(ConsoleColor::Green),
            Some(ConsoleColor::Red),
        ]
    );
}

#[test]
fn malformed_settings_file_does_not_stop_navigation() {
    let settings = TempSettings::with_contents("not json");
    let run = run_session(&settings.store, &["1", "0", "0"]);
    assert_eq!(run.exit, Exit::Chosen);
    assert!(run.console.colors().iter().all(Option::is_none));
    // Once for the root visit and once for the Animals visit.
    assert_eq!(run.transcript().matches(SETTINGS_UNREADABLE).count(), 2);
    assert!(run.transcript().ends_with("Goodbye.\n"));
}
