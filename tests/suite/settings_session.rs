//! The color settings editor reached from the root menu

use menagerie_types::{ConsoleColor, ScreenId};

use crate::common::{TempSettings, run_session};

#[test]
fn editing_main_screen_rewrites_only_that_key() {
    let settings = TempSettings::with_contents(r#"{"MainScreen":"Red","BeaverScreen":"Cyan"}"#);

    let run = run_session(&settings.store, &["2", "1", "9", "0"]);

    assert_eq!(
        settings.read_json(),
        serde_json::json!({ "MainScreen": "Blue", "BeaverScreen": "Cyan" })
    );
    assert!(
        run.transcript()
            .contains("Color of MainScreen has successfully changed to Blue\n")
    );
    assert_eq!(
        run.console.colors(),
        [Some(ConsoleColor::Red), Some(ConsoleColor::Blue)]
    );
}

#[test]
fn single_key_store_becomes_blue() {
    let settings = TempSettings::with_contents(r#"{"MainScreen":"Red"}"#);
    run_session(&settings.store, &["2", "1", "9", "0"]);
    assert_eq!(settings.read_json(), serde_json::json!({ "MainScreen": "Blue" }));
}

#[test]
fn missing_store_is_bootstrapped_for_every_screen() {
    let settings = TempSettings::new();
    let mut input = vec!["2", "y"];
    input.extend(["Red", "Blue", "Green", "Yellow", "Cyan", "Magenta", "Gray"]);
    input.push("0");

    let run = run_session(&settings.store, &input);

    let json = settings.read_json();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), ScreenId::ALL.len());
    assert_eq!(json["African_Elephant"], "Cyan");
    assert_eq!(json["BeaverScreen"], "Gray");
    assert!(run.transcript().contains("Write color for every screen from list\n"));
    assert_eq!(run.console.colors().last(), Some(&Some(ConsoleColor::Red)));
}

#[test]
fn declining_bootstrap_leaves_no_file() {
    let settings = TempSettings::new();
    run_session(&settings.store, &["2", "n", "0"]);
    assert!(!settings.path().exists());
}

#[test]
fn malformed_store_is_reported_and_menu_continues() {
    let settings = TempSettings::with_contents("{\"MainScreen\": ");
    let run = run_session(&settings.store, &["2", "0"]);
    assert!(run.transcript().contains("Could not read settings:"));
    assert!(run.transcript().ends_with("Goodbye.\n"));
}
