//! Record workflows driven from the root menu

use menagerie_config::MemorySettingsStore;
use menagerie_core::Catalog;
use menagerie_engine::Exit;
use menagerie_types::{Beaver, Dog, Orangutan, Record};

use crate::common::{BACK_TO_ROOT_AND_EXIT, into_species, run_session, run_session_with};

const BEAVERS: &str = "4";
const DOGS: &str = "1";
const ORANGUTANS: &str = "3";

fn script<'a>(species: &'a str, steps: &[&'a str]) -> Vec<&'a str> {
    let mut input = into_species(species);
    input.extend_from_slice(steps);
    input.extend_from_slice(&BACK_TO_ROOT_AND_EXIT);
    input
}

#[test]
fn bucky_create_list_delete_round() {
    let input = script(
        BEAVERS,
        &[
            "2", "Bucky", "4", "brown", "bark", "30", "y", // create
            "1", // list
            "3", "Bucky", // delete
            "3", "Bucky", // delete again
            "1", // list
        ],
    );
    let run = run_session(&MemorySettingsStore::new(), &input);

    assert_eq!(run.exit, Exit::Chosen);
    assert!(run.catalog.list::<Beaver>().is_empty());

    let transcript = run.transcript();
    let expected = [
        "Beaver with name: Bucky has been added to the list of beavers",
        "Here's a list of beavers:",
        "Beaver number 1, Name: Bucky, Age: 4, Color: brown, Favorite food: bark, Tail length: 30, Builds dams: true",
        "Beaver with name: Bucky has been removed from the list of beavers",
        "Beaver not found.",
        "The list of beavers is empty.",
        "Goodbye.",
    ];
    let mut rest = transcript;
    for line in expected {
        let at = rest
            .find(line)
            .unwrap_or_else(|| panic!("missing {line:?} in order"));
        rest = &rest[at + line.len()..];
    }
}

#[test]
fn created_records_list_in_insertion_order() {
    let input = script(
        DOGS,
        &[
            "2", "Rex", "3", "Beagle", //
            "2", "Ace", "5", "Boxer", //
            "2", "Max", "1", "Pug", //
            "1",
        ],
    );
    let run = run_session(&MemorySettingsStore::new(), &input);

    let names: Vec<_> = run.catalog.list::<Dog>().iter().map(Record::name).collect();
    assert_eq!(names, ["Rex", "Ace", "Max"]);
    let transcript = run.transcript();
    assert!(transcript.contains("Dog number 1, Name: Rex, Age: 3, Breed: Beagle\n"));
    assert!(transcript.contains("Dog number 3, Name: Max, Age: 1, Breed: Pug\n"));
}

#[test]
fn unparsable_number_aborts_create_and_returns_to_menu() {
    let input = script(
        ORANGUTANS,
        &["2", "Ken", "twenty", "1"],
    );
    let run = run_session(&MemorySettingsStore::new(), &input);

    assert_eq!(run.exit, Exit::Chosen);
    assert!(run.catalog.list::<Orangutan>().is_empty());
    let transcript = run.transcript();
    assert!(transcript.contains("What is the orangutan's age? twenty\nInvalid input.\n"));
    assert!(!transcript.contains("climb trees"));
    assert!(transcript.contains("The list of orangutans is empty."));
}

#[test]
fn modify_keeps_position_among_duplicates() {
    let mut catalog = Catalog::new();
    for (name, age) in [("Bucky", 1), ("Bucky", 2), ("Cleo", 3)] {
        catalog.add(Beaver::new(name, age, "brown", "bark", 30, true).unwrap());
    }
    let input = script(
        BEAVERS,
        &["4", "Bucky", "Bucky", "9", "grey", "willow", "28", "no"],
    );
    let run = run_session_with(catalog, &MemorySettingsStore::new(), &input);

    let beavers = run.catalog.list::<Beaver>();
    assert_eq!(beavers.len(), 3);
    assert_eq!(beavers[0].age(), 9);
    assert_eq!(beavers[0].color(), "grey");
    assert!(!beavers[0].builds_dams());
    assert_eq!(beavers[1].age(), 2);
    assert!(run.transcript().contains(
        "Beaver after edit: Name: Bucky, Age: 9, Color: grey, Favorite food: willow, Tail length: 28, Builds dams: false\n"
    ));
}

#[test]
fn modify_of_unknown_name_reports_not_found() {
    let input = script(DOGS, &["4", "Ghost"]);
    let run = run_session(&MemorySettingsStore::new(), &input);
    assert!(run.transcript().contains(
        "What is the name of the dog you want to edit? Ghost\nDog not found.\n"
    ));
}

#[test]
fn blank_delete_name_is_invalid_input() {
    let input = script(BEAVERS, &["3", ""]);
    let run = run_session(&MemorySettingsStore::new(), &input);
    assert!(run.transcript().contains(
        "What is the name of the beaver you want to delete? \nInvalid input.\n"
    ));
}
