//! The static navigation tree.
//!
//! ```text
//! MainScreen
//! ├── Animals ── Mammals ── Dogs | Elephants | Orangutans | Beavers
//! └── Create a new settings
//! ```
//!
//! Parents own their children; a child never sees its parent.

use std::io;

use menagerie_types::{AfricanElephant, Beaver, Category, Dog, Orangutan, ScreenId, SpeciesKey};

use crate::{EditorOutcome, Flow, Screen, Session, SettingsEditor, SpeciesScreen};

/// A screen whose options each open a child screen.
pub struct MenuScreen {
    id: ScreenId,
    children: Vec<(String, Box<dyn Screen>)>,
}

impl MenuScreen {
    #[must_use]
    pub fn new(id: ScreenId) -> Self {
        Self {
            id,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_child(mut self, label: impl Into<String>, child: Box<dyn Screen>) -> Self {
        self.children.push((label.into(), child));
        self
    }
}

impl Screen for MenuScreen {
    fn id(&self) -> ScreenId {
        self.id
    }

    fn options(&self) -> Vec<String> {
        self.children.iter().map(|(label, _)| label.clone()).collect()
    }

    fn handle(&mut self, choice: usize, session: &mut Session<'_>) -> io::Result<Flow> {
        let Some((_, child)) = choice
            .checked_sub(1)
            .and_then(|index| self.children.get_mut(index))
        else {
            unreachable!("{} dispatched unvalidated choice {choice}", self.id);
        };
        child.run(session).map(Flow::from)
    }
}

/// The root menu: the animal tree plus the settings editor.
pub struct MainScreen {
    animals: MenuScreen,
    editor: SettingsEditor,
}

impl MainScreen {
    #[must_use]
    pub fn new(animals: MenuScreen) -> Self {
        Self {
            animals,
            editor: SettingsEditor,
        }
    }
}

impl Screen for MainScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Main
    }

    fn options(&self) -> Vec<String> {
        vec!["Animals".to_string(), "Create a new settings".to_string()]
    }

    fn exit_message(&self) -> &'static str {
        "Goodbye."
    }

    fn handle(&mut self, choice: usize, session: &mut Session<'_>) -> io::Result<Flow> {
        match choice {
            1 => self.animals.run(session).map(Flow::from),
            2 => match self.editor.run(session)? {
                EditorOutcome::Aborted => Ok(Flow::EndOfInput),
                _ => Ok(Flow::Continue),
            },
            _ => unreachable!("main screen dispatched unvalidated choice {choice}"),
        }
    }
}

fn species_screen(key: SpeciesKey) -> Box<dyn Screen> {
    match key {
        SpeciesKey::Dog => Box::new(SpeciesScreen::<Dog>::new()),
        SpeciesKey::AfricanElephant => Box::new(SpeciesScreen::<AfricanElephant>::new()),
        SpeciesKey::Orangutan => Box::new(SpeciesScreen::<Orangutan>::new()),
        SpeciesKey::Beaver => Box::new(SpeciesScreen::<Beaver>::new()),
    }
}

fn category_screen(category: Category) -> MenuScreen {
    category
        .species()
        .iter()
        .fold(MenuScreen::new(category.screen_id()), |menu, key| {
            menu.with_child(key.menu_label(), species_screen(*key))
        })
}

/// Build the whole tree, rooted at [`MainScreen`].
#[must_use]
pub fn build_navigation() -> MainScreen {
    let animals = Category::ALL
        .into_iter()
        .fold(MenuScreen::new(ScreenId::Animals), |menu, category| {
            menu.with_child(category.label(), Box::new(category_screen(category)))
        });
    MainScreen::new(animals)
}
