//! Interactive engine for Menagerie: menu screens, record workflows and the
//! screen color editor.
//!
//! The engine has no process-level dependencies. Everything it touches is
//! handed in through a [`Session`]: a [`Console`] for line I/O, the
//! [`Catalog`](menagerie_core::Catalog) being edited, and a
//! [`SettingsStore`](menagerie_config::SettingsStore) for screen colors.

mod console;
mod crud;
mod error;
mod navigation;
mod prompt;
mod screen;
mod settings_editor;

pub use console::{Console, MemoryConsole, StdConsole, terminal_color};
pub use crud::{
    CrudAction, CrudWorkflow, DeleteOutcome, INVALID_INPUT, ListOutcome, ModifyOutcome,
    SpeciesScreen,
};
pub use error::InputError;
pub use navigation::{MainScreen, MenuScreen, build_navigation};
pub use prompt::{ConsoleFields, prompt_line, prompt_required};
pub use screen::{
    BACK_TO_PARENT, CHOICE_PROMPT, Exit, Flow, INVALID_CHOICE, SETTINGS_UNREADABLE, Screen,
    Session, parse_choice, render_menu, run_loop,
};
pub use settings_editor::{EditorOutcome, SettingsEditor};
