//! Generic list/create/delete/modify over one species collection.
//!
//! One implementation serves every species: the record type supplies its
//! fields through [`Record::read`] and its collection through [`Herd`].

use std::io;
use std::marker::PhantomData;

use menagerie_core::Herd;
use menagerie_types::{Record, ScreenId, SpeciesKey};

use crate::{ConsoleFields, Flow, InputError, Screen, Session, prompt_required};

pub const INVALID_INPUT: &str = "Invalid input.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOutcome {
    Empty,
    Listed(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed(String),
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModifyOutcome {
    Modified(String),
    NotFound,
}

// ============================================================================
// Menu actions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrudAction {
    List,
    Create,
    Delete,
    Modify,
}

impl CrudAction {
    /// Menu order, numbered from 1.
    pub const ALL: [CrudAction; 4] = [
        CrudAction::List,
        CrudAction::Create,
        CrudAction::Delete,
        CrudAction::Modify,
    ];

    #[must_use]
    pub fn from_choice(choice: usize) -> Option<Self> {
        choice
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    #[must_use]
    pub fn label(self, species: SpeciesKey) -> String {
        match self {
            CrudAction::List => format!("List all {}", species.plural()),
            CrudAction::Create => format!("Create a new {}", species.singular()),
            CrudAction::Delete => format!("Delete existing {}", species.singular()),
            CrudAction::Modify => format!("Modify existing {}", species.singular()),
        }
    }
}

// ============================================================================
// Workflow
// ============================================================================

/// The four catalog operations for species `S`.
#[derive(Debug)]
pub struct CrudWorkflow<S> {
    species: PhantomData<fn() -> S>,
}

impl<S> Default for CrudWorkflow<S> {
    fn default() -> Self {
        Self {
            species: PhantomData,
        }
    }
}

impl<S: Herd> CrudWorkflow<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self, session: &mut Session<'_>) -> io::Result<ListOutcome> {
        let key = S::KEY;
        let records = session.catalog.list::<S>();
        session.console.write_line("")?;
        if records.is_empty() {
            session
                .console
                .write_line(&format!("The list of {} is empty.", key.plural()))?;
            return Ok(ListOutcome::Empty);
        }

        session
            .console
            .write_line(&format!("Here's a list of {}:", key.plural()))?;
        for (index, record) in records.iter().enumerate() {
            session.console.write_line(&format!(
                "{} number {}, {}",
                key.title(),
                index + 1,
                record.display()
            ))?;
        }
        Ok(ListOutcome::Listed(records.len()))
    }

    /// Read a full record and append it. Returns the new record's name.
    pub fn create(&self, session: &mut Session<'_>) -> Result<String, InputError> {
        let key = S::KEY;
        let record = S::read(&mut ConsoleFields::new(&mut *session.console))?;
        let name = record.name().to_string();
        session.catalog.add(record);
        session.console.write_line(&format!(
            "{} with name: {name} has been added to the list of {}",
            key.title(),
            key.plural()
        ))?;
        tracing::info!(species = %key, name = %name, "Record created");
        Ok(name)
    }

    pub fn delete(&self, session: &mut Session<'_>) -> Result<DeleteOutcome, InputError> {
        let key = S::KEY;
        let name = prompt_required(
            &mut *session.console,
            "name",
            &format!("What is the name of the {} you want to delete? ", key.singular()),
        )?;

        if !session.catalog.remove::<S>(&name) {
            tracing::info!(species = %key, name = %name, "Delete found no record");
            return Ok(DeleteOutcome::NotFound);
        }
        session.console.write_line(&format!(
            "{} with name: {name} has been removed from the list of {}",
            key.title(),
            key.plural()
        ))?;
        tracing::info!(species = %key, name = %name, "Record deleted");
        Ok(DeleteOutcome::Removed(name))
    }

    /// Overwrite the first record named by the operator with a freshly read
    /// one. A failed read leaves the record untouched.
    pub fn modify(&self, session: &mut Session<'_>) -> Result<ModifyOutcome, InputError> {
        let key = S::KEY;
        let name = prompt_required(
            &mut *session.console,
            "name",
            &format!("What is the name of the {} you want to edit? ", key.singular()),
        )?;

        let Some(record) = session.catalog.find_by_name_mut::<S>(&name) else {
            tracing::info!(species = %key, name = %name, "Modify found no record");
            return Ok(ModifyOutcome::NotFound);
        };
        let replacement = S::read(&mut ConsoleFields::new(&mut *session.console))?;
        record.copy_from(&replacement);

        let display = record.display();
        let renamed = record.name().to_string();
        session
            .console
            .write_line(&format!("{} after edit: {display}", key.title()))?;
        tracing::info!(species = %key, name = %name, renamed = %renamed, "Record modified");
        Ok(ModifyOutcome::Modified(renamed))
    }

    fn perform(&self, action: CrudAction, session: &mut Session<'_>) -> io::Result<()> {
        let key = S::KEY;
        let result = match action {
            CrudAction::List => return self.list(session).map(|_| ()),
            CrudAction::Create => self.create(session).map(|_| None),
            CrudAction::Delete => self.delete(session).map(|outcome| match outcome {
                DeleteOutcome::Removed(_) => None,
                DeleteOutcome::NotFound => Some(not_found(key)),
            }),
            CrudAction::Modify => self.modify(session).map(|outcome| match outcome {
                ModifyOutcome::Modified(_) => None,
                ModifyOutcome::NotFound => Some(not_found(key)),
            }),
        };

        let message = match result {
            Ok(message) => message,
            Err(InputError::Io(err)) => return Err(err),
            Err(err) => {
                tracing::info!(species = %key, ?action, "Rejected input: {err}");
                Some(INVALID_INPUT.to_string())
            }
        };
        if let Some(message) = message {
            session.console.write_line(&message)?;
        }
        Ok(())
    }
}

fn not_found(key: SpeciesKey) -> String {
    format!("{} not found.", key.title())
}

// ============================================================================
// Screen
// ============================================================================

/// Menu screen for one species collection.
#[derive(Debug)]
pub struct SpeciesScreen<S> {
    workflow: CrudWorkflow<S>,
}

impl<S: Herd> SpeciesScreen<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            workflow: CrudWorkflow::new(),
        }
    }
}

impl<S: Herd> Screen for SpeciesScreen<S> {
    fn id(&self) -> ScreenId {
        S::KEY.screen_id()
    }

    fn options(&self) -> Vec<String> {
        CrudAction::ALL
            .iter()
            .map(|action| action.label(S::KEY))
            .collect()
    }

    fn handle(&mut self, choice: usize, session: &mut Session<'_>) -> io::Result<Flow> {
        let Some(action) = CrudAction::from_choice(choice) else {
            unreachable!("{} screen dispatched unvalidated choice {choice}", S::KEY);
        };
        self.workflow.perform(action, session)?;
        Ok(Flow::Continue)
    }
}
