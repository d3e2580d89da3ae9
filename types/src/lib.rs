//! Core domain types for Menagerie.
//!
//! This crate contains pure domain types with no IO and minimal dependencies:
//! the fixed taxonomy, the record model for every species, field parsing rules,
//! and the presentation vocabulary (screen identifiers and console colors).
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod fields;
mod presentation;
mod record;
mod species;
mod taxonomy;

pub use fields::{Field, FieldSource, parse_decimal, parse_flag, parse_integer};
pub use presentation::{ConsoleColor, ScreenId};
pub use record::{Record, RecordError};
pub use species::{AfricanElephant, Beaver, Dog, Orangutan, OrangutanTraits};
pub use taxonomy::{Category, SpeciesKey};

use thiserror::Error;

// ============================================================================
// NonEmpty String Types
// ============================================================================

/// A string guaranteed to be non-empty (after trimming).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

#[derive(Debug, Error)]
#[error("value must not be empty")]
pub struct EmptyStringError;

impl NonEmptyString {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyStringError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(EmptyStringError)
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for NonEmptyString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl std::fmt::Display for NonEmptyString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
