//! Core domain state for Menagerie.
//!
//! Holds the session catalog: every record the operator creates lives here
//! until the process exits.

mod catalog;

pub use catalog::{Animals, Catalog, Herd, Mammals};
