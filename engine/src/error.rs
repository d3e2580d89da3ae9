use std::io;

use thiserror::Error;

use menagerie_types::RecordError;

/// Operator input that cannot complete the current operation.
///
/// Everything except [`InputError::Io`] is recovered by the workflow that
/// raised it; a failing console propagates and ends the session.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input ended before {field} was entered")]
    EndOfInput { field: &'static str },
    #[error("{field} must not be empty")]
    Blank { field: &'static str },
    #[error("could not parse {field} from {input:?}")]
    Unparsable { field: &'static str, input: String },
    #[error(transparent)]
    InvalidField(#[from] RecordError),
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl InputError {
    /// Name of the field that was being read, when there is one.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::EndOfInput { field } | Self::Blank { field } | Self::Unparsable { field, .. } => {
                Some(*field)
            }
            Self::InvalidField(err) => Some(err.field()),
            Self::Io(_) => None,
        }
    }
}
