//! The record capability shared by every species.

use thiserror::Error;

use crate::{FieldSource, NonEmptyString, SpeciesKey};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl RecordError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidField { field, .. } => field,
        }
    }
}

/// A single catalog entry of one concrete species.
///
/// Identity is the `name`. Names are not unique within a collection; lookups
/// elsewhere resolve to the first match.
pub trait Record: Clone + std::fmt::Debug {
    const KEY: SpeciesKey;

    fn name(&self) -> &str;

    /// Field labels and rendered values in the species' fixed order.
    fn summary(&self) -> Vec<(&'static str, String)>;

    /// Prompt for every field in order and construct the record.
    ///
    /// Stops at the first field the source cannot supply.
    fn read<F: FieldSource>(fields: &mut F) -> Result<Self, F::Error>;

    /// One-line `Label: value, ...` rendering of [`Record::summary`].
    fn display(&self) -> String {
        self.summary()
            .into_iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Overwrite every field (name included) with those of `source`.
    ///
    /// The record keeps its place in whatever collection owns it.
    fn copy_from(&mut self, source: &Self) {
        self.clone_from(source);
    }
}

pub(crate) fn required_name(raw: String) -> Result<NonEmptyString, RecordError> {
    NonEmptyString::new(raw).map_err(|_| RecordError::invalid("name", "must not be empty"))
}

/// Counts such as ages, lifespans and lengths in whole units.
pub(crate) fn non_negative_count(field: &'static str, value: i64) -> Result<u32, RecordError> {
    if value < 0 {
        return Err(RecordError::invalid(
            field,
            format!("must not be negative (got {value})"),
        ));
    }
    u32::try_from(value).map_err(|_| RecordError::invalid(field, format!("{value} is too large")))
}

/// Physical measurements such as heights and weights.
pub(crate) fn non_negative_measure(field: &'static str, value: f64) -> Result<f64, RecordError> {
    if !value.is_finite() {
        return Err(RecordError::invalid(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(RecordError::invalid(
            field,
            format!("must not be negative (got {value})"),
        ));
    }
    Ok(value)
}
