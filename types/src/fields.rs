//! Field prompting contract and the parse rules for each field kind.
//!
//! Records describe *which* fields they need and in what order; a
//! [`FieldSource`] decides *where* the raw text comes from (the console in
//! production, a script in tests).

use crate::RecordError;

/// One named input of a record, with the question shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub key: &'static str,
    pub prompt: &'static str,
}

impl Field {
    #[must_use]
    pub const fn new(key: &'static str, prompt: &'static str) -> Self {
        Self { key, prompt }
    }
}

/// Supplies typed field values, one prompt at a time.
///
/// Text, integer and decimal fields are required: an implementation must
/// fail when input is exhausted or unparsable. Flag fields never fail to
/// parse (see [`parse_flag`]), but still fail on exhausted input.
pub trait FieldSource {
    type Error: From<RecordError>;

    fn text(&mut self, field: Field) -> Result<String, Self::Error>;
    fn integer(&mut self, field: Field) -> Result<i64, Self::Error>;
    fn decimal(&mut self, field: Field) -> Result<f64, Self::Error>;
    fn flag(&mut self, field: Field) -> Result<bool, Self::Error>;
}

/// Permissive yes/no parse: `"yes"` or `"y"` in any case is true, everything
/// else (including empty input) is false.
#[must_use]
pub fn parse_flag(raw: &str) -> bool {
    let raw = raw.trim();
    raw.eq_ignore_ascii_case("yes") || raw.eq_ignore_ascii_case("y")
}

#[must_use]
pub fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

#[must_use]
pub fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}
