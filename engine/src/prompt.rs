//! Prompting the operator for typed values.

use std::io;

use menagerie_types::{Field, FieldSource, parse_decimal, parse_flag, parse_integer};

use crate::{Console, InputError};

/// Write `prompt` and read the answer. `None` on end of input.
pub fn prompt_line(console: &mut dyn Console, prompt: &str) -> io::Result<Option<String>> {
    console.write(prompt)?;
    console.read_line()
}

/// Prompt for a value that must be present and non-blank.
pub fn prompt_required(
    console: &mut dyn Console,
    field: &'static str,
    prompt: &str,
) -> Result<String, InputError> {
    let Some(answer) = prompt_line(console, prompt)? else {
        return Err(InputError::EndOfInput { field });
    };
    if answer.trim().is_empty() {
        return Err(InputError::Blank { field });
    }
    Ok(answer)
}

/// [`FieldSource`] backed by the console: one prompt per field, no retries.
pub struct ConsoleFields<'a> {
    console: &'a mut dyn Console,
}

impl<'a> ConsoleFields<'a> {
    pub fn new(console: &'a mut dyn Console) -> Self {
        Self { console }
    }

    fn answer(&mut self, field: Field) -> Result<String, InputError> {
        prompt_line(self.console, field.prompt)?
            .ok_or(InputError::EndOfInput { field: field.key })
    }

    fn parsed<T>(
        &mut self,
        field: Field,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<T, InputError> {
        let raw = self.answer(field)?;
        parse(&raw).ok_or(InputError::Unparsable {
            field: field.key,
            input: raw,
        })
    }
}

impl FieldSource for ConsoleFields<'_> {
    type Error = InputError;

    fn text(&mut self, field: Field) -> Result<String, InputError> {
        self.answer(field)
    }

    fn integer(&mut self, field: Field) -> Result<i64, InputError> {
        self.parsed(field, parse_integer)
    }

    fn decimal(&mut self, field: Field) -> Result<f64, InputError> {
        self.parsed(field, parse_decimal)
    }

    fn flag(&mut self, field: Field) -> Result<bool, InputError> {
        self.answer(field).map(|raw| parse_flag(&raw))
    }
}
