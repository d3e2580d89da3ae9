//! Line-oriented console collaborator.
//!
//! The engine only ever writes text, reads whole lines and switches the
//! foreground color. [`StdConsole`] does that against the process terminal;
//! [`MemoryConsole`] replays scripted input and records everything written.

use std::collections::VecDeque;
use std::io::{self, BufRead, Stdout, Write};

use crossterm::{
    execute,
    style::{Color, ResetColor, SetForegroundColor},
};

use menagerie_types::ConsoleColor;

pub trait Console {
    /// Write without a trailing newline (used for prompts).
    fn write(&mut self, text: &str) -> io::Result<()>;

    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Next line without its terminator; `None` once input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Switch the foreground color. `None` restores the terminal default.
    fn set_color(&mut self, color: Option<ConsoleColor>) -> io::Result<()>;
}

#[must_use]
pub fn terminal_color(color: ConsoleColor) -> Color {
    match color {
        ConsoleColor::Black => Color::Black,
        ConsoleColor::DarkBlue => Color::DarkBlue,
        ConsoleColor::DarkGreen => Color::DarkGreen,
        ConsoleColor::DarkCyan => Color::DarkCyan,
        ConsoleColor::DarkRed => Color::DarkRed,
        ConsoleColor::DarkMagenta => Color::DarkMagenta,
        ConsoleColor::DarkYellow => Color::DarkYellow,
        ConsoleColor::Gray => Color::Grey,
        ConsoleColor::DarkGray => Color::DarkGrey,
        ConsoleColor::Blue => Color::Blue,
        ConsoleColor::Green => Color::Green,
        ConsoleColor::Cyan => Color::Cyan,
        ConsoleColor::Red => Color::Red,
        ConsoleColor::Magenta => Color::Magenta,
        ConsoleColor::Yellow => Color::Yellow,
        ConsoleColor::White => Color::White,
    }
}

fn trim_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

/// The process stdin/stdout.
///
/// Restores the default foreground color on drop.
pub struct StdConsole {
    input: io::StdinLock<'static>,
    output: Stdout,
    colors_enabled: bool,
    color_applied: bool,
}

impl StdConsole {
    #[must_use]
    pub fn new(colors_enabled: bool) -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
            colors_enabled,
            color_applied: false,
        }
    }
}

impl Console for StdConsole {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        trim_line_ending(&mut line);
        Ok(Some(line))
    }

    fn set_color(&mut self, color: Option<ConsoleColor>) -> io::Result<()> {
        if !self.colors_enabled {
            return Ok(());
        }
        match color {
            Some(color) => {
                execute!(self.output, SetForegroundColor(terminal_color(color)))?;
                self.color_applied = true;
            }
            None if self.color_applied => {
                execute!(self.output, ResetColor)?;
                self.color_applied = false;
            }
            None => {}
        }
        Ok(())
    }
}

impl Drop for StdConsole {
    fn drop(&mut self) {
        if self.color_applied {
            let _ = execute!(self.output, ResetColor);
        }
    }
}

/// Scripted console: input comes from a queue, output goes to a transcript.
///
/// Consumed input lines are echoed into the transcript after the prompt that
/// requested them, so a transcript reads like a terminal session.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    input: VecDeque<String>,
    transcript: String,
    colors: Vec<Option<ConsoleColor>>,
}

impl MemoryConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Every color change requested, in order.
    #[must_use]
    pub fn colors(&self) -> &[Option<ConsoleColor>] {
        &self.colors
    }

    #[must_use]
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for MemoryConsole {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.transcript.push_str(text);
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.transcript.push_str(text);
        self.transcript.push('\n');
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let line = self.input.pop_front();
        if let Some(line) = &line {
            self.transcript.push_str(line);
            self.transcript.push('\n');
        }
        Ok(line)
    }

    fn set_color(&mut self, color: Option<ConsoleColor>) -> io::Result<()> {
        self.colors.push(color);
        Ok(())
    }
}
