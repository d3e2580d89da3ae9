//! Screen identifiers and the console color palette.
//!
//! Both vocabularies are persisted by name in the settings file, so their
//! string forms are part of the on-disk format and must stay stable.

/// Every screen whose color can be configured, in settings-editor order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScreenId {
    Main,
    Animals,
    Mammals,
    Dogs,
    AfricanElephants,
    Orangutans,
    Beavers,
}

impl ScreenId {
    pub const ALL: [ScreenId; 7] = [
        ScreenId::Main,
        ScreenId::Animals,
        ScreenId::Mammals,
        ScreenId::Dogs,
        ScreenId::AfricanElephants,
        ScreenId::Orangutans,
        ScreenId::Beavers,
    ];

    /// Key used in the settings file.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            ScreenId::Main => "MainScreen",
            ScreenId::Animals => "AnimalsScreen",
            ScreenId::Mammals => "MammalsScreen",
            ScreenId::Dogs => "DogsScreen",
            ScreenId::AfricanElephants => "African_Elephant",
            ScreenId::Orangutans => "OrangutanScreen",
            ScreenId::Beavers => "BeaverScreen",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }

    /// 1-based position in [`ScreenId::ALL`], as numbered in the editor.
    #[must_use]
    pub fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// The sixteen-color console palette, numbered by palette code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConsoleColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    #[default]
    White,
}

impl ConsoleColor {
    pub const ALL: [ConsoleColor; 16] = [
        ConsoleColor::Black,
        ConsoleColor::DarkBlue,
        ConsoleColor::DarkGreen,
        ConsoleColor::DarkCyan,
        ConsoleColor::DarkRed,
        ConsoleColor::DarkMagenta,
        ConsoleColor::DarkYellow,
        ConsoleColor::Gray,
        ConsoleColor::DarkGray,
        ConsoleColor::Blue,
        ConsoleColor::Green,
        ConsoleColor::Cyan,
        ConsoleColor::Red,
        ConsoleColor::Magenta,
        ConsoleColor::Yellow,
        ConsoleColor::White,
    ];

    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ConsoleColor::Black => "Black",
            ConsoleColor::DarkBlue => "DarkBlue",
            ConsoleColor::DarkGreen => "DarkGreen",
            ConsoleColor::DarkCyan => "DarkCyan",
            ConsoleColor::DarkRed => "DarkRed",
            ConsoleColor::DarkMagenta => "DarkMagenta",
            ConsoleColor::DarkYellow => "DarkYellow",
            ConsoleColor::Gray => "Gray",
            ConsoleColor::DarkGray => "DarkGray",
            ConsoleColor::Blue => "Blue",
            ConsoleColor::Green => "Green",
            ConsoleColor::Cyan => "Cyan",
            ConsoleColor::Red => "Red",
            ConsoleColor::Magenta => "Magenta",
            ConsoleColor::Yellow => "Yellow",
            ConsoleColor::White => "White",
        }
    }

    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Like [`ConsoleColor::from_code`], falling back to white for codes
    /// outside the palette.
    #[must_use]
    pub fn from_code_or_default(code: i64) -> Self {
        Self::from_code(code).unwrap_or_default()
    }

    /// Case-insensitive lookup by palette name.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(raw))
    }
}

impl std::fmt::Display for ConsoleColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
