//! The fixed taxonomy: categories and the species collections they hold.
//!
//! The tree is known at compile time, so it is modelled with closed enums
//! rather than runtime-registered keys.

use crate::ScreenId;

/// Category-level grouping of species.
///
/// A category carries no data of its own beyond membership: it exists to
/// name a branch of the navigation tree and enumerate its species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Mammal,
}

impl Category {
    pub const ALL: [Category; 1] = [Category::Mammal];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Mammal => "Mammals",
        }
    }

    #[must_use]
    pub const fn screen_id(self) -> ScreenId {
        match self {
            Category::Mammal => ScreenId::Mammals,
        }
    }

    /// Species held under this category, in menu order.
    #[must_use]
    pub fn species(self) -> &'static [SpeciesKey] {
        match self {
            Category::Mammal => &SpeciesKey::ALL,
        }
    }
}

/// Identifies one species collection in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpeciesKey {
    Dog,
    AfricanElephant,
    Orangutan,
    Beaver,
}

impl SpeciesKey {
    pub const ALL: [SpeciesKey; 4] = [
        SpeciesKey::Dog,
        SpeciesKey::AfricanElephant,
        SpeciesKey::Orangutan,
        SpeciesKey::Beaver,
    ];

    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            SpeciesKey::Dog
            | SpeciesKey::AfricanElephant
            | SpeciesKey::Orangutan
            | SpeciesKey::Beaver => Category::Mammal,
        }
    }

    /// Lowercase singular noun used inside sentences ("beaver").
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            SpeciesKey::Dog => "dog",
            SpeciesKey::AfricanElephant => "elephant",
            SpeciesKey::Orangutan => "orangutan",
            SpeciesKey::Beaver => "beaver",
        }
    }

    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            SpeciesKey::Dog => "dogs",
            SpeciesKey::AfricanElephant => "elephants",
            SpeciesKey::Orangutan => "orangutans",
            SpeciesKey::Beaver => "beavers",
        }
    }

    /// Capitalized singular used at the start of a sentence ("Beaver").
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            SpeciesKey::Dog => "Dog",
            SpeciesKey::AfricanElephant => "Elephant",
            SpeciesKey::Orangutan => "Orangutan",
            SpeciesKey::Beaver => "Beaver",
        }
    }

    /// Entry shown for this species in its category menu.
    #[must_use]
    pub const fn menu_label(self) -> &'static str {
        match self {
            SpeciesKey::Dog => "Dogs",
            SpeciesKey::AfricanElephant => "Elephants",
            SpeciesKey::Orangutan => "Orangutans",
            SpeciesKey::Beaver => "Beavers",
        }
    }

    #[must_use]
    pub const fn screen_id(self) -> ScreenId {
        match self {
            SpeciesKey::Dog => ScreenId::Dogs,
            SpeciesKey::AfricanElephant => ScreenId::AfricanElephants,
            SpeciesKey::Orangutan => ScreenId::Orangutans,
            SpeciesKey::Beaver => ScreenId::Beavers,
        }
    }
}

impl std::fmt::Display for SpeciesKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.plural())
    }
}
