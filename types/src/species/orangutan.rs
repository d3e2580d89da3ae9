use crate::record::{non_negative_count, required_name};
use crate::{Field, FieldSource, NonEmptyString, Record, RecordError, SpeciesKey};

const NAME: Field = Field::new("name", "What name of the orangutan? ");
const AGE: Field = Field::new("age", "What is the orangutan's age? ");
const ARBOREAL: Field = Field::new(
    "arboreal lifestyle",
    "Does orangutan like to climb trees(Yes/No)? ",
);
const OPPOSABLE_THUMBS: Field = Field::new(
    "opposable thumbs",
    "Does orangutan have opposable thumbs(Yes/No)? ",
);
const SOLITARY: Field = Field::new(
    "solitary behavior",
    "Does orangutan like to be alone(Yes/No)? ",
);
const SLOW_REPRODUCTION: Field = Field::new(
    "slow reproductive rate",
    "Does orangutan have slow reproduction rate(Yes/No)? ",
);
const INTELLIGENCE: Field = Field::new("intelligence", "What is level of his iq? ");

/// Behavioral traits answered yes/no at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrangutanTraits {
    pub arboreal: bool,
    pub opposable_thumbs: bool,
    pub solitary: bool,
    pub slow_reproduction: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Orangutan {
    name: NonEmptyString,
    age: u32,
    traits: OrangutanTraits,
    intelligence: i32,
}

impl Orangutan {
    pub fn new(
        name: impl Into<String>,
        age: i64,
        traits: OrangutanTraits,
        intelligence: i64,
    ) -> Result<Self, RecordError> {
        let intelligence = i32::try_from(intelligence).map_err(|_| {
            RecordError::invalid(INTELLIGENCE.key, format!("{intelligence} is out of range"))
        })?;
        Ok(Self {
            name: required_name(name.into())?,
            age: non_negative_count(AGE.key, age)?,
            traits,
            intelligence,
        })
    }

    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[must_use]
    pub fn traits(&self) -> OrangutanTraits {
        self.traits
    }

    #[must_use]
    pub fn intelligence(&self) -> i32 {
        self.intelligence
    }
}

impl Record for Orangutan {
    const KEY: SpeciesKey = SpeciesKey::Orangutan;

    fn name(&self) -> &str {
        &self.name
    }

    fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.to_string()),
            ("Age", self.age.to_string()),
            ("Arboreal lifestyle", self.traits.arboreal.to_string()),
            ("Opposable thumbs", self.traits.opposable_thumbs.to_string()),
            ("Solitary behavior", self.traits.solitary.to_string()),
            ("Slow reproductive rate", self.traits.slow_reproduction.to_string()),
            ("Intelligence", self.intelligence.to_string()),
        ]
    }

    fn read<F: FieldSource>(fields: &mut F) -> Result<Self, F::Error> {
        let name = fields.text(NAME)?;
        let age = fields.integer(AGE)?;
        let traits = OrangutanTraits {
            arboreal: fields.flag(ARBOREAL)?,
            opposable_thumbs: fields.flag(OPPOSABLE_THUMBS)?,
            solitary: fields.flag(SOLITARY)?,
            slow_reproduction: fields.flag(SLOW_REPRODUCTION)?,
        };
        let intelligence = fields.integer(INTELLIGENCE)?;
        Ok(Self::new(name, age, traits, intelligence)?)
    }
}
