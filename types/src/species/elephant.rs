use crate::record::{non_negative_count, non_negative_measure, required_name};
use crate::{Field, FieldSource, NonEmptyString, Record, RecordError, SpeciesKey};

const NAME: Field = Field::new("name", "What name of the elephant? ");
const AGE: Field = Field::new("age", "What is the elephant's age? ");
const HEIGHT: Field = Field::new("height", "What is the elephant's height? ");
const WEIGHT: Field = Field::new("weight", "What is the elephant's weight? ");
const TUSK_LENGTH: Field = Field::new("tusk length", "What is the elephant's tusk length? ");
const LIFESPAN: Field = Field::new("lifespan", "How many years will he live? ");
const SOCIAL_BEHAVIOR: Field = Field::new(
    "social behavior",
    "Describe elephant's social behavior: ",
);

#[derive(Debug, Clone, PartialEq)]
pub struct AfricanElephant {
    name: NonEmptyString,
    age: u32,
    height: f64,
    weight: f64,
    tusk_length: f64,
    lifespan: u32,
    social_behavior: String,
}

impl AfricanElephant {
    pub fn new(
        name: impl Into<String>,
        age: i64,
        height: f64,
        weight: f64,
        tusk_length: f64,
        lifespan: i64,
        social_behavior: impl Into<String>,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            name: required_name(name.into())?,
            age: non_negative_count(AGE.key, age)?,
            height: non_negative_measure(HEIGHT.key, height)?,
            weight: non_negative_measure(WEIGHT.key, weight)?,
            tusk_length: non_negative_measure(TUSK_LENGTH.key, tusk_length)?,
            lifespan: non_negative_count(LIFESPAN.key, lifespan)?,
            social_behavior: social_behavior.into(),
        })
    }

    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub fn tusk_length(&self) -> f64 {
        self.tusk_length
    }

    #[must_use]
    pub fn lifespan(&self) -> u32 {
        self.lifespan
    }

    #[must_use]
    pub fn social_behavior(&self) -> &str {
        &self.social_behavior
    }
}

impl Record for AfricanElephant {
    const KEY: SpeciesKey = SpeciesKey::AfricanElephant;

    fn name(&self) -> &str {
        &self.name
    }

    fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.to_string()),
            ("Age", self.age.to_string()),
            ("Height", self.height.to_string()),
            ("Weight", self.weight.to_string()),
            ("Tusk length", self.tusk_length.to_string()),
            ("Lifespan", self.lifespan.to_string()),
            ("Social behavior", self.social_behavior.clone()),
        ]
    }

    fn read<F: FieldSource>(fields: &mut F) -> Result<Self, F::Error> {
        let name = fields.text(NAME)?;
        let age = fields.integer(AGE)?;
        let height = fields.decimal(HEIGHT)?;
        let weight = fields.decimal(WEIGHT)?;
        let tusk_length = fields.decimal(TUSK_LENGTH)?;
        let lifespan = fields.integer(LIFESPAN)?;
        let social_behavior = fields.text(SOCIAL_BEHAVIOR)?;
        Ok(Self::new(
            name,
            age,
            height,
            weight,
            tusk_length,
            lifespan,
            social_behavior,
        )?)
    }
}
