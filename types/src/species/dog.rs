use crate::record::{non_negative_count, required_name};
use crate::{Field, FieldSource, NonEmptyString, Record, RecordError, SpeciesKey};

const NAME: Field = Field::new("name", "What is the name of the dog? ");
const AGE: Field = Field::new("age", "What is the dog's age? ");
const BREED: Field = Field::new("breed", "What is the dog's breed? ");

#[derive(Debug, Clone, PartialEq)]
pub struct Dog {
    name: NonEmptyString,
    age: u32,
    breed: String,
}

impl Dog {
    pub fn new(
        name: impl Into<String>,
        age: i64,
        breed: impl Into<String>,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            name: required_name(name.into())?,
            age: non_negative_count(AGE.key, age)?,
            breed: breed.into(),
        })
    }

    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[must_use]
    pub fn breed(&self) -> &str {
        &self.breed
    }
}

impl Record for Dog {
    const KEY: SpeciesKey = SpeciesKey::Dog;

    fn name(&self) -> &str {
        &self.name
    }

    fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.to_string()),
            ("Age", self.age.to_string()),
            ("Breed", self.breed.clone()),
        ]
    }

    fn read<F: FieldSource>(fields: &mut F) -> Result<Self, F::Error> {
        let name = fields.text(NAME)?;
        let age = fields.integer(AGE)?;
        let breed = fields.text(BREED)?;
        Ok(Self::new(name, age, breed)?)
    }
}
