use crate::record::{non_negative_count, required_name};
use crate::{Field, FieldSource, NonEmptyString, Record, RecordError, SpeciesKey};

const NAME: Field = Field::new("name", "What is the name of the beaver? ");
const AGE: Field = Field::new("age", "What is the beaver's age? ");
const COLOR: Field = Field::new("color", "What color beaver is? ");
const FAVORITE_FOOD: Field = Field::new("favorite food", "What is beaver's favorite food? ");
const TAIL_LENGTH: Field = Field::new("tail length", "What length of beaver's tail? ");
const BUILDS_DAMS: Field = Field::new("builds dams", "Can beaver build a dam? ");

#[derive(Debug, Clone, PartialEq)]
pub struct Beaver {
    name: NonEmptyString,
    age: u32,
    color: String,
    favorite_food: String,
    tail_length: u32,
    builds_dams: bool,
}

impl Beaver {
    pub fn new(
        name: impl Into<String>,
        age: i64,
        color: impl Into<String>,
        favorite_food: impl Into<String>,
        tail_length: i64,
        builds_dams: bool,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            name: required_name(name.into())?,
            age: non_negative_count(AGE.key, age)?,
            color: color.into(),
            favorite_food: favorite_food.into(),
            tail_length: non_negative_count(TAIL_LENGTH.key, tail_length)?,
            builds_dams,
        })
    }

    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn favorite_food(&self) -> &str {
        &self.favorite_food
    }

    #[must_use]
    pub fn tail_length(&self) -> u32 {
        self.tail_length
    }

    #[must_use]
    pub fn builds_dams(&self) -> bool {
        self.builds_dams
    }
}

impl Record for Beaver {
    const KEY: SpeciesKey = SpeciesKey::Beaver;

    fn name(&self) -> &str {
        &self.name
    }

    fn summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.to_string()),
            ("Age", self.age.to_string()),
            ("Color", self.color.clone()),
            ("Favorite food", self.favorite_food.clone()),
            ("Tail length", self.tail_length.to_string()),
            ("Builds dams", self.builds_dams.to_string()),
        ]
    }

    fn read<F: FieldSource>(fields: &mut F) -> Result<Self, F::Error> {
        let name = fields.text(NAME)?;
        let age = fields.integer(AGE)?;
        let color = fields.text(COLOR)?;
        let favorite_food = fields.text(FAVORITE_FOOD)?;
        let tail_length = fields.integer(TAIL_LENGTH)?;
        let builds_dams = fields.flag(BUILDS_DAMS)?;
        Ok(Self::new(
            name,
            age,
            color,
            favorite_food,
            tail_length,
            builds_dams,
        )?)
    }
}
