//! The in-memory animal catalog.
//!
//! Collections are laid out along the taxonomy (animals, then mammals, then
//! one `Vec` per species). Each species type knows its own collection via
//! [`Herd`], so addressing a collection that does not exist is a compile
//! error rather than a runtime one.

use menagerie_types::{AfricanElephant, Beaver, Dog, Orangutan, Record, SpeciesKey};

#[derive(Debug, Clone, Default)]
pub struct Mammals {
    pub dogs: Vec<Dog>,
    pub african_elephants: Vec<AfricanElephant>,
    pub orangutans: Vec<Orangutan>,
    pub beavers: Vec<Beaver>,
}

#[derive(Debug, Clone, Default)]
pub struct Animals {
    pub mammals: Mammals,
}

/// Session-scoped record storage. Created empty, discarded at exit.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    animals: Animals,
}

/// Maps a species type to its collection inside a [`Catalog`].
pub trait Herd: Record {
    fn herd(catalog: &Catalog) -> &Vec<Self>;
    fn herd_mut(catalog: &mut Catalog) -> &mut Vec<Self>;
}

macro_rules! herd {
    ($species:ty, $field:ident) => {
        impl Herd for $species {
            fn herd(catalog: &Catalog) -> &Vec<Self> {
                &catalog.animals.mammals.$field
            }

            fn herd_mut(catalog: &mut Catalog) -> &mut Vec<Self> {
                &mut catalog.animals.mammals.$field
            }
        }
    };
}

herd!(Dog, dogs);
herd!(AfricanElephant, african_elephants);
herd!(Orangutan, orangutans);
herd!(Beaver, beavers);

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn animals(&self) -> &Animals {
        &self.animals
    }

    /// Records of one species in insertion order.
    #[inline]
    #[must_use]
    pub fn list<S: Herd>(&self) -> &[S] {
        S::herd(self)
    }

    /// Append without any duplicate check.
    pub fn add<S: Herd>(&mut self, record: S) {
        tracing::debug!(species = %S::KEY, name = record.name(), "Catalog add");
        S::herd_mut(self).push(record);
    }

    /// Remove the first record named `name`. Returns whether one was removed.
    pub fn remove<S: Herd>(&mut self, name: &str) -> bool {
        let herd = S::herd_mut(self);
        let Some(index) = herd.iter().position(|record| record.name() == name) else {
            return false;
        };
        herd.remove(index);
        tracing::debug!(species = %S::KEY, name, index, "Catalog remove");
        true
    }

    /// First record named `name`.
    #[must_use]
    pub fn find_by_name<S: Herd>(&self, name: &str) -> Option<&S> {
        S::herd(self).iter().find(|record| record.name() == name)
    }

    pub fn find_by_name_mut<S: Herd>(&mut self, name: &str) -> Option<&mut S> {
        S::herd_mut(self)
            .iter_mut()
            .find(|record| record.name() == name)
    }

    /// Number of records held for `key`.
    #[must_use]
    pub fn len(&self, key: SpeciesKey) -> usize {
        let mammals = &self.animals.mammals;
        match key {
            SpeciesKey::Dog => mammals.dogs.len(),
            SpeciesKey::AfricanElephant => mammals.african_elephants.len(),
            SpeciesKey::Orangutan => mammals.orangutans.len(),
            SpeciesKey::Beaver => mammals.beavers.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        SpeciesKey::ALL.iter().all(|key| self.len(*key) == 0)
    }

    /// Record count per species, in taxonomy order.
    #[must_use]
    pub fn census(&self) -> Vec<(SpeciesKey, usize)> {
        SpeciesKey::ALL
            .iter()
            .map(|key| (*key, self.len(*key)))
            .collect()
    }
}
