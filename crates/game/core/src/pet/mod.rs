//! Pets: identity, species and vitals.
//!
//! Care actions (feed, play, sleep, toilet) and the event transitions used by
//! the daily engine live in [`behavior`]; species constants live in
//! [`species`].

pub mod behavior;
pub mod error;
pub mod species;

pub use behavior::PlayOutcome;
pub use error::{ActionError, SpeciesError};
pub use species::{Species, SpeciesProfile};

use crate::env::RandomSource;
use crate::stats::Vitals;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Draws a gender from the shared random source (one draw).
    pub fn random(rng: &mut dyn RandomSource) -> Self {
        if rng.next_bool() {
            Gender::Female
        } else {
            Gender::Male
        }
    }
}

/// A pet owned by a player.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pet {
    name: String,
    gender: Gender,
    species: Species,
    vitals: Vitals,
}

impl Pet {
    pub fn new(name: impl Into<String>, species: Species, gender: Gender) -> Self {
        Self {
            name: name.into(),
            gender,
            species,
            vitals: Vitals::new(species.base_weight()),
        }
    }

    /// Creates a pet from a species name, failing with `UnknownSpecies`.
    pub fn from_species_name(
        name: impl Into<String>,
        species: &str,
        gender: Gender,
    ) -> Result<Self, SpeciesError> {
        Ok(Self::new(name, Species::parse(species)?, gender))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn profile(&self) -> &'static SpeciesProfile {
        self.species.profile()
    }

    pub fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    /// Direct access to the vitals, for scenario setup and tests.
    pub fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    pub fn is_dead(&self) -> bool {
        self.vitals.is_dead()
    }

    pub fn is_alive(&self) -> bool {
        !self.is_dead()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use strum::IntoEnumIterator;

    #[test]
    fn new_pet_takes_species_weight() {
        let pet = Pet::new("Rex", Species::Horse, Gender::Male);
        assert_eq!(pet.vitals().weight(), 500.0);
        assert!(pet.is_alive());
    }

    #[test]
    fn every_species_starts_above_the_weight_floor() {
        for species in Species::iter() {
            let pet = Pet::new("Any", species, Gender::Female);
            assert_eq!(pet.vitals().weight(), species.base_weight());
            assert!(pet.vitals().weight() > Vitals::MIN_WEIGHT, "{species}");
        }
    }

    #[test]
    fn unknown_species_name_is_rejected() {
        let err = Pet::from_species_name("Smaug", "dragon", Gender::Female).unwrap_err();
        assert_eq!(err, SpeciesError::UnknownSpecies("dragon".to_owned()));

        let bear = Pet::from_species_name("Ice", "Polar Bear", Gender::Female).unwrap();
        assert_eq!(bear.species(), Species::PolarBear);
        assert_eq!(bear.vitals().weight(), 250.0);
    }

    #[test]
    fn gender_uses_one_draw() {
        let mut rng = ScriptedRng::new(vec![1, 0]);
        assert_eq!(Gender::random(&mut rng), Gender::Female);
        assert_eq!(Gender::random(&mut rng), Gender::Male);
        assert_eq!(rng.draws(), 2);
    }
}
