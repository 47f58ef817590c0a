//! Runtime configuration read from the environment.
use std::env;
use std::path::PathBuf;

use pet_core::{GameConfig, Species, SpeciesError};

/// Runtime settings layered on top of the content-provided [`GameConfig`].
///
/// Environment variables:
/// - `PET_GAME_SEED` - Seed for the shared random generator (default: random)
/// - `PET_DATA_DIR` - Directory holding `config.toml` and `catalog.ron`
///   (default: the bundled data)
/// - `PET_NUMBER_OF_DAYS` - Overrides `number_of_days` from the config file
/// - `PET_PLAYERS` - Roster such as `Alice:Tom=cat+dog,Bob:horse`
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    pub seed: Option<u64>,
    pub data_dir: Option<PathBuf>,
    pub number_of_days: Option<u32>,
    pub roster: Vec<PlayerSpec>,
}

/// One player and the pets they start with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerSpec {
    pub name: String,
    pub pets: Vec<PetSpec>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PetSpec {
    pub name: String,
    pub species: Species,
}

impl PetSpec {
    pub fn new(name: impl Into<String>, species: Species) -> Self {
        Self {
            name: name.into(),
            species,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("roster entry '{entry}' is malformed: {reason}")]
    MalformedRoster { entry: String, reason: &'static str },

    #[error("roster entry '{entry}': {source}")]
    UnknownSpecies {
        entry: String,
        #[source]
        source: SpeciesError,
    },
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            data_dir: None,
            number_of_days: None,
            roster: vec![
                PlayerSpec {
                    name: "Alice".into(),
                    pets: vec![
                        PetSpec::new("Whiskers", Species::Cat),
                        PetSpec::new("Rex", Species::Dog),
                    ],
                },
                PlayerSpec {
                    name: "Bob".into(),
                    pets: vec![PetSpec::new("Nanook", Species::PolarBear)],
                },
            ],
        }
    }
}

impl RuntimeConfig {
    /// Construct runtime configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`RuntimeConfig::from_env`] over an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        config.seed = read_env(&lookup, "PET_GAME_SEED");
        config.data_dir = lookup("PET_DATA_DIR").map(PathBuf::from);
        config.number_of_days = read_env::<u32>(&lookup, "PET_NUMBER_OF_DAYS").map(|d| d.max(1));

        if let Some(roster) = lookup("PET_PLAYERS") {
            config.roster = parse_roster(&roster)?;
        }

        Ok(config)
    }

    /// The configured seed, or a fresh one from the thread RNG.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Applies overrides to a config loaded from content.
    pub fn apply(&self, game: &mut GameConfig) {
        if let Some(days) = self.number_of_days {
            game.number_of_days = days;
        }
    }
}

fn read_env<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

/// Parses `name:pet+pet,name:pet`, where each pet is `species` or
/// `petname=species`. Unnamed pets are called after their owner and species.
pub fn parse_roster(text: &str) -> Result<Vec<PlayerSpec>, ConfigError> {
    text.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_player)
        .collect()
}

fn parse_player(entry: &str) -> Result<PlayerSpec, ConfigError> {
    let malformed = |reason| ConfigError::MalformedRoster {
        entry: entry.to_owned(),
        reason,
    };

    let (name, pets) = entry
        .split_once(':')
        .ok_or_else(|| malformed("expected 'player:pets'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(malformed("player name is empty"));
    }

    let mut specs = Vec::new();
    for pet in pets.split('+').map(str::trim) {
        if pet.is_empty() {
            return Err(malformed("pet is empty"));
        }
        let (pet_name, species) = match pet.split_once('=') {
            Some((pet_name, species)) => (Some(pet_name.trim()), species.trim()),
            None => (None, pet),
        };
        let species = Species::parse(species).map_err(|source| ConfigError::UnknownSpecies {
            entry: entry.to_owned(),
            source,
        })?;

        let pet_name = match pet_name {
            Some("") => return Err(malformed("pet name is empty")),
            Some(pet_name) => pet_name.to_owned(),
            None => default_pet_name(name, species, &specs),
        };
        specs.push(PetSpec::new(pet_name, species));
    }

    Ok(PlayerSpec {
        name: name.to_owned(),
        pets: specs,
    })
}

fn default_pet_name(owner: &str, species: Species, taken: &[PetSpec]) -> String {
    let base = format!("{owner}'s {species}");
    let mut candidate = base.clone();
    let mut n = 2;
    while taken.iter().any(|pet| pet.name == candidate) {
        candidate = format!("{base} {n}");
        n += 1;
    }
    candidate
}
