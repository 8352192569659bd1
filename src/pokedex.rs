//! Caught-Pokémon collection and the catch roll.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::models::Pokemon;

/// A roll below this value catches the Pokémon.
pub const CATCH_THRESHOLD: u32 = 50;

/// Rolls a catch attempt against a Pokémon's base experience.
///
/// The roll is uniform over `0..base_experience`; higher base experience
/// means a lower chance. Anything at or below the threshold is always caught,
/// as is a Pokémon with no base experience.
pub fn catch_succeeds<R: Rng>(base_experience: Option<u32>, rng: &mut R) -> bool {
    let upper = base_experience.unwrap_or(CATCH_THRESHOLD).max(1);
    rng.gen_range(0..upper) < CATCH_THRESHOLD
}

/// A Pokémon in the collection.
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

/// The Pokémon caught during this session, keyed by name.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, CaughtPokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a catch. Catching the same Pokémon again refreshes its entry.
    pub fn add(&mut self, pokemon: Pokemon) {
        let caught = CaughtPokemon {
            pokemon,
            caught_at: Utc::now(),
        };
        self.caught.insert(caught.pokemon.name.clone(), caught);
    }

    pub fn get(&self, name: &str) -> Option<&CaughtPokemon> {
        self.caught.get(name)
    }

    /// Caught Pokémon in name order.
    pub fn iter(&self) -> impl Iterator<Item = &CaughtPokemon> {
        self.caught.values()
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}
