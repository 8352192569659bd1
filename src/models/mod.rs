//! PokeAPI payload models
//!
//! Only the fields the client displays are modelled; everything else in the
//! API responses is ignored during deserialization.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
