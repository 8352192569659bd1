//! Pokedex - An interactive PokeAPI explorer
//!
//! Provides a PokeAPI client fronted by a time-bounded in-memory cache and
//! the REPL commands built on top of it.

pub mod api;
pub mod cache;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod pokedex;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::Cache;
pub use config::Config;
pub use error::{PokedexError, Result};
