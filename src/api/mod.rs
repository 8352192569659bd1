//! API Module
//!
//! HTTP client for the PokeAPI REST endpoints used by the REPL.
//!
//! # Endpoints
//! - `GET /location-area` - Paginated list of location areas
//! - `GET /location-area/{name}` - Location area detail with encounters
//! - `GET /pokemon/{name}` - Pokémon detail

pub mod client;

pub use client::PokeApiClient;
