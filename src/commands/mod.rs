//! Commands Module
//!
//! The REPL's command table, parsing of tokenized input into [`Command`]s,
//! and the [`Session`] that executes them.
//!
//! # Commands
//! - `help` - List the commands
//! - `exit` - Leave the Pokedex
//! - `map` / `mapb` - Page forward / back through location areas
//! - `explore <area>` - List the Pokémon found in an area
//! - `catch <pokemon>` - Try to catch a Pokémon
//! - `inspect <pokemon>` - Show a caught Pokémon
//! - `pokedex` - List caught Pokémon
//! - `cache` - Show response cache statistics

mod input;
mod session;

pub use input::clean_input;
pub use session::{Flow, Pagination, Session};

use crate::error::{PokedexError, Result};

/// Static description of a command, used by `help`.
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub name: &'static str,
    /// Name of the single argument, if the command takes one
    pub argument: Option<&'static str>,
    pub description: &'static str,
}

impl CommandInfo {
    /// `name` or `name <argument>`.
    pub fn usage(&self) -> String {
        match self.argument {
            Some(argument) => format!("{} <{}>", self.name, argument),
            None => self.name.to_string(),
        }
    }
}

/// All commands, in the order `help` lists them.
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "help",
        argument: None,
        description: "Displays a help message",
    },
    CommandInfo {
        name: "exit",
        argument: None,
        description: "Exit the Pokedex",
    },
    CommandInfo {
        name: "map",
        argument: None,
        description: "Displays the next 20 location areas",
    },
    CommandInfo {
        name: "mapb",
        argument: None,
        description: "Displays the previous 20 location areas",
    },
    CommandInfo {
        name: "explore",
        argument: Some("area"),
        description: "Lists the Pokémon found in a location area",
    },
    CommandInfo {
        name: "catch",
        argument: Some("pokemon"),
        description: "Throws a Pokeball at a Pokémon",
    },
    CommandInfo {
        name: "inspect",
        argument: Some("pokemon"),
        description: "Shows details of a caught Pokémon",
    },
    CommandInfo {
        name: "pokedex",
        argument: None,
        description: "Lists the Pokémon you have caught",
    },
    CommandInfo {
        name: "cache",
        argument: None,
        description: "Shows response cache statistics",
    },
];

/// A parsed command with its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
    CacheStats,
}

impl Command {
    /// Parses tokenized input.
    ///
    /// Returns `Ok(None)` for empty input. Words after the first argument
    /// are ignored.
    pub fn parse(words: &[String]) -> Result<Option<Command>> {
        let Some((name, rest)) = words.split_first() else {
            return Ok(None);
        };
        let argument = rest.first();

        let command = match name.as_str() {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => Command::Explore(required(argument, "explore", "area")?),
            "catch" => Command::Catch(required(argument, "catch", "pokemon")?),
            "inspect" => Command::Inspect(required(argument, "inspect", "pokemon")?),
            "pokedex" => Command::Pokedex,
            "cache" => Command::CacheStats,
            other => return Err(PokedexError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn required(
    argument: Option<&String>,
    command: &'static str,
    name: &'static str,
) -> Result<String> {
    argument.cloned().ok_or(PokedexError::MissingArgument {
        command,
        argument: name,
    })
}
