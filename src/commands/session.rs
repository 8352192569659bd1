//! REPL session: command execution against the client and the collection.

use std::io::Write;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use super::{clean_input, Command, COMMANDS};
use crate::api::PokeApiClient;
use crate::error::Result;
use crate::models::{LocationAreaPage, Pokemon};
use crate::pokedex::{catch_succeeds, Pokedex};

/// What the REPL should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Cursors into the location-area listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub next: Option<String>,
    pub previous: Option<String>,
}

impl Pagination {
    /// Starts before the first page.
    pub fn new(first_page_url: String) -> Self {
        Self {
            next: Some(first_page_url),
            previous: None,
        }
    }

    fn update(&mut self, page: &LocationAreaPage) {
        self.next = page.next.clone();
        self.previous = page.previous.clone();
    }
}

/// State carried between commands for one user.
pub struct Session {
    client: PokeApiClient,
    pagination: Pagination,
    pokedex: Pokedex,
    rng: StdRng,
}

impl Session {
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }

    /// Creates a session with a caller-supplied RNG for catch rolls.
    pub fn with_rng(client: PokeApiClient, rng: StdRng) -> Self {
        let pagination = Pagination::new(client.first_page_url());
        Self {
            client,
            pagination,
            pokedex: Pokedex::new(),
            rng,
        }
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    /// Tokenizes, parses and executes one line of input.
    pub async fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        match Command::parse(&clean_input(line))? {
            Some(command) => self.execute(command, out).await,
            None => Ok(Flow::Continue),
        }
    }

    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => self.map(out).await?,
            Command::MapBack => self.map_back(out).await?,
            Command::Explore(area) => self.explore(&area, out).await?,
            Command::Catch(name) => self.catch(&name, out).await?,
            Command::Inspect(name) => self.inspect(&name, out)?,
            Command::Pokedex => self.list_pokedex(out)?,
            Command::CacheStats => self.cache_stats(out)?,
        }

        Ok(Flow::Continue)
    }

    /// Stops the client's cache reaper.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for entry in COMMANDS {
            writeln!(out, "{}: {}", entry.usage(), entry.description)?;
        }
        Ok(())
    }

    async fn map<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(url) = self.pagination.next.clone() else {
            writeln!(out, "you're on the last page")?;
            return Ok(());
        };
        self.show_page(&url, out).await
    }

    async fn map_back<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let Some(url) = self.pagination.previous.clone() else {
            writeln!(out, "you're on the first page")?;
            return Ok(());
        };
        self.show_page(&url, out).await
    }

    // Cursors only move once the page has been fetched and decoded
    async fn show_page<W: Write>(&mut self, url: &str, out: &mut W) -> Result<()> {
        let page = self.client.location_areas(url).await?;
        self.pagination.update(&page);

        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        Ok(())
    }

    async fn explore<W: Write>(&mut self, area: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Exploring {}...", area)?;
        let location = self.client.location_area(area).await?;

        if location.pokemon_encounters.is_empty() {
            writeln!(out, "No Pokemon found here")?;
            return Ok(());
        }

        writeln!(out, "Found Pokemon:")?;
        for name in location.pokemon_names() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        let pokemon = self.client.pokemon(name).await?;
        writeln!(out, "Throwing a Pokeball at {}...", pokemon.name)?;

        if catch_succeeds(pokemon.base_experience, &mut self.rng) {
            writeln!(out, "{} was caught!", pokemon.name)?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
            info!(pokemon = %pokemon.name, "caught");
            self.pokedex.add(pokemon);
        } else {
            writeln!(out, "{} escaped!", pokemon.name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        match self.pokedex.get(name) {
            Some(caught) => write_pokemon(&caught.pokemon, out),
            None => {
                writeln!(out, "you have not caught that pokemon")?;
                Ok(())
            }
        }
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.pokedex.is_empty() {
            writeln!(out, "Your Pokedex is empty")?;
            return Ok(());
        }

        writeln!(out, "Your Pokedex:")?;
        for caught in self.pokedex.iter() {
            writeln!(out, " - {}", caught.pokemon.name)?;
        }
        Ok(())
    }

    fn cache_stats<W: Write>(&self, out: &mut W) -> Result<()> {
        let cache = self.client.cache();
        let stats = cache.stats();

        writeln!(
            out,
            "Cache: {} entries, ttl {}s, sweep every {}s",
            stats.total_entries,
            cache.ttl().as_secs(),
            cache.sweep_interval().as_secs()
        )?;
        writeln!(
            out,
            "Hits: {}, misses: {}, hit rate: {:.1}%",
            stats.hits,
            stats.misses,
            stats.hit_rate() * 100.0
        )?;
        writeln!(
            out,
            "Expired: {}, sweeps: {}",
            stats.expirations, stats.sweeps
        )?;
        Ok(())
    }
}

fn write_pokemon<W: Write>(pokemon: &Pokemon, out: &mut W) -> Result<()> {
    writeln!(out, "Name: {}", pokemon.name)?;
    writeln!(out, "Height: {}", pokemon.height)?;
    writeln!(out, "Weight: {}", pokemon.weight)?;
    writeln!(out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
    }
    writeln!(out, "Types:")?;
    for kind in &pokemon.types {
        writeln!(out, "  - {}", kind.kind.name)?;
    }
    Ok(())
}
