//! Pokedex - An interactive PokeAPI explorer
//!
//! Reads commands from stdin, fetches data from PokeAPI through a
//! time-bounded response cache, and prints results to stdout.

use std::io::{self, Write};

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::api::PokeApiClient;
use pokedex::commands::{Flow, Session};
use pokedex::Config;

const PROMPT: &str = "Pokedex > ";

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber (stderr, so the REPL output stays clean)
/// 2. Load configuration from environment variables
/// 3. Create the PokeAPI client and its cache (starts the cache reaper)
/// 4. Run the read-eval loop until `exit` or end of input
/// 5. Stop the cache reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn", can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: api_url={}, cache_ttl={}s, sweep_interval={}s, http_timeout={}s",
        config.api_url, config.cache_ttl, config.sweep_interval, config.http_timeout
    );

    let client = PokeApiClient::new(&config).context("failed to build PokeAPI client")?;
    let mut session = Session::new(client);

    let result = run_repl(&mut session).await;

    session.shutdown().await;
    info!("Pokedex shutdown complete");

    result
}

async fn run_repl(session: &mut Session) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            // End of input behaves like `exit`
            writeln!(stdout)?;
            return Ok(());
        };

        match session.handle_line(&line, &mut stdout).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return Ok(()),
            Err(err) => {
                debug!("Command failed: {:?}", err);
                writeln!(stdout, "Error: {}", err)?;
            }
        }
    }
}
