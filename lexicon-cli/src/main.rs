//! lexicon CLI - dictionary lookup and word store
//!
//! - `serve`: run the word store HTTP API
//! - `lookup`: query the external dictionary service
//! - `save`: look a word up and store one of its senses

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "lexicon",
    author,
    version,
    about = "Look up words and keep the ones worth remembering"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the word store HTTP API
    Serve(commands::serve::ServeArgs),
    /// Look a word up in the dictionary service
    Lookup(commands::lookup::LookupArgs),
    /// Look a word up and save one sense to the word store
    Save(commands::save::SaveArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment wins
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Lookup(args) => commands::run_lookup(args).await?,
        Commands::Save(args) => commands::run_save(args).await?,
    }
    Ok(())
}
