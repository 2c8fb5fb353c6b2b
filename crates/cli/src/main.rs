//! Cafe API CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! cafe-cli migrate
//!
//! # Seed the database with sample cafes
//! cafe-cli seed --count 6
//!
//! # Generate an API key and write it to the key file
//! cafe-cli genkey --length 32 --output api_key.txt
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Seed the database with sample cafes
//! - `genkey` - Generate a random API key

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cafe-cli")]
#[command(author, version, about = "Cafe API CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the database with sample cafes
    Seed {
        /// Number of cafes to insert
        #[arg(short, long, default_value_t = 6)]
        count: usize,
    },
    /// Generate a random API key and write it to the key file
    Genkey {
        /// Key length in characters
        #[arg(short, long, default_value_t = 32)]
        length: usize,

        /// Output path (defaults to the configured key file)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { count } => commands::seed::run(count).await?,
        Commands::Genkey { length, output } => commands::genkey::run(length, output)?,
    }
    Ok(())
}
