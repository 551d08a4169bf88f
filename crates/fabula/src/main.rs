//! Fabula CLI binary.
//!
//! - `write-beat` generates a beat and writes it into the manuscript
//! - `spec` prints the assembled beat specification
//! - `prompts` renders prompts without calling the model

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, show_prompts, show_spec, write_beat};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Credentials may live beside the story or in the working directory
    dotenvy::from_path(cli.command.story_root().join(".env")).ok();
    dotenvy::dotenv().ok();

    // Initialize tracing; --verbose wins over RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute the requested command
    match &cli.command {
        Commands::WriteBeat(args) => {
            write_beat(args).await?;
        }

        Commands::Spec(args) => {
            show_spec(args)?;
        }

        Commands::Prompts { beat, action } => {
            show_prompts(beat, action)?;
        }
    }

    Ok(())
}
