//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use fabula::{ACTION_WRITE_BEAT, BeatIds};
use std::path::PathBuf;

/// Fabula - generate fiction one beat at a time from outlines and lore cards
#[derive(Parser, Debug)]
#[command(name = "fabula")]
#[command(about = "Generate fiction one beat at a time from outlines and lore cards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Which beat of which story
#[derive(Args, Debug, Clone)]
pub struct BeatArgs {
    /// Path to the story root directory
    #[arg(long, default_value = ".")]
    pub story_root: PathBuf,

    /// Chapter number (1-based)
    #[arg(long)]
    pub chapter: u32,

    /// Scene number within the chapter (1-based)
    #[arg(long)]
    pub scene: u32,

    /// Beat number within the scene (1-based)
    #[arg(long)]
    pub beat: u32,
}

impl BeatArgs {
    /// Identifiers of the selected beat.
    pub fn ids(&self) -> BeatIds {
        BeatIds::new(self.chapter, self.scene, self.beat)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a beat and write it into the manuscript
    WriteBeat(BeatArgs),

    /// Print the assembled beat specification as JSON
    Spec(BeatArgs),

    /// Render an action's prompts for a beat without calling the model
    Prompts {
        /// Beat selection
        #[command(flatten)]
        beat: BeatArgs,

        /// Action key from prompting.yaml
        #[arg(long, default_value = ACTION_WRITE_BEAT)]
        action: String,
    },
}

impl Commands {
    /// Story root of the selected command.
    pub fn story_root(&self) -> &PathBuf {
        match self {
            Commands::WriteBeat(args) | Commands::Spec(args) => &args.story_root,
            Commands::Prompts { beat, .. } => &beat.story_root,
        }
    }
}
