//! CLI frontend for the tarot deck compiler and reading engine.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "tarot",
    about = "Compile tarot decks and draw three-card readings",
    version,
    propagate_version = true
)]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile card descriptions and images into a deck document
    Compile {
        /// Card description text file
        #[arg(long, default_value = "desc")]
        desc: PathBuf,

        /// Root of the card image tree
        #[arg(long, default_value = "card_images")]
        images: PathBuf,

        /// Where to write the deck document
        #[arg(short, long, default_value = "tarot_deck.json")]
        output: PathBuf,
    },

    /// Compile without writing and report what would be dropped
    Check {
        /// Card description text file
        #[arg(long, default_value = "desc")]
        desc: PathBuf,

        /// Root of the card image tree
        #[arg(long, default_value = "card_images")]
        images: PathBuf,
    },

    /// Draw a past/present/future reading
    Draw {
        /// Deck document to use instead of the default search paths
        #[arg(short, long)]
        deck: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = DrawFormat::Text)]
        format: DrawFormat,
    },

    /// List the cards of the loaded deck
    Deck {
        /// Deck document to use instead of the default search paths
        #[arg(short, long)]
        deck: Option<PathBuf>,

        /// Only list one suit (e.g. linux, docker)
        #[arg(short, long)]
        suit: Option<String>,
    },

    /// Show one card
    Show {
        /// Card name (case-insensitive, close matches accepted)
        name: String,

        /// Deck document to use instead of the default search paths
        #[arg(short, long)]
        deck: Option<PathBuf>,
    },
}

/// How `draw` prints the reading.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DrawFormat {
    /// Narration text
    Text,
    /// The event payload as JSON
    Json,
    /// The payload wrapped in its user event
    Event,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Compile {
            desc,
            images,
            output,
        } => commands::compile::run(&desc, &images, &output),
        Commands::Check { desc, images } => commands::check::run(&desc, &images),
        Commands::Draw { deck, format } => commands::draw::run(deck.as_deref(), format),
        Commands::Deck { deck, suit } => commands::deck::run(deck.as_deref(), suit.as_deref()),
        Commands::Show { name, deck } => commands::show::run(deck.as_deref(), &name),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
