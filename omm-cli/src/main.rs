//! OMM CLI - Command-line interface for the media catalog

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "omm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse chapter text and print its canonical form
    Chapter {
        /// Chapter text, e.g. "12", "3.4" or "3.1 ~ 3.9"
        #[arg(required = true)]
        chapters: Vec<String>,
    },

    /// Compare two strings in natural order
    Compare {
        /// Left string
        left: String,

        /// Right string
        right: String,
    },

    /// Sort a catalog file and organize its chapters
    Sort {
        /// Catalog file path
        catalog: PathBuf,
    },

    /// Display the entries of a catalog file
    Info {
        /// Catalog file path
        catalog: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mark chapters of an entry as liked or loved
    Mark {
        /// Catalog file path
        catalog: PathBuf,

        /// Title of the entry to edit
        #[arg(short, long)]
        title: String,

        /// Edit the loved chapters instead of the liked ones
        #[arg(long)]
        loved: bool,

        /// Remove the chapters instead of adding them
        #[arg(long)]
        remove: bool,

        /// Chapter text to add or remove
        #[arg(required = true)]
        chapters: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "omm_cli=debug,omm_core=debug"
    } else {
        "omm_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Chapter { chapters } => commands::chapter(&chapters),

        Commands::Compare { left, right } => commands::compare(&left, &right),

        Commands::Sort { catalog } => commands::sort(&catalog),

        Commands::Info { catalog, json } => commands::info(&catalog, json),

        Commands::Mark {
            catalog,
            title,
            loved,
            remove,
            chapters,
        } => commands::mark(&catalog, &title, loved, remove, &chapters),
    }
}
