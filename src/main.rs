// src/main.rs

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use recipe_book::{DuplicatePolicy, Error, LoadOptions, RecipeBook, ingest};
use tracing::info;

#[derive(Parser)]
#[command(name = "recipe-book")]
#[command(author, version, about = "Query a recipe book loaded from a CSV file", long_about = None)]
struct Cli {
    /// CSV file: name,difficulty_level,description,mastered
    file: PathBuf,

    /// Rebalance the tree after loading
    #[arg(short, long)]
    balance: bool,

    /// Fail on the first duplicate name instead of skipping it
    #[arg(long)]
    strict: bool,

    /// The first line is data, not a header
    #[arg(long)]
    no_header: bool,

    /// Field separator
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every recipe in pre-order
    Show,
    /// Print a single recipe
    Find {
        /// Recipe name
        name: String,
    },
    /// Points needed before a recipe can be mastered
    Mastery {
        /// Recipe name
        name: String,
    },
    /// Size and shape of the tree
    Stats,
}

impl Cli {
    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            has_header: !self.no_header,
            delimiter: self.delimiter,
            duplicates: if self.strict {
                DuplicatePolicy::Reject
            } else {
                DuplicatePolicy::Skip
            },
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so `show` output stays pipeable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut book = ingest::load_path(&cli.file, &cli.load_options())
        .with_context(|| format!("failed to load {}", cli.file.display()))?;

    if cli.balance {
        book.balance();
    }

    run(&book, &cli.command)
}

fn run(book: &RecipeBook, command: &Commands) -> Result<()> {
    match command {
        Commands::Show => {
            book.preorder_display_stdout()?;
        }
        Commands::Find { name } => {
            let recipe = book.require(name)?;
            print!("{recipe}");
        }
        Commands::Mastery { name } => {
            let points = book
                .calculate_mastery_points(name)
                .ok_or_else(|| Error::NotFound(name.clone()))?;
            info!(name = %name, points, "computed mastery points");
            println!("{points}");
        }
        Commands::Stats => {
            println!("Recipes: {}", book.len());
            println!("Height: {}", book.height());
            println!("Balanced: {}", if book.is_balanced() { "yes" } else { "no" });
        }
    }
    Ok(())
}
