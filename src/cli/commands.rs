use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::{
    DEFAULT_DOCS_DIR, DEFAULT_MAX_CONTENT_CHARS, DEFAULT_OUTPUT_FILENAME, IndexConfig,
};
use crate::index_storage::{load_index, save_index};
use crate::indexer::build_index;
use crate::models::IndexStats;

#[derive(Parser)]
#[command(name = "docs-search-index")]
#[command(version = "0.1.0")]
#[command(about = "Generate a JSON search index from markdown documentation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the search index from the documentation tree
    Build(BuildArgs),
    /// Show statistics about an existing search index
    Stats(StatsArgs),
}

/// Where the documentation lives and what the index file is called
#[derive(Args)]
pub struct LocationArgs {
    /// Root directory of the markdown documentation
    #[arg(long, env = "DOCS_SEARCH_DOCS_DIR", default_value = DEFAULT_DOCS_DIR)]
    pub docs_dir: PathBuf,

    /// File name of the index, written inside the docs directory
    #[arg(long, env = "DOCS_SEARCH_OUTPUT", default_value = DEFAULT_OUTPUT_FILENAME)]
    pub output: String,

    /// Maximum excerpt length in characters
    #[arg(long, env = "DOCS_SEARCH_MAX_CONTENT_CHARS", default_value_t = DEFAULT_MAX_CONTENT_CHARS)]
    pub max_content_chars: usize,
}

#[derive(Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub location: LocationArgs,

    /// Prefix for every generated URL, e.g. /my-project
    #[arg(long, env = "DOCS_SEARCH_BASE_URL", default_value = "")]
    pub base_url: String,

    /// File names to leave out of the index (default: README.md); pass '' to keep all
    #[arg(long, env = "DOCS_SEARCH_EXCLUDE", value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,
}

#[derive(Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub location: LocationArgs,
}

impl LocationArgs {
    fn to_config(&self) -> IndexConfig {
        IndexConfig::new(&self.docs_dir)
            .with_output_filename(&self.output)
            .with_max_content_chars(self.max_content_chars)
    }
}

impl BuildArgs {
    pub fn to_config(&self) -> IndexConfig {
        let config = self.location.to_config().with_base_url(&self.base_url);
        match &self.exclude {
            Some(names) => {
                let names = names.iter().filter(|name| !name.is_empty()).cloned();
                config.with_excluded_filenames(names)
            }
            None => config,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Build(args)) => {
            build(&args.to_config())?;
        }
        Some(Commands::Stats(args)) => {
            show_stats(&args.location.to_config())?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn build(config: &IndexConfig) -> Result<()> {
    println!("Generating search index...");

    let index = build_index(config)?;
    let output_path = config.output_path();
    save_index(&output_path, &index)?;

    println!("Generated search index with {} documents", index.len());
    println!("Saved to {}", output_path.display());

    Ok(())
}

fn show_stats(config: &IndexConfig) -> Result<()> {
    let output_path = config.output_path();
    let index = load_index(&output_path)?;
    let stats = IndexStats::from_records(&index, config.max_content_chars);

    println!("Search Index Statistics");
    println!("=======================");
    println!("Index file: {}", output_path.display());
    println!("Documents: {}", stats.documents);
    println!("  Unique URLs: {}", stats.unique_urls);
    println!("  Duplicate URLs: {}", stats.duplicate_urls);
    println!("Truncated excerpts: {}", stats.truncated);
    println!("Average excerpt length: {:.1} characters", stats.average_content_chars);

    Ok(())
}
