use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use wordbank_config::Config;
use wordbank_core::Dataset;
use wordbank_loader::{FileSource, HttpSource, VocabSource};

use crate::render;

#[derive(Parser)]
#[command(name = "wordbank", about = "Browse and search a vocabulary word list")]
pub struct Cli {
    /// Path or URL of the vocabulary file (overrides WORDBANK_SOURCE)
    #[arg(long, global = true)]
    pub source: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available lessons
    Lessons,
    /// Show every entry in one lesson
    Lesson { id: String },
    /// Find entries containing a term, case-insensitive
    Search { term: String },
    /// Bounded suggestions for a partially typed term
    Suggest {
        term: String,
        /// Maximum number of suggestions
        #[arg(long)]
        limit: Option<usize>,
    },
}

pub async fn run(args: Cli, config: Config) -> anyhow::Result<()> {
    let spec = args.source.unwrap_or_else(|| config.source.clone());
    let dataset = load_dataset(&spec, &config).await?;

    match args.command {
        Commands::Lessons => {
            for lesson in dataset.distinct_lessons() {
                println!("{lesson}");
            }
        }
        Commands::Lesson { id } => {
            let records = dataset.by_lesson(&id);
            if records.is_empty() {
                println!("no entries for lesson {id}");
            } else {
                render::print_entries(&dataset, &records);
            }
        }
        Commands::Search { term } => {
            render::print_entries(&dataset, &dataset.search(&term));
        }
        Commands::Suggest { term, limit } => {
            let limit = limit.unwrap_or(config.suggest_limit);
            for record in dataset.suggest(&term, limit) {
                render::print_suggestion(dataset.entry(record));
            }
        }
    }

    Ok(())
}

async fn load_dataset(spec: &str, config: &Config) -> anyhow::Result<Dataset> {
    let source: Box<dyn VocabSource> =
        if spec.starts_with("http://") || spec.starts_with("https://") {
            let client = reqwest::Client::builder()
                .timeout(Duration::from_millis(config.http_timeout_ms))
                .build()
                .context("failed to build HTTP client")?;
            Box::new(HttpSource::with_client(spec, client))
        } else {
            Box::new(FileSource::new(spec))
        };

    wordbank_loader::load(source.as_ref())
        .await
        .with_context(|| format!("failed to load vocabulary from {spec}"))
}
