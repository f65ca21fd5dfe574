use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use newsdigest::articles::load::{load_articles, sample_articles};
use newsdigest::articles::models::{Article, Category};
use newsdigest::config::Config;
use newsdigest::digest::Digest;
use newsdigest::lexicon::Lexicon;
use newsdigest::output::terminal;
use newsdigest::pipeline::filter::{FilterOptions, FilterPipeline};

/// newsdigest: rank, tag and deduplicate a batch of news articles.
///
/// Scores every article for relevance to its category, classifies its
/// sentiment, collapses near-duplicate stories and prints the result.
#[derive(Parser)]
#[command(name = "newsdigest", version, about)]
struct Cli {
    /// JSON article list (defaults to NEWSDIGEST_INPUT, then the bundled sample set)
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// JSON lexicon override (defaults to NEWSDIGEST_LEXICON, then the built-in lexicon)
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter, score and rank articles
    Run {
        #[command(flatten)]
        filters: FilterArgs,

        /// Print the ranked articles as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the pipeline and compile a sectioned digest
    Digest {
        #[command(flatten)]
        filters: FilterArgs,

        /// Print the digest as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the active lexicon
    Lexicon,
}

#[derive(Args)]
struct FilterArgs {
    /// Keep articles mentioning this keyword (repeatable, any match keeps)
    #[arg(long = "keyword", short = 'k')]
    keywords: Vec<String>,

    /// Keep articles in this category (repeatable)
    #[arg(long = "category", short = 'c', value_enum)]
    categories: Vec<Category>,

    /// Keep articles from this source (repeatable, exact name)
    #[arg(long = "source", short = 's')]
    sources: Vec<String>,

    /// Skip duplicate removal
    #[arg(long)]
    no_dedup: bool,
}

impl FilterArgs {
    fn into_options(self) -> FilterOptions {
        FilterOptions {
            keywords: self.keywords,
            categories: self.categories,
            sources: self.sources,
            dedup: !self.no_dedup,
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("newsdigest=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let lexicon = match cli.lexicon.as_ref().or(config.lexicon_path.as_ref()) {
        Some(path) => {
            info!(path = %path.display(), "Using lexicon override");
            Lexicon::from_path(path)?
        }
        None => Lexicon::default(),
    };

    match cli.command {
        Commands::Run { filters, json } => {
            let mut articles = load_input(cli.input.as_ref().or(config.input_path.as_ref()))?;
            let pipeline = FilterPipeline::new(&lexicon);
            let output = pipeline.run(&mut articles, &filters.into_options());

            if json {
                println!("{}", serde_json::to_string_pretty(&output.articles)?);
            } else {
                terminal::display_ranked(&output);
                terminal::display_statistics(&output);
            }
        }

        Commands::Digest { filters, json } => {
            let mut articles = load_input(cli.input.as_ref().or(config.input_path.as_ref()))?;
            let pipeline = FilterPipeline::new(&lexicon);
            let output = pipeline.run(&mut articles, &filters.into_options());

            let today = chrono::Local::now().date_naive();
            let digest = Digest::compile(&output.articles, &config.digest_settings(), today);

            if json {
                println!("{}", serde_json::to_string_pretty(&digest)?);
            } else {
                terminal::display_digest(&digest);
                terminal::display_statistics(&output);
                println!(
                    "\nDigest compiled with {} sections, {} articles included.",
                    digest.sections.len(),
                    digest.included_articles()
                );
            }
        }

        Commands::Lexicon => {
            terminal::display_lexicon(&lexicon);
        }
    }

    Ok(())
}

/// Read the configured article file, or fall back to the bundled sample set.
fn load_input(path: Option<&PathBuf>) -> Result<Vec<Article>> {
    match path {
        Some(path) => load_articles(path),
        None => {
            let articles = sample_articles()?;
            info!(count = articles.len(), "Using bundled sample articles");
            Ok(articles)
        }
    }
}
