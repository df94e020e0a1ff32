use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use termcolor::{ColorChoice, StandardStream};
use tracing::{debug, warn};

use fleetdex::index::{
    Car, SearchableDocument, User, generate_search_keywords_from_fields, read_documents,
    reindex_documents, write_documents,
};
use fleetdex::output;
use fleetdex::query::{MemoryStore, QueryTermSet};
use fleetdex::utils::{self, AppConfig, ReindexProgress};

#[derive(Parser)]
#[command(name = "fleetdex")]
#[command(about = "Keyword indexing for prefix and token search over document stores")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to config.json in the app data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// When to use colors
    #[arg(long, global = true, value_enum, default_value_t = ColorWhen::Auto)]
    color: ColorWhen,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the search keywords generated for field values
    Keywords {
        /// One argument per field; "-" marks an absent field
        values: Vec<String>,

        /// Output a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Print the filter terms prepared for a search string
    Terms {
        /// Search string
        #[arg(required = true)]
        query: Vec<String>,

        /// Output a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Regenerate the search keywords of every document in a JSON file
    Reindex {
        /// JSON array of documents
        file: PathBuf,

        /// Document type
        #[arg(short, long, value_enum)]
        kind: DocumentKind,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Process documents on a single thread
        #[arg(long)]
        sequential: bool,
    },
    /// Search an indexed JSON file using its stored keywords
    Search {
        /// JSON array of indexed documents
        file: PathBuf,

        /// Search string
        #[arg(required = true)]
        query: Vec<String>,

        /// Document type
        #[arg(short, long, value_enum)]
        kind: DocumentKind,

        /// Maximum number of documents to return
        #[arg(short = 'n', long, default_value_t = 20)]
        limit: usize,

        /// Output matching documents as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the config path and effective configuration
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum DocumentKind {
    Car,
    User,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorChoice {
    fn from(when: ColorWhen) -> Self {
        match when {
            ColorWhen::Auto => ColorChoice::Auto,
            ColorWhen::Always => ColorChoice::Always,
            ColorWhen::Never => ColorChoice::Never,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    utils::logging::init(cli.verbose, config.log_level.as_deref());
    debug!(?config, "loaded configuration");

    let mut stdout = StandardStream::stdout(cli.color.into());

    match cli.command {
        Commands::Keywords { values, json } => {
            let fields: Vec<Option<&str>> = values
                .iter()
                .map(|v| if v == "-" { None } else { Some(v.as_str()) })
                .collect();
            let keywords = generate_search_keywords_from_fields(&fields);

            if json {
                output::print_json(&mut stdout, &keywords)?;
            } else {
                output::print_keywords(&mut stdout, &keywords)?;
            }
        }
        Commands::Terms { query, json } => {
            let query = query.join(" ");
            let terms = QueryTermSet::with_limit(&query, config.effective_query_term_limit());

            if json {
                output::print_json(&mut stdout, terms.as_slice())?;
            } else {
                output::print_terms(&mut stdout, terms.as_slice(), terms.dropped())?;
            }
        }
        Commands::Reindex {
            file,
            kind,
            output,
            sequential,
        } => {
            let parallel = config.parallel_reindex && !sequential;
            match kind {
                DocumentKind::Car => reindex::<Car>(&file, output.as_deref(), parallel)?,
                DocumentKind::User => reindex::<User>(&file, output.as_deref(), parallel)?,
            }
        }
        Commands::Search {
            file,
            query,
            kind,
            limit,
            json,
        } => {
            let query = query.join(" ");
            let term_limit = config.effective_query_term_limit();
            match kind {
                DocumentKind::Car => {
                    search::<Car>(&mut stdout, &file, &query, term_limit, limit, json)?
                }
                DocumentKind::User => {
                    search::<User>(&mut stdout, &file, &query, term_limit, limit, json)?
                }
            }
        }
        Commands::Config => {
            match &cli.config {
                Some(path) => println!("Config file: {}", path.display()),
                None => println!("Config file: {}", utils::get_config_path()?.display()),
            }
            println!("  Query term limit: {}", config.effective_query_term_limit());
            println!("  Parallel reindex: {}", config.parallel_reindex);
            println!(
                "  Log level: {}",
                config.log_level.as_deref().unwrap_or("warn (default)")
            );
        }
    }

    Ok(())
}

fn reindex<D: SearchableDocument>(file: &Path, output: Option<&Path>, parallel: bool) -> Result<()> {
    let documents = read_documents::<D>(file)?;
    let progress = ReindexProgress::new(documents.len() as u64, output.is_some());
    let (documents, stats) = reindex_documents(documents, parallel, &progress);

    match output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_documents(BufWriter::new(out), &documents)?;
            eprintln!(
                "Reindexed {} documents ({} changed, {} keywords) -> {}",
                stats.documents,
                stats.changed,
                stats.keywords,
                path.display()
            );
        }
        None => write_documents(io::stdout().lock(), &documents)?,
    }
    Ok(())
}

fn search<D: SearchableDocument>(
    stdout: &mut StandardStream,
    file: &Path,
    query: &str,
    term_limit: usize,
    limit: usize,
    json: bool,
) -> Result<()> {
    let mut store = MemoryStore::<D>::new();
    for document in read_documents::<D>(file)? {
        if document.search_keywords().is_empty() {
            warn!(id = document.document().id(), "document has no search keywords; run reindex");
        }
        store.insert_indexed(document);
    }

    let terms = QueryTermSet::with_limit(query, term_limit);
    let hits = store.search_any(terms.as_slice(), limit)?;

    if json {
        output::print_json(stdout, &hits)?;
    } else {
        output::print_hits(stdout, &hits, terms.as_slice())?;
    }
    Ok(())
}
