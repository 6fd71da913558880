//! Command line interface
//!
//! | Command | Operation |
//! |---------|-----------|
//! | `similar` | Top-K nearest items, optionally with distances |
//! | `within` | Every item closer than a threshold |
//! | `filtered` | Top-K nearest items by category and/or price |
//! | `compare` | Top-K by L2 with all four distances |
//! | `get`, `list`, `stats` | Catalog lookups, `list --max-price` under a price ceiling |
//! | `add`, `delete` | Catalog changes |
//! | `init-schema` | Create the extension and the items table |
//! | `health` | Check the storage connection |
//! | `config` | Print the effective configuration |

use crate::infrastructure::bootstrap::{Services, build_services};
use crate::infrastructure::config::{AppConfig, ConfigLoader, SearchConfig};
use crate::infrastructure::health::check_executor;
use crate::infrastructure::logging::init_logging;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::{Value, json};
use std::path::PathBuf;
use tracing::error;
use vsim_domain::error::{Error, Result};
use vsim_domain::{DistanceMetric, Item, Price, QueryVector, SearchFilters};

/// Command line interface for vsim
#[derive(Parser, Debug)]
#[command(name = "vsim")]
#[command(about = "vsim - Vector similarity search over PostgreSQL/pgvector")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Query vector and metric shared by the search commands
#[derive(Args, Debug, Clone, PartialEq)]
pub struct QueryArgs {
    /// Query vector, e.g. "[1.0,0.5,0.2,0.1]"
    #[arg(short, long)]
    pub vector: String,

    /// Distance metric: l2, cosine, inner_product, l1 (default from config)
    #[arg(short, long)]
    pub metric: Option<DistanceMetric>,
}

/// vsim commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Nearest items to a vector
    Similar {
        #[command(flatten)]
        query: QueryArgs,
        /// Maximum number of results (default from config)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Include the distance of each result
        #[arg(long)]
        with_distance: bool,
    },
    /// Every item strictly closer than a threshold
    Within {
        #[command(flatten)]
        query: QueryArgs,
        /// Distance threshold (may be negative for inner product)
        #[arg(short, long, allow_hyphen_values = true)]
        threshold: f64,
    },
    /// Nearest items passing category and price filters
    Filtered {
        #[command(flatten)]
        query: QueryArgs,
        /// Maximum number of results (default from config)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Category to match exactly
        #[arg(long)]
        category: Option<String>,
        /// Lowest price, inclusive
        #[arg(long)]
        min_price: Option<Price>,
        /// Highest price; exclusive alone, inclusive with --min-price
        #[arg(long)]
        max_price: Option<Price>,
    },
    /// Nearest items by L2 with all four distances
    Compare {
        /// Query vector, e.g. "[1.0,0.5,0.2,0.1]"
        #[arg(short, long)]
        vector: String,
        /// Maximum number of results (default from config)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// One item by id
    Get {
        /// Item id
        id: i64,
    },
    /// Every item, the items of one category, or the items under a price
    List {
        /// Category to match exactly
        #[arg(long, conflicts_with = "max_price")]
        category: Option<String>,
        /// Price ceiling, exclusive
        #[arg(long)]
        max_price: Option<Price>,
    },
    /// Item count per category
    Stats,
    /// Insert an item, or update it when --id is given
    Add {
        /// Id of the item to update
        #[arg(long)]
        id: Option<i64>,
        /// Item name
        #[arg(long)]
        name: String,
        /// Item category
        #[arg(long)]
        category: Option<String>,
        /// Item price, e.g. 3.50
        #[arg(long)]
        price: Option<Price>,
        /// Item embedding, e.g. "[1.0,0.5,0.2,0.1]"
        #[arg(long)]
        embedding: Option<String>,
    },
    /// Delete an item
    Delete {
        /// Item id
        id: i64,
    },
    /// Create the pgvector extension and the items table
    InitSchema,
    /// Check the storage connection
    Health,
    /// Print the effective configuration (password redacted)
    Config,
}

/// Run a parsed command line
pub async fn run(cli: Cli) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    if cli.command == Command::Config {
        println!("{}", render_config(&config)?);
        return Ok(());
    }

    let services = build_services(&config).await?;

    if cli.command == Command::Health {
        let check = check_executor(services.executor.as_ref()).await;
        println!("{}", serde_json::to_string_pretty(&check)?);
        if !check.status.is_healthy() {
            return Err(Error::storage("Health check failed").into());
        }
        return Ok(());
    }

    match execute(&cli.command, &services, &config.search).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, caller_error = e.is_caller_error(), "Command failed");
            Err(e.into())
        }
    }
}

/// Configuration as TOML with the database password redacted
pub fn render_config(config: &AppConfig) -> Result<String> {
    let mut shown = config.clone();
    shown.database.url = config.database.redacted_url();
    ConfigLoader::to_toml_string(&shown)
}

/// Execute a data command against `services`, returning its JSON output
///
/// `Health` and `Config` are answered by [`run`] and rejected here.
pub async fn execute(command: &Command, services: &Services, defaults: &SearchConfig) -> Result<Value> {
    let metric = |query: &QueryArgs| query.metric.unwrap_or(defaults.default_metric);
    let limit = |limit: &Option<usize>| limit.unwrap_or(defaults.default_limit);

    match command {
        Command::Similar {
            query,
            limit: k,
            with_distance: true,
        } => to_json(
            &services
                .similarity
                .find_similar_with_distance(metric(query), &query.vector, limit(k))
                .await?,
        ),
        Command::Similar {
            query,
            limit: k,
            with_distance: false,
        } => to_json(
            &services
                .similarity
                .find_similar(metric(query), &query.vector, limit(k))
                .await?,
        ),
        Command::Within { query, threshold } => to_json(
            &services
                .similarity
                .find_within_threshold(metric(query), &query.vector, *threshold)
                .await?,
        ),
        Command::Filtered {
            query,
            limit: k,
            category,
            min_price,
            max_price,
        } => {
            let filters = SearchFilters {
                category: category.clone(),
                min_price: *min_price,
                max_price: *max_price,
            };
            to_json(
                &services
                    .similarity
                    .find_similar_filtered(metric(query), &query.vector, limit(k), &filters)
                    .await?,
            )
        }
        Command::Compare { vector, limit: k } => to_json(
            &services
                .similarity
                .compare_all_metrics(vector, limit(k))
                .await?,
        ),
        Command::Get { id } => match services.catalog.find_by_id(*id).await? {
            Some(item) => to_json(&item),
            None => Err(Error::not_found(format!("item {id}"))),
        },
        Command::List {
            category: Some(category),
            ..
        } => to_json(&services.catalog.find_by_category(category).await?),
        Command::List {
            max_price: Some(max_price),
            ..
        } => to_json(&services.catalog.find_under_price(*max_price).await?),
        Command::List { .. } => to_json(&services.catalog.find_all().await?),
        Command::Stats => to_json(&services.catalog.count_by_category().await?),
        Command::Add {
            id,
            name,
            category,
            price,
            embedding,
        } => {
            let embedding = embedding
                .as_deref()
                .map(QueryVector::parse)
                .transpose()?
                .map(Vec::from);
            let mut item = Item::new(name.as_str(), category.as_deref(), *price, embedding);
            item.id = *id;
            to_json(&services.catalog.save(&item).await?)
        }
        Command::Delete { id } => {
            let deleted = services.catalog.delete(*id).await?;
            Ok(json!({ "id": id, "deleted": deleted }))
        }
        Command::InitSchema => {
            services.catalog.ensure_schema().await?;
            Ok(json!({ "schema": "ready" }))
        }
        Command::Health | Command::Config => Err(Error::internal(format!(
            "{command:?} is not a data command"
        ))),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| Error::internal(format!("Failed to serialize output: {e}")))
}
