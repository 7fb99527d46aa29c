use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rsearch_client::{ClientOptions, SearchClient};
use rsearch_core::config::Config;
use rsearch_core::types::{QueryRequest, SchemaField};
use rsearch_redis::RedisEngine;

#[derive(Parser)]
#[command(name = "rsearch")]
#[command(about = "Create, fill and query RediSearch indexes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Redis URL (overrides redis.url from config)
    #[arg(long, global = true)]
    redis_url: Option<String>,

    /// Directory holding config.toml
    #[arg(long, global = true, default_value = ".")]
    config_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether an index exists
    Exists { index: String },
    /// Create an index; fields are given as name:ATTR,ATTR (e.g. title:TEXT,SORTABLE)
    Create {
        index: String,
        #[arg(required = true)]
        fields: Vec<String>,
    },
    /// Search an index
    Search {
        index: String,
        /// Query terms, passed to the engine in order (put terms starting with '-' after `--`)
        #[arg(required = true)]
        terms: Vec<String>,
        /// Wrap matched terms in highlight tags
        #[arg(long)]
        highlight: bool,
        /// Do not ask the engine for scores
        #[arg(long)]
        no_scores: bool,
    },
    /// Add a document from raw FT.ADD tokens (index, id, score, FIELDS, ...)
    Add {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        tokens: Vec<String>,
    },
}

fn parse_schema_field(spec: &str) -> Result<SchemaField> {
    let (name, attrs) = spec.split_once(':').unwrap_or((spec, ""));
    if name.trim().is_empty() {
        anyhow::bail!("field '{}' has no name", spec);
    }
    let attributes = attrs.split(',').map(str::trim).filter(|a| !a.is_empty());
    Ok(SchemaField::new(name.trim(), attributes))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "rsearch=info,rsearch_client=info,rsearch_redis=info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load_from(&cli.config_dir).map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let settings = config.settings()?;
    let url = cli.redis_url.unwrap_or(settings.redis.url.clone());
    let options = ClientOptions::from(&settings.search);
    tracing::debug!(%url, ?options, "connecting");
    let client = SearchClient::new(RedisEngine::connect(&url).await?, options.clone());

    match cli.command {
        Commands::Exists { index } => {
            println!("{}", client.check_index_exists(&index).await);
        }
        Commands::Create { index, fields } => {
            let schema = fields.iter().map(|f| parse_schema_field(f)).collect::<Result<Vec<_>>>()?;
            client.create_index(&index, &schema).await?;
            println!("Created index {}", index);
        }
        Commands::Search { index, terms, highlight, no_scores } => {
            let request = QueryRequest {
                index_key: index,
                terms,
                with_scores: options.with_scores && !no_scores,
                highlight: options.highlight || highlight,
            };
            let result = client.search_request(&request).await;
            if let Some(e) = result.error {
                println!("{}", serde_json::json!({ "error": e.to_string() }));
                anyhow::bail!(e);
            }
            let out = serde_json::json!({ "total_count": result.total_count, "records": result.records });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Commands::Add { tokens } => {
            let echoed = client.add_document(tokens).await?;
            println!("{}", serde_json::to_string(&echoed)?);
        }
    }
    Ok(())
}
