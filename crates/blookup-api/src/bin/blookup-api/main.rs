use blookup::BlookupConfig;
use blookup::synset::InMemoryKnowledgeBase;
use blookup_api::{ApiConfig, AppState, build_app};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Blookup API Server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(short = 'H', long, env = "BLOOKUP_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "BLOOKUP_PORT", default_value_t = 3000)]
    port: u16,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "BLOOKUP_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Config file path; server and domain settings share one file
    #[arg(short, long, env = "BLOOKUP_CONFIG")]
    config_file: Option<PathBuf>,

    /// JSON dump to load the knowledge base from
    #[arg(short, long, env = "BLOOKUP_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// SPARQL endpoint for the linked-data helpers
    #[arg(long, env = "BLOOKUP_SPARQL_ENDPOINT")]
    sparql_endpoint: Option<String>,

    /// Budget for one upstream lookup, in milliseconds
    #[arg(long, env = "BLOOKUP_TIMEOUT_MS")]
    request_timeout_ms: Option<u64>,

    /// Disable Swagger UI
    #[arg(long, env = "BLOOKUP_DISABLE_SWAGGER", default_value_t = false)]
    disable_swagger: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let filter = format!("blookup_api={},tower_http=debug", cli.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; both types read the same file and ignore each
    // other's keys
    let (mut config, mut kb_config) = if let Some(config_path) = &cli.config_file {
        match (
            ApiConfig::load_from_file(config_path),
            BlookupConfig::load_from_file(config_path),
        ) {
            (Ok(api), Ok(kb)) => {
                info!("Configuration loaded from: {}", config_path.display());
                (api, kb)
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!(
                    "Failed to load config file: {}. Using default configuration.",
                    e
                );
                (ApiConfig::default(), BlookupConfig::default())
            }
        }
    } else {
        (ApiConfig::default(), BlookupConfig::default())
    };

    // Override with CLI options
    config.host = cli.host;
    config.port = cli.port;
    config.log_level = cli.log_level;
    config.enable_swagger = !cli.disable_swagger;
    if let Some(timeout_ms) = cli.request_timeout_ms {
        config.request_timeout_ms = timeout_ms;
    }
    if cli.data_file.is_some() {
        kb_config.data_file = cli.data_file;
    }
    if let Some(endpoint) = cli.sparql_endpoint {
        kb_config.sparql_endpoint = endpoint;
    }

    let addr = config.socket_addr()?;

    // Load the knowledge base
    let knowledge_base = match &kb_config.data_file {
        Some(path) => {
            let kb = InMemoryKnowledgeBase::load_from_file(path)?;
            info!(
                "Knowledge base loaded from {}: {} synsets",
                path.display(),
                kb.len()
            );
            kb
        }
        None => {
            warn!("No data file given; starting with an empty knowledge base");
            InMemoryKnowledgeBase::new()
        }
    };

    let state = AppState::new(Arc::new(knowledge_base), config.request_timeout());

    // Build application
    let app = build_app(state, config.enable_swagger);

    // Start server
    info!("Starting server on: {}", addr);
    if config.enable_swagger {
        info!("Swagger UI: http://{}/swagger-ui", addr);
    }
    info!("SPARQL endpoint: {}", kb_config.sparql_endpoint);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
