use std::io::Read;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ccpos_db::PgPosStore;
use ccpos_import::{NodeFetcher, PosService, PosStore};
use ccpos_osm::OsmClient;

#[derive(Debug, Parser)]
#[command(name = "ccpos")]
#[command(about = "Campus POS import and management CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Import a POS from an OpenStreetMap node
    Import {
        /// OSM node ID, e.g. 240109189
        node_id: i64,
    },
    /// Create (no "id" field) or update ("id" set) a POS from a JSON document
    Upsert {
        /// Path to a JSON file; reads stdin when omitted
        #[arg(long)]
        file: Option<std::path::PathBuf>,
    },
    /// Show a single POS by ID
    Show { id: i64 },
    /// List all POS records
    List,
    /// Delete all POS records
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ccpos_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let pool_config = ccpos_db::PoolConfig::from_app_config(&config);
    let pool = ccpos_db::connect_pool(&config.database_url, pool_config).await?;
    ccpos_db::ping(&pool).await?;
    ccpos_db::run_migrations(&pool).await?;
    tracing::debug!("database pool ready, migrations applied");

    let fetcher = match config.osm_base_url.as_deref() {
        Some(base_url) => OsmClient::with_base_url(config.osm_request_timeout_secs, base_url)?,
        None => OsmClient::new(config.osm_request_timeout_secs)?,
    };
    let service = PosService::new(fetcher, PgPosStore::new(pool));

    run_command(cli.command, &service).await
}

async fn run_command<F: NodeFetcher, S: PosStore>(
    command: Commands,
    service: &PosService<F, S>,
) -> anyhow::Result<()> {
    match command {
        Commands::Import { node_id } => {
            let pos = service.import_from_osm_node(node_id).await?;
            print_json(&pos)
        }
        Commands::Upsert { file } => {
            let raw = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let pos: ccpos_core::Pos = serde_json::from_str(&raw)?;
            let saved = service.upsert(pos).await?;
            print_json(&saved)
        }
        Commands::Show { id } => print_json(&service.get_by_id(id).await?),
        Commands::List => print_json(&service.get_all().await?),
        Commands::Clear => {
            service.clear().await?;
            println!("all POS records deleted");
            Ok(())
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
