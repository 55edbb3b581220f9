//! `todowebd` — the TodoWeb server binary.
//!
//! Usage:
//!   todowebd [--data-dir <dir>] [--db <path>] [--listen <addr>]
//!
//! The task store lives in a single redb file, `{data_dir}/data.redb`
//! unless overridden with `--db`.

mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use todoweb_core::Module;
use tracing::info;

/// TodoWeb server.
#[derive(Parser, Debug)]
#[command(name = "todowebd", about = "TodoWeb task server")]
struct Cli {
    /// Directory holding all service data.
    #[arg(long = "data-dir")]
    data_dir: Option<PathBuf>,

    /// Path to the redb database file (overrides `{data_dir}/data.redb`).
    #[arg(long = "db")]
    db: Option<PathBuf>,

    /// Listen address.
    #[arg(long = "listen", default_value = "0.0.0.0:8080")]
    listen: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = todoweb_core::ServiceConfig {
        data_dir: cli.data_dir,
        db_path: cli.db,
        listen: cli.listen,
    };

    if let Some(dir) = &config.data_dir {
        std::fs::create_dir_all(dir)?;
    }

    // Initialize the embedded store.
    let db_path = config.resolve_db_path();
    info!("Opening task store at {}", db_path.display());
    let kv: Arc<dyn todoweb_kv::KVStore> = Arc::new(
        todoweb_kv::RedbStore::open(&db_path)
            .map_err(|e| anyhow::anyhow!("failed to open KV store: {}", e))?,
    );

    let task_module = todoweb_task::TaskModule::new(Arc::clone(&kv))
        .map_err(|e| anyhow::anyhow!("failed to initialise task module: {}", e))?;
    info!("Task module initialized");

    let module_routes = vec![(task_module.name(), task_module.routes())];

    // Build router.
    let app = routes::build_router(module_routes);

    // Start server.
    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    info!("TodoWeb server listening on {}", config.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
