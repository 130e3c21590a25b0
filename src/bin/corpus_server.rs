//! Corpus API REST server
//!
//! ## Usage
//!
//! ```bash
//! # Start the server (reads .env if present)
//! DATABASE_URL=postgresql://postgres@localhost/korpus cargo run --bin corpus_server
//!
//! # Or compose the URL from parts
//! DB_HOST=localhost DB_NAME=korpus DB_USER=reader DB_PASSWORD=secret cargo run --bin corpus_server
//!
//! curl http://localhost:8000/lemmas?lang_prefix=SERB&page_size=5
//! curl http://localhost:8000/lemmas/42/concept
//! ```

use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use corpus_api::api::build_app;
use corpus_api::database::{DatabaseConfig, DatabaseManager};
use corpus_api::LexiconService;

#[derive(Debug, Parser)]
#[command(name = "corpus_server", about = "Read-only HTTP API over the lexical corpus")]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "CORPUS_BIND_ADDR", default_value = "0.0.0.0:8000")]
    bind: String,

    /// Postgres URL; composed from DB_HOST/DB_PORT/DB_NAME/DB_USER/DB_PASSWORD when unset
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, env = "DATABASE_POOL_SIZE")]
    max_connections: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,corpus_api=debug,tower_http=debug".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = DatabaseConfig::default();
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }
    if let Some(max) = cli.max_connections {
        config.max_connections = max;
    }

    let db = DatabaseManager::new(config).await?;
    db.test_connection().await?;

    let service = LexiconService::new(Arc::new(db.corpus_store()));
    let app = build_app(service);

    let listener = TcpListener::bind(&cli.bind).await?;
    info!("corpus_server listening on {}", cli.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
