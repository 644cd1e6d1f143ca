mod bank;
mod config;
mod core;
mod db;
mod error;
mod http;
mod scoring;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::bank::QuestionBank;
use crate::config::Config;
use crate::db::SharedDatabase;
use crate::http::AppState;
use crate::scoring::ScoreEngine;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("leadscope=info".parse()?))
        .init();

    info!("Leadscope starting...");

    // Load configuration
    let config = Config::load("config.toml");
    info!("Config: {:?}", config);

    // Open the response log database
    let db_path = Path::new(&config.database.path);
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db = SharedDatabase::open(db_path)?;
    info!("Response log opened at {}", config.database.path);

    // Load the question bank once; refuse to serve without it
    let bank = Arc::new(QuestionBank::load(&config.bank).await?);
    info!(
        "Question bank loaded: {} questions across {} styles",
        bank.len(),
        bank.styles().len()
    );

    let engine = ScoreEngine::new(&config.scoring);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let state = AppState {
        config,
        bank,
        engine,
        db,
    };
    let app = http::create_router(state);

    info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
