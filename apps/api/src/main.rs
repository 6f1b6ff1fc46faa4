mod ats;
mod config;
mod errors;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ats::extract::DocumentTextExtractor;
use crate::ats::lexicon::Lexicon;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS score API v{}", env!("CARGO_PKG_VERSION"));

    // Stopwords are ready before the listener binds; a bad file only degrades to the built-in list.
    let lexicon = Arc::new(Lexicon::load(config.stopwords_path.as_deref()));

    let extractor = Arc::new(DocumentTextExtractor::new(config.upload_tmp_dir.clone()));
    info!("PDF uploads staged in {}", config.upload_tmp_dir.display());

    let state = AppState::new(lexicon, extractor);

    let app = build_router(state, config.max_upload_bytes);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
