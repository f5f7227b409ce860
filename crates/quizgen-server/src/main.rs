use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use quizgen_core::player::load_deck;
use quizgen_llm::client::ChatClient;
use quizgen_llm::generator::Generator;
use quizgen_pdf::extract::PdfExtractor;
use quizgen_server::config::Config;
use quizgen_server::middleware::rate_limit::RateLimiter;
use quizgen_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    dotenv::dotenv().ok();

    let config = Config::parse();
    init_tracing(config.log_json);

    let client = config.chat_client_config().map(ChatClient::new).transpose()?;
    let generator = Generator::new(client);
    tracing::info!(
        llm_configured = generator.is_live(),
        model = %config.model,
        "OpenAI API {}",
        if generator.is_live() { "configured" } else { "not configured, serving mock questions" }
    );

    check_player_deck(&config.public_dir).await;

    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let limiter = RateLimiter::new(config.rate_limit_max, config.rate_limit_window())
        .trust_proxy(config.trust_proxy);

    let state = AppState {
        generator: Arc::new(generator),
        extractor: Arc::new(PdfExtractor),
        upload_dir: config.upload_dir.clone(),
        max_upload_bytes: config.max_upload_bytes,
        limiter,
    };

    let app = quizgen_server::router(state, &config.public_dir);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, public_dir = %config.public_dir.display(), "server listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Warn when the quiz player's deck is missing or malformed.
async fn check_player_deck(public_dir: &Path) {
    let path = public_dir.join("questions.json");

    match tokio::fs::read_to_string(&path).await {
        Ok(json) => match load_deck(&json) {
            Ok(deck) => tracing::info!(questions = deck.len(), "quiz player deck loaded"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "invalid quiz player deck"),
        },
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "quiz player deck not readable"),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
