//! Hangman web server.
//!
//! Loads the word catalog, then serves rounds over HTTP with the round
//! state held in a signed cookie.

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::{Context, Error};
use hangman::{
    Engine,
    catalog::{SeededRandom, WordCatalog},
    scores::JsonFileStore,
    session::SessionCodec,
};
use hm_server::{api, config::ServerConfig, logging, metrics};
use pico_args::Arguments;
use tracing::{error, info};

const HELP: &str = "\
Run a hangman web server

USAGE:
  hm_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:8080]
  --words      PATH        Word file                   [default: env WORDS_FILE or words/words.txt]
  --scores     PATH        Leaderboard JSON file       [default: env SCORES_FILE or scores/scores.json]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SESSION_SECRET           Round cookie signing secret (required, 32+ characters)
  SESSION_TTL_HOURS        Round cookie lifetime        [default: 24]
  DEFAULT_DIFFICULTY       Fallback difficulty          [default: facile]
  STATIC_DIR               Static asset directory       [default: static]
  METRICS_BIND             Prometheus exporter address  [default: disabled]
  (See .env.example for all configuration options)
";

struct Args {
    bind: Option<SocketAddr>,
    words: Option<PathBuf>,
    scores: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        bind: pargs.opt_value_from_str("--bind")?,
        words: pargs.opt_value_from_str("--words")?,
        scores: pargs.opt_value_from_str("--scores")?,
    };

    let config = ServerConfig::from_env(args.bind, args.words, args.scores)?;
    config.validate()?;

    logging::init();
    info!("Starting hangman server at {}", config.bind);

    if let Some(metrics_bind) = config.metrics_bind {
        metrics::init_metrics(metrics_bind).map_err(Error::msg)?;
        info!("Prometheus metrics exported on {}", metrics_bind);
    }

    let catalog = WordCatalog::load(&config.game.words_file)
        .await
        .context("Failed to load word catalog")?;
    let engine = Engine::new(catalog, &config.game.default_difficulty, SeededRandom::new())
        .context("Word catalog is unusable")?;

    for difficulty in engine.catalog().difficulties() {
        info!(
            "  - {} ({} words)",
            difficulty,
            engine.catalog().words_for(difficulty).len()
        );
    }

    let codec = SessionCodec::with_ttl(
        &config.session.secret,
        chrono::Duration::hours(config.session.ttl_hours),
    );
    let scores = JsonFileStore::new(&config.game.scores_file);
    info!("Leaderboard stored in {}", scores.path().display());

    let api_state = api::AppState {
        engine: Arc::new(engine),
        codec: Arc::new(codec),
        scores: Arc::new(scores),
        static_dir: config.static_dir.clone(),
    };

    let app = api::create_router(api_state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
