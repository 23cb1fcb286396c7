//! DREAMTEAM — five-a-side team selection engine
//!
//! Entry point. Loads configuration, initialises structured logging,
//! loads the roster, and serves the team builder dashboard until Ctrl+C.

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use dreamteam::config;
use dreamteam::dashboard::{self, DashboardState};
use dreamteam::roster::{FileRosterSource, RosterCatalog};
use dreamteam::types::MAX_TEAM_SIZE;

const BANNER: &str = r#"
 ____  ____  _____    _    __  __ _____ _____    _    __  __
|  _ \|  _ \| ____|  / \  |  \/  |_   _| ____|  / \  |  \/  |
| | | | |_) |  _|   / _ \ | |\/| | | | |  _|   / _ \ | |\/| |
| |_| |  _ <| |___ / ___ \| |  | | | | | |___ / ___ \| |  | |
|____/|_| \_\_____/_/   \_\_|  |_| |_| |_____/_/   \_\_|  |_|

  Five-a-side team builder
  v0.1.0
"#;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let cfg = config::AppConfig::load("config.toml")?;

    init_logging();

    println!("{BANNER}");
    info!(
        app_name = %cfg.app.name,
        roster = %cfg.roster.path,
        team_size = MAX_TEAM_SIZE,
        notice_ttl_secs = cfg.notices.ttl_secs,
        "DREAMTEAM starting up"
    );

    // -- Roster ----------------------------------------------------------

    let source = FileRosterSource::new(&cfg.roster.path);
    let roster = RosterCatalog::from_source(&source)?;

    // -- Dashboard -------------------------------------------------------

    if !cfg.dashboard.enabled {
        warn!("Dashboard disabled in config — nothing to serve. Exiting.");
        return Ok(());
    }

    let state = Arc::new(DashboardState::new(roster, cfg.notices.ttl()));

    info!(
        port = cfg.dashboard.port,
        "Serving team builder. Press Ctrl+C to stop."
    );

    dashboard::serve(state, cfg.dashboard.port, shutdown_signal()).await?;

    info!("DREAMTEAM shut down cleanly.");
    Ok(())
}

/// Resolves on Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received.");
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dreamteam=info"));

    let json_logging = std::env::var("DREAMTEAM_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }
}
