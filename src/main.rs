use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use bistro_boss::config::Config;
use bistro_boss::db::{self, AppState};
use bistro_boss::jwt::TokenSigner;
use bistro_boss::payments::StripeClient;

#[derive(Parser)]
#[command(name = "bistro-boss", version, about = "Restaurant ordering API")]
struct Cli {
    /// Override HOST
    #[arg(long, global = true)]
    host: Option<String>,
    /// Override PORT
    #[arg(long, global = true)]
    port: Option<u16>,
    /// Override DATABASE_URL
    #[arg(long, global = true)]
    database: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Load menu items and reviews from JSON arrays
    Seed {
        #[arg(long)]
        menu: Option<PathBuf>,
        #[arg(long)]
        reviews: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bistro_boss=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(database) = cli.database {
        config.database_url = database;
    }

    let pool = db::create_pool(&config.database_url)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config, pool).await,
        Command::Seed { menu, reviews } => {
            let conn = pool.get()?;
            let report = bistro_boss::seed::seed(&conn, menu.as_deref(), reviews.as_deref())?;
            tracing::info!(
                "Seeded {} menu item(s) and {} review(s)",
                report.menu_items,
                report.reviews
            );
            Ok(())
        }
    }
}

async fn serve(config: Config, pool: db::DbPool) -> Result<()> {
    let state = AppState {
        db: pool,
        tokens: TokenSigner::new(&config.access_token_secret),
        stripe: StripeClient::new(&config.stripe_secret_key, &config.stripe_api_base),
    };

    let listener = TcpListener::bind(config.addr()).await?;
    tracing::info!("Server running on {}", config.addr());

    axum::serve(listener, bistro_boss::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
