use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_server::{ServerConfig, TodoStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "invalid configuration");
            std::process::exit(1);
        }
    };

    let store = match TodoStore::connect(&config.database_url).await {
        Ok(store) => store,
        Err(error) => {
            tracing::error!(%error, url = %config.database_url, "failed to open database");
            std::process::exit(1);
        }
    };
    if let Err(error) = store.ensure_schema().await {
        tracing::error!(%error, "failed to prepare todo table");
        std::process::exit(1);
    }

    let addr = config.bind_address();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%error, %addr, "failed to bind");
            std::process::exit(1);
        }
    };
    tracing::info!("Server started at http://{addr}");

    if let Err(error) = todo_server::run(listener, store, shutdown_signal()).await {
        tracing::error!(%error, "server stopped");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutting down"),
        Err(error) => {
            tracing::warn!(%error, "cannot listen for ctrl-c, running until killed");
            std::future::pending::<()>().await;
        }
    }
}
