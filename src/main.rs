//! Account service binary: reads settings, prepares the store, serves HTTP until Ctrl-C.

use accounts_service::{
    app, apply_migrations, ensure_database_exists, AppState, MemoryAccountStore, PgAccountStore,
    Settings, StoreBackend,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("accounts_service=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let state = match settings.store {
        StoreBackend::Postgres => {
            ensure_database_exists(&settings.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(settings.max_connections)
                .connect(&settings.database_url)
                .await?;
            apply_migrations(&pool).await?;
            AppState::new(PgAccountStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; accounts are lost on restart");
            AppState::new(MemoryAccountStore::new())
        }
    };

    let router = app(state, settings.max_body_bytes);
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
