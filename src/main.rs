use tea_inventory::server::{
    config::Config, data::session::SeaOrmSessionStore, error::Error, model::app::AppState,
    router, startup,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("Server failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::seed_admin(&db, &config).await?;

    let session_store = SeaOrmSessionStore::new(db.clone());
    let _cleanup = startup::start_session_cleanup(
        session_store.clone(),
        config.session.cleanup_interval_secs,
    );

    let app = router::routes().with_state(AppState::from(db));
    let app = startup::apply_session_layer(app, &config.session, session_store);

    let listener = TcpListener::bind(config.addr()).await?;
    tracing::info!("Starting server on {}", config.addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}
