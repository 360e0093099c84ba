use std::time::Duration;

use axum::Router;
use sea_orm::DatabaseConnection;
use tokio::task::JoinHandle;
use tower_sessions::{
    cookie::Key,
    session_store::{ExpiredDeletion, SessionStore},
    Expiry, SessionManagerLayer,
};

use crate::server::{
    config::{Config, SessionConfig},
    error::Error,
    service::auth::AuthService,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database and applied migrations");

    Ok(db)
}

/// Create the configured administrator if the user table is empty
pub async fn seed_admin(db: &DatabaseConnection, config: &Config) -> Result<(), Error> {
    let created = AuthService::new(db)
        .ensure_admin(&config.admin_username, &config.admin_password, None)
        .await?;

    if !created {
        tracing::debug!("Users already present, skipping administrator seed");
    }

    Ok(())
}

/// Expiry policy for new sessions
///
/// An absolute expiry takes precedence over the inactivity window; with neither the
/// cookie lasts for the browser session.
pub fn session_expiry(config: &SessionConfig) -> Expiry {
    if let Some(expires_at) = config.expires_at {
        return Expiry::AtDateTime(expires_at);
    }

    match config.max_age_secs {
        Some(secs) => Expiry::OnInactivity(time::Duration::seconds(secs)),
        None => Expiry::OnSessionEnd,
    }
}

/// Wrap `router` in a session layer configured from `config`
///
/// Cookies are signed when a secret is configured. Signing changes the layer's type,
/// so the layer is applied here rather than returned.
pub fn apply_session_layer<S>(router: Router, config: &SessionConfig, store: S) -> Router
where
    S: SessionStore + Clone,
{
    let mut layer = SessionManagerLayer::new(store)
        .with_name(config.cookie_name.clone())
        .with_secure(config.secure)
        .with_same_site(config.same_site)
        .with_http_only(config.http_only)
        .with_path(config.path.clone())
        .with_expiry(session_expiry(config));

    if let Some(domain) = &config.domain {
        layer = layer.with_domain(domain.clone());
    }

    match &config.secret {
        Some(secret) => router.layer(layer.with_signed(Key::from(secret.as_slice()))),
        None => router.layer(layer),
    }
}

/// Periodically delete expired sessions from `store`
///
/// Failures are logged and the sweep is retried on the next tick.
pub fn start_session_cleanup<S>(store: S, interval_secs: u64) -> JoinHandle<()>
where
    S: ExpiredDeletion,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));

        loop {
            interval.tick().await;

            if let Err(e) = store.delete_expired().await {
                tracing::error!("Failed to delete expired sessions: {}", e);
            }
        }
    })
}
