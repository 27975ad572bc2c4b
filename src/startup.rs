//! Application Startup
//!
//! Application state wiring and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;

use crate::application::services::{AdminService, AuthService, ChirpService};
use crate::config::Settings;
use crate::domain::{ChirpRepository, CredentialHasher, HashError, UserRepository};
use crate::infrastructure::database;
use crate::infrastructure::metrics::RequestCounter;
use crate::infrastructure::repositories::{InMemoryStore, PgChirpRepository, PgUserRepository};
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub chirps: Arc<ChirpService>,
    pub admin: Arc<AdminService>,
    pub hits: Arc<RequestCounter>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Wire services over the given repositories
    pub fn new(
        settings: Settings,
        user_repo: Arc<dyn UserRepository>,
        chirp_repo: Arc<dyn ChirpRepository>,
    ) -> Result<Self, HashError> {
        let hasher = CredentialHasher::new(
            settings.auth.memory_kib,
            settings.auth.iterations,
            settings.auth.parallelism,
        )?;
        let hits = Arc::new(RequestCounter::new(settings.platform.clone()));

        Ok(Self {
            auth: Arc::new(AuthService::new(
                user_repo.clone(),
                hasher,
                settings.auth.missing_hash_policy,
            )),
            chirps: Arc::new(ChirpService::new(chirp_repo)),
            admin: Arc::new(AdminService::new(
                user_repo,
                hits.clone(),
                settings.platform.clone(),
            )),
            hits,
            settings: Arc::new(settings),
        })
    }

    /// State backed by a fresh in-memory store
    pub fn in_memory(settings: Settings) -> Result<Self, HashError> {
        let store = Arc::new(InMemoryStore::new());
        Self::new(settings, store.clone(), store)
    }
}

/// Build the full router with its middleware stack
pub fn build_router(state: AppState) -> Router {
    let settings = state.settings.clone();

    routes::create_router(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            settings.server.request_timeout_secs,
        )))
        .layer(logging::create_trace_layer())
        .layer(cors::create_cors_layer(&settings.cors))
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let state = match settings.database.url.clone() {
            Some(url) => {
                let pool = database::create_pool(&settings.database, &url).await?;
                tracing::info!("Database connection pool created");

                if settings.database.run_migrations {
                    database::run_migrations(&pool).await?;
                    tracing::info!("Database migrations applied");
                }

                AppState::new(
                    settings,
                    Arc::new(PgUserRepository::new(pool.clone())),
                    Arc::new(PgChirpRepository::new(pool)),
                )?
            }
            None => {
                tracing::warn!("DATABASE_URL not set, using the in-memory store");
                AppState::in_memory(settings)?
            }
        };

        let addr: SocketAddr = state.settings.server_addr().parse()?;
        let router = build_router(state);

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until Ctrl-C
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
