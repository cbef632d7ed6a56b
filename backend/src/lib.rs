//! # Pregnancy Tracker Backend
//!
//! Non-UI logic of the pregnancy tracker: the gestational timeline engine,
//! pregnancy profiles and the development reference data, served over REST.
//!
//! ## Architecture
//!
//! ```text
//! Frontend
//!     ↓
//! IO Layer (REST handlers, DTO mappers)
//!     ↓
//! Domain Layer (services, timeline engine)
//!     ↓
//! Storage Layer (SQLite repositories)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{Clock, DevelopmentService, PregnancyService, SystemClock, TimelineService};
use crate::storage::{DbConnection, DevelopmentRepository, PregnancyRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub pregnancy_service: PregnancyService,
    pub timeline_service: TimelineService,
    pub development_service: DevelopmentService,
}

impl AppState {
    /// Wire the services onto an open database
    pub fn new(db: DbConnection, clock: Arc<dyn Clock>, comparison_floor: u32) -> Self {
        let pregnancy_service =
            PregnancyService::new(Arc::new(PregnancyRepository::new(db.clone())), clock.clone());
        let development_service =
            DevelopmentService::new(Arc::new(DevelopmentRepository::new(db)), comparison_floor);
        let timeline_service =
            TimelineService::new(pregnancy_service.clone(), development_service.clone(), clock);

        Self {
            pregnancy_service,
            timeline_service,
            development_service,
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db = DbConnection::init(&config.database_url).await?;

    info!("Setting up domain model");
    let app_state = AppState::new(db, Arc::new(SystemClock), config.comparison_floor);

    app_state
        .development_service
        .seed_if_empty()
        .await
        .context("Failed to seed development reference data")?;

    Ok(app_state)
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors_origin: &str) -> Result<Router> {
    let origin = cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin '{}'", cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/health", get(io::health))
        .route(
            "/users/:user_id/pregnancies",
            get(io::list_pregnancies).post(io::create_pregnancy),
        )
        .route("/users/:user_id/pregnancies/active", get(io::get_active_pregnancy))
        .route("/users/:user_id/timeline", get(io::get_user_timeline))
        .route(
            "/pregnancies/:pregnancy_id",
            get(io::get_pregnancy).put(io::update_pregnancy),
        )
        .route("/pregnancies/:pregnancy_id/deactivate", post(io::deactivate_pregnancy))
        .route("/timeline", get(io::calculate_timeline))
        .route("/development", get(io::list_development))
        .route("/development/:week", get(io::get_development_week));

    Ok(Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state))
}
