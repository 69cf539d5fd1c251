//! HTTP API for Yakuzadle
//!
//! Endpoints:
//! - GET /guess?name={name} - Compare a character against today's target
//! - GET /list - Names and images for autocomplete
//! - GET /daily-target - Name of today's target
//! - GET /health - Health check

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

use crate::core::catalog::{Catalog, CatalogError, ListEntry};
use crate::core::compare::Comparator;
use crate::core::daily::{today_utc, DailyTarget};
use crate::types::{CharacterRecord, VerdictRecord};
use crate::{DEFAULT_ADDR, DEFAULT_CATALOG_PATH, DEFAULT_IMAGE_BASE};

/// Server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address
    pub addr: String,
    /// Catalog JSON file
    pub catalog_path: String,
    /// Prefix for image URLs in /list
    pub image_base: String,
    /// Pin the game to one date instead of following the UTC clock
    pub fixed_date: Option<NaiveDate>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            catalog_path: DEFAULT_CATALOG_PATH.to_string(),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            fixed_date: None,
        }
    }
}

/// App state
pub struct AppState {
    pub catalog: Catalog,
    pub daily: DailyTarget,
    pub comparator: Comparator,
    pub config: ServerConfig,
}

impl AppState {
    fn today(&self) -> NaiveDate {
        self.config.fixed_date.unwrap_or_else(today_utc)
    }
}

/// API error, rendered as `{"error": "..."}`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing name")]
    MissingName,
    #[error("Character not found")]
    CharacterNotFound,
    #[error("Internal server error")]
    Internal(#[source] CatalogError),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingName => StatusCode::BAD_REQUEST,
            ApiError::CharacterNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(source) => {
                error!(error = %source, "failed to get daily target");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

/// Guess query
#[derive(Debug, Deserialize)]
pub struct GuessQuery {
    pub name: Option<String>,
}

/// Guessed character, with `appears_in` repeated as `games` for display
#[derive(Debug, Serialize)]
pub struct GuessedCharacter {
    #[serde(flatten)]
    pub record: CharacterRecord,
    pub games: Option<Vec<String>>,
}

/// Guess response
#[derive(Debug, Serialize)]
pub struct GuessResponse {
    pub character: GuessedCharacter,
    pub result: VerdictRecord,
    pub solved: bool,
    pub target: CharacterRecord,
}

/// Daily target response
#[derive(Debug, Serialize)]
pub struct DailyTargetResponse {
    pub name: Option<String>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub characters: usize,
}

/// Create the API router
pub fn create_router(catalog: Catalog, config: ServerConfig) -> Router {
    let state = Arc::new(AppState {
        catalog,
        daily: DailyTarget::new(),
        comparator: Comparator::new(),
        config,
    });

    Router::new()
        .route("/health", get(health))
        .route("/guess", get(guess))
        .route("/list", get(list))
        .route("/daily-target", get(daily_target))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        characters: state.catalog.len(),
    })
}

/// Compare the named character against today's target
async fn guess(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GuessQuery>,
) -> Result<Json<GuessResponse>, ApiError> {
    let name = query
        .name
        .filter(|n| !n.is_empty())
        .ok_or(ApiError::MissingName)?;
    let candidate = state
        .catalog
        .get(&name)
        .ok_or(ApiError::CharacterNotFound)?;

    let target = state
        .daily
        .get(&state.catalog, state.today())
        .await
        .map_err(ApiError::Internal)?;

    let result = state.comparator.compare(candidate, &target);
    let solved = candidate.name.is_some() && candidate.name == target.name;
    info!(guess = %name, solved, "guess evaluated");

    Ok(Json(GuessResponse {
        character: GuessedCharacter {
            games: candidate.appears_in.clone(),
            record: candidate.clone(),
        },
        result,
        solved,
        target: target.as_ref().clone(),
    }))
}

/// List all characters for autocomplete
async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<ListEntry>> {
    Json(state.catalog.list_entries(&state.config.image_base))
}

/// Name of today's target
async fn daily_target(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DailyTargetResponse>, ApiError> {
    let target = state
        .daily
        .get(&state.catalog, state.today())
        .await
        .map_err(ApiError::Internal)?;
    Ok(Json(DailyTargetResponse {
        name: target.name.clone(),
    }))
}

/// Run the API server
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::load(&config.catalog_path)?;
    let addr = config.addr.clone();
    let router = create_router(catalog, config);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "Yakuzadle API running");
    info!("  GET /guess?name=NAME - Compare a guess");
    info!("  GET /list            - Autocomplete list");
    info!("  GET /daily-target    - Today's target");
    info!("  GET /health          - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
