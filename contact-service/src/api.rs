use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::models::{NewMessage, StoredMessage};
use crate::storage::MessageStore;

/// Application state
pub struct AppState {
    store: MessageStore,
}

impl AppState {
    pub fn new(store: MessageStore) -> Self {
        Self { store }
    }
}

/// Build the API router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .route(
            "/api/v1/messages",
            get(list_handler).post(submit_handler),
        )
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Root endpoint
async fn root_handler() -> Json<serde_json::Value> {
    Json(json!({
        "service": "Contact Message Service",
        "version": "0.1.0",
        "status": "running",
        "description": "Stores contact form messages for the showroom site"
    }))
}

/// Health check endpoint
async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let database_up = state.store.ping().await;

    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "database": database_up
    }))
}

/// Validate and store a contact message
async fn submit_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NewMessage>,
) -> Result<(StatusCode, Json<StoredMessage>), ApiError> {
    tracing::info!("Received contact message from {}", request.email);

    validate_message(&request)?;

    let stored = state.store.insert(&request).await?;
    tracing::info!("Stored contact message {}", stored.id);

    Ok((StatusCode::CREATED, Json(stored)))
}

#[derive(Debug, Deserialize)]
struct ListParams {
    limit: Option<u32>,
}

/// List recent messages, newest first
async fn list_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<StoredMessage>>, ApiError> {
    let limit = params.limit.unwrap_or(50);
    let messages = state.store.recent(limit).await?;

    tracing::info!("Listing {} contact messages", messages.len());
    Ok(Json(messages))
}

/// The contact form's validation: every field required, checked in form
/// order, each with its own error message.
fn validate_message(message: &NewMessage) -> Result<(), ApiError> {
    if message.name.trim().is_empty() {
        return Err(ApiError::ValidationError("Name is required.".to_string()));
    }
    if message.email.trim().is_empty() {
        return Err(ApiError::ValidationError("Email is required.".to_string()));
    }
    if message.message.trim().is_empty() {
        return Err(ApiError::ValidationError("Message is required.".to_string()));
    }
    Ok(())
}

/// API Errors
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::DatabaseError(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
