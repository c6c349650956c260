//! Style Routes
//!
//! HTTP handlers for the style collection. Validation and conflict
//! details go back to the client; every other failure is logged
//! server-side and replaced with an opaque message, not-found included.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use styleguide::DomainError;

use crate::models::{
    CreateStyleRequest, DeleteResponse, ErrorResponse, StyleResponse, UpdateStyleRequest,
};
use crate::AppState;

/// Map a domain failure onto the HTTP contract
fn error_response(opaque: &'static str, err: DomainError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        DomainError::Validation(msg) => (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg))),
        DomainError::Conflict(msg) => (StatusCode::CONFLICT, Json(ErrorResponse::new(msg))),
        err => {
            tracing::error!("Style operation failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(opaque)),
            )
        }
    }
}

/// List all styles
#[utoipa::path(
    get,
    path = "/api/styles",
    responses(
        (status = 200, description = "List of styles", body = Vec<StyleResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Style"
)]
pub async fn list_styles(
    State(state): State<AppState>,
) -> Result<Json<Vec<StyleResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let styles = state
        .style_service
        .list_all()
        .await
        .map_err(|e| error_response("Failed to fetch styles. Please try again later.", e))?;

    let responses: Vec<StyleResponse> = styles.into_iter().map(StyleResponse::from_domain).collect();

    Ok(Json(responses))
}

/// Create a new style
#[utoipa::path(
    post,
    path = "/api/styles",
    request_body = CreateStyleRequest,
    responses(
        (status = 200, description = "Style created", body = StyleResponse),
        (status = 400, description = "Empty name or description", body = ErrorResponse),
        (status = 409, description = "Name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Style"
)]
pub async fn create_style(
    State(state): State<AppState>,
    Json(payload): Json<CreateStyleRequest>,
) -> Result<Json<StyleResponse>, (StatusCode, Json<ErrorResponse>)> {
    let style = state
        .style_service
        .create(&payload.name, &payload.description)
        .await
        .map_err(|e| error_response("Failed to create style. Please try again.", e))?;

    Ok(Json(StyleResponse::from_domain(style)))
}

/// Update a style
#[utoipa::path(
    put,
    path = "/api/styles/{id}",
    params(
        ("id" = i64, Path, description = "Style ID")
    ),
    request_body = UpdateStyleRequest,
    responses(
        (status = 200, description = "Style updated", body = StyleResponse),
        (status = 400, description = "Empty name or description", body = ErrorResponse),
        (status = 409, description = "Name already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Style"
)]
pub async fn update_style(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateStyleRequest>,
) -> Result<Json<StyleResponse>, (StatusCode, Json<ErrorResponse>)> {
    let style = state
        .style_service
        .update(id, &payload.name, &payload.description)
        .await
        .map_err(|e| error_response("Failed to update style. Please try again.", e))?;

    Ok(Json(StyleResponse::from_domain(style)))
}

/// Delete a style
#[utoipa::path(
    delete,
    path = "/api/styles/{id}",
    params(
        ("id" = i64, Path, description = "Style ID")
    ),
    responses(
        (status = 200, description = "Style deleted", body = DeleteResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Style"
)]
pub async fn delete_style(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, (StatusCode, Json<ErrorResponse>)> {
    state
        .style_service
        .delete(id)
        .await
        .map_err(|e| error_response("Failed to delete style. Please try again.", e))?;

    Ok(Json(DeleteResponse { success: true }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/styles", get(list_styles).post(create_style))
        .route(
            "/api/styles/:id",
            axum::routing::put(update_style).delete(delete_style),
        )
}
