//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use forex_types::{AppError, MessageResponse, Rate, RateId, RatePatch, RateStore};

use super::pages::{AdminPage, RatesPage, render};
use crate::RateService;

/// Application state shared across handlers.
pub struct AppState<S: RateStore> {
    pub service: RateService<S>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Public rate table page.
#[tracing::instrument(skip(state))]
pub async fn rates_page<S: RateStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<impl IntoResponse, ApiError> {
    let rates = state.service.list_rates().await?;
    Ok(Html(render(&RatesPage::new(&rates))?))
}

/// Admin page with the add/edit form and per-record actions.
#[tracing::instrument(skip(state))]
pub async fn admin_page<S: RateStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<impl IntoResponse, ApiError> {
    let rates = state.service.list_rates().await?;
    Ok(Html(render(&AdminPage::new(&rates)?)?))
}

/// List all rates as JSON.
#[tracing::instrument(skip(state))]
pub async fn list_rates<S: RateStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<impl IntoResponse, ApiError> {
    let rates = state.service.list_rates().await?;
    Ok(Json(rates))
}

/// Create a rate, replacing any record with the same code.
#[tracing::instrument(skip(state, rate), fields(code = %rate.code))]
pub async fn add_currency<S: RateStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(rate): Json<Rate>,
) -> Result<impl IntoResponse, ApiError> {
    state.service.create_rate(rate).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Currency added successfully!")),
    ))
}

/// Merge the supplied fields into an existing rate.
#[tracing::instrument(skip(state))]
pub async fn update_currency<S: RateStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    Json(patch): Json<RatePatch>,
) -> Result<impl IntoResponse, ApiError> {
    state.service.update_rate(&RateId::new(id), patch).await?;
    Ok(Json(MessageResponse::new("Currency updated successfully!")))
}

/// Delete a rate. Missing keys are not an error.
#[tracing::instrument(skip(state))]
pub async fn delete_currency<S: RateStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.service.delete_rate(&RateId::new(id)).await?;
    Ok(Json(MessageResponse::new("Currency deleted successfully!")))
}
