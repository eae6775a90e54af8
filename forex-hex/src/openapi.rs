//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use forex_types::{MessageResponse, Rate, RateId, RatePatch, StoredRate};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Public rate table
#[utoipa::path(
    get,
    path = "/",
    tag = "pages",
    responses(
        (status = 200, description = "HTML page listing all rates", body = String, content_type = "text/html"),
        (status = 500, description = "Rate store unavailable")
    )
)]
async fn rates_page() {}

/// Admin page
#[utoipa::path(
    get,
    path = "/admin",
    tag = "pages",
    responses(
        (status = 200, description = "HTML admin page with edit and delete actions", body = String, content_type = "text/html"),
        (status = 500, description = "Rate store unavailable")
    )
)]
async fn admin_page() {}

/// List all rates
#[utoipa::path(
    get,
    path = "/api/rates",
    tag = "rates",
    responses(
        (status = 200, description = "All stored rates with their keys", body = Vec<StoredRate>),
        (status = 500, description = "Rate store unavailable")
    )
)]
async fn list_rates() {}

/// Create a rate (replaces any rate with the same code)
#[utoipa::path(
    post,
    path = "/add-currency",
    tag = "rates",
    request_body = Rate,
    responses(
        (status = 201, description = "Rate stored", body = MessageResponse),
        (status = 400, description = "Empty currency code"),
        (status = 422, description = "Malformed payload or unknown field"),
        (status = 500, description = "Rate store unavailable")
    )
)]
async fn add_currency() {}

/// Merge fields into an existing rate
#[utoipa::path(
    put,
    path = "/update-currency/{id}",
    tag = "rates",
    params(("id" = String, Path, description = "Storage key of the rate")),
    request_body = RatePatch,
    responses(
        (status = 200, description = "Rate updated", body = MessageResponse),
        (status = 404, description = "No rate stored under this key"),
        (status = 422, description = "Malformed payload or unknown field"),
        (status = 500, description = "Rate store unavailable")
    )
)]
async fn update_currency() {}

/// Delete a rate
#[utoipa::path(
    delete,
    path = "/delete-currency/{id}",
    tag = "rates",
    params(("id" = String, Path, description = "Storage key of the rate")),
    responses(
        (status = 200, description = "Rate deleted, or was already absent", body = MessageResponse),
        (status = 500, description = "Rate store unavailable")
    )
)]
async fn delete_currency() {}

/// OpenAPI documentation for the forex rates service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Forex Rates Service API",
        version = "1.0.0",
        description = "Currency exchange-rate display with an admin surface for creating, updating and deleting rate records.",
        license(name = "MIT"),
    ),
    paths(
        health,
        rates_page,
        admin_page,
        list_rates,
        add_currency,
        update_currency,
        delete_currency,
    ),
    components(schemas(Rate, RatePatch, RateId, StoredRate, MessageResponse)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "pages", description = "Rendered HTML pages"),
        (name = "rates", description = "Rate record management"),
    )
)]
pub struct ApiDoc;
