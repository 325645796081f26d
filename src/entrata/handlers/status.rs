use crate::auth::Authenticator;
use axum::{extract::Extension, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

#[utoipa::path(
    get,
    path= "/status",
    responses (
        (status = 200, description = "Service status and seeded user count"),
    ),
    tag= "status"
)]
// axum handler for status
pub async fn status(auth: Extension<Arc<Authenticator>>) -> impl IntoResponse {
    Json(json!({
        "status": "OK",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "users": auth.user_count(),
        "timestamp": Utc::now(),
    }))
}
