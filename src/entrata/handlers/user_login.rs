use crate::auth::{Authenticator, LoginResult};
use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;
use utoipa::ToSchema;

// No Debug derive: the payload carries a plaintext password and must never
// reach the logs.
#[derive(ToSchema, Serialize, Deserialize)]
pub struct LoginPayload {
    username: String,
    password: String,
}

#[utoipa::path(
    post,
    path= "/login",
    request_body = LoginPayload,
    responses (
        (status = 200, description = "Login attempt classified", body = LoginResult, content_type = "application/json"),
        (status = 400, description = "Missing payload"),
    ),
    tag= "login"
)]
// axum handler for login
#[instrument(skip_all)]
pub async fn login(
    auth: Extension<Arc<Authenticator>>,
    payload: Option<Json<LoginPayload>>,
) -> Response {
    let Some(Json(payload)) = payload else {
        return (StatusCode::BAD_REQUEST, "Missing payload".to_string()).into_response();
    };

    // auth failures travel inside the body, the transport answer stays 200
    let result = auth.login(payload.username.trim(), &payload.password);

    (StatusCode::OK, Json(result)).into_response()
}
