use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of a single login attempt.
///
/// Immutable after construction; the HTTP layer serializes it verbatim.
/// Authentication failure is domain data, not a transport fault, so the
/// collaborator always answers 200 with `success` set accordingly.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone)]
pub struct LoginResult {
    pub success: bool,
    pub message: String,
    pub username: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl LoginResult {
    #[must_use]
    pub(crate) fn granted(username: &str, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            username: Some(username.to_string()),
            timestamp: Utc::now(),
        }
    }

    #[must_use]
    pub(crate) fn denied(message: impl Into<String>, username: Option<&str>) -> Self {
        Self {
            success: false,
            message: message.into(),
            username: username.map(ToString::to_string),
            timestamp: Utc::now(),
        }
    }
}
