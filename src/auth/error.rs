use crate::auth::password::PasswordError;
use thiserror::Error;

/// Classified login failure, one variant per outcome class.
///
/// The first three variants are expected domain outcomes and map to a
/// normal failure result. `MalformedDigest` and `Internal` are defects
/// (corrupt stored state, backend faults); they are logged at the service
/// boundary and masked into a generic failure, never re-raised to the
/// transport layer.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("credentials required")]
    MissingCredentials,
    #[error("user not found: {0}")]
    UnknownUser(String),
    #[error("incorrect password for {0}")]
    PasswordMismatch(String),
    #[error("malformed password digest")]
    MalformedDigest,
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<PasswordError> for AuthError {
    fn from(err: PasswordError) -> Self {
        match err {
            PasswordError::MalformedDigest => Self::MalformedDigest,
            other => Self::Internal(other.to_string()),
        }
    }
}
