//! Credential verification core.
//!
//! Owns the seeded credential store and classifies each login attempt in a
//! single linear pass: input validation, user lookup, digest verification.
//! The HTTP layer is a thin collaborator that calls [`Authenticator::login`]
//! and serializes the returned [`LoginResult`].

pub mod error;
pub mod password;
pub mod result;
pub mod store;

pub use self::error::AuthError;
pub use self::password::{verify, Hasher, PasswordError, DEFAULT_COST, MAX_PASSWORD_BYTES};
pub use self::result::LoginResult;
pub use self::store::{CredentialStore, SeedCredential};

use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

const MSG_AUTHENTICATED: &str = "authenticated";
const MSG_CREDENTIALS_REQUIRED: &str = "credentials required";
const MSG_USER_NOT_FOUND: &str = "user not found";
const MSG_INCORRECT_PASSWORD: &str = "incorrect password";
// single failure wording used when unknown users are masked
const MSG_INVALID_CREDENTIALS: &str = "invalid username or password";

/// Knobs for the login decision procedure.
///
/// `mask_unknown_user` decides whether "user not found" and "incorrect
/// password" stay distinguishable in responses. The default reproduces the
/// distinguishable wording; masking answers both with one uniform message
/// so login responses do not reveal which usernames exist.
#[derive(Debug, Clone, Copy)]
pub struct AuthConfig {
    cost: u32,
    mask_unknown_user: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cost: DEFAULT_COST,
            mask_unknown_user: false,
        }
    }
}

impl AuthConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub const fn with_mask_unknown_user(mut self, mask: bool) -> Self {
        self.mask_unknown_user = mask;
        self
    }

    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.cost
    }

    #[must_use]
    pub const fn mask_unknown_user(&self) -> bool {
        self.mask_unknown_user
    }
}

/// The login service.
///
/// Holds no mutable state; the store is read-only after seeding, so one
/// shared instance serves concurrent requests without coordination.
#[derive(Debug)]
pub struct Authenticator {
    store: CredentialStore,
    config: AuthConfig,
}

impl Authenticator {
    #[must_use]
    pub fn new(store: CredentialStore, config: AuthConfig) -> Self {
        Self { store, config }
    }

    #[must_use]
    pub fn user_count(&self) -> usize {
        self.store.len()
    }

    /// Run one login attempt through the decision procedure.
    ///
    /// Always produces a result: expected failures (missing input, unknown
    /// user, wrong password) are classified, and defects such as a corrupt
    /// stored digest are logged and converted into a generic failure
    /// instead of propagating to the caller.
    pub fn login(&self, username: &str, password: &str) -> LoginResult {
        let started = Instant::now();

        debug!(username = %username.trim(), "Login attempt");

        match self.authenticate(username, password) {
            Ok(username) => {
                info!(%username, elapsed = ?started.elapsed(), "Login succeeded");

                LoginResult::granted(&username, MSG_AUTHENTICATED)
            }
            Err(err) => self.deny(&err, started.elapsed()),
        }
    }

    // Single linear pass: ValidateInput -> LookupUser -> VerifyPassword.
    fn authenticate(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let username = username.trim();

        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let Some(digest) = self.store.lookup(username) else {
            return Err(AuthError::UnknownUser(username.to_string()));
        };

        if password::verify(password, digest)? {
            Ok(username.to_string())
        } else {
            Err(AuthError::PasswordMismatch(username.to_string()))
        }
    }

    // The only place where failure messages are chosen.
    fn deny(&self, err: &AuthError, elapsed: Duration) -> LoginResult {
        match err {
            AuthError::MissingCredentials => {
                warn!(?elapsed, "Login rejected, missing credentials");

                LoginResult::denied(MSG_CREDENTIALS_REQUIRED, None)
            }
            AuthError::UnknownUser(username) => {
                warn!(%username, ?elapsed, "Login rejected, unknown user");

                let message = if self.config.mask_unknown_user() {
                    MSG_INVALID_CREDENTIALS
                } else {
                    MSG_USER_NOT_FOUND
                };

                LoginResult::denied(message, Some(username))
            }
            AuthError::PasswordMismatch(username) => {
                warn!(%username, ?elapsed, "Login rejected, password mismatch");

                let message = if self.config.mask_unknown_user() {
                    MSG_INVALID_CREDENTIALS
                } else {
                    MSG_INCORRECT_PASSWORD
                };

                LoginResult::denied(message, Some(username))
            }
            AuthError::MalformedDigest | AuthError::Internal(_) => {
                error!(%err, ?elapsed, "Login failed on internal error");

                LoginResult::denied(format!("server error: {err}"), None)
            }
        }
    }
}
