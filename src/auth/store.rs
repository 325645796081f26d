use crate::auth::password::{Hasher, PasswordError};
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use tracing::warn;

/// A username plus the plaintext password it will be seeded with.
///
/// The plaintext half lives in a [`SecretString`] so it is redacted from
/// `Debug` output and zeroized on drop.
#[derive(Debug, Clone)]
pub struct SeedCredential {
    pub username: String,
    pub password: SecretString,
}

impl SeedCredential {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Parse the `user:password` form used by the CLI and environment.
    ///
    /// # Errors
    ///
    /// Returns an error unless both halves are present and non-empty.
    pub fn parse(entry: &str) -> Result<Self, String> {
        match entry.split_once(':') {
            Some((username, password))
                if !username.trim().is_empty() && !password.is_empty() =>
            {
                Ok(Self::new(username.trim(), password))
            }
            _ => Err("expected user:password".to_string()),
        }
    }
}

/// Immutable username to digest table, built once at startup.
///
/// Lookups after seeding are pure reads, so concurrent login requests need
/// no locking.
#[derive(Debug, Default)]
pub struct CredentialStore {
    users: HashMap<String, String>,
}

impl CredentialStore {
    /// Hash every seed entry and build the lookup table.
    ///
    /// Plaintext passwords are consumed here and only the resulting digests
    /// are retained; neither plaintext nor digests are logged. A duplicate
    /// username replaces the earlier entry.
    ///
    /// # Errors
    ///
    /// Returns an error if any plaintext is rejected by the hashing engine.
    pub fn seed(hasher: &Hasher, entries: &[SeedCredential]) -> Result<Self, PasswordError> {
        let mut users = HashMap::with_capacity(entries.len());

        for entry in entries {
            let digest = hasher.hash(entry.password.expose_secret())?;

            if users.insert(entry.username.clone(), digest).is_some() {
                warn!(username = %entry.username, "Duplicate seed entry replaced");
            }
        }

        Ok(Self { users })
    }

    /// Exact, case-sensitive lookup on an already-trimmed username.
    #[must_use]
    pub fn lookup(&self, username: &str) -> Option<&str> {
        self.users.get(username).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn with_digests(users: HashMap<String, String>) -> Self {
        Self { users }
    }
}
