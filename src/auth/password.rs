use bcrypt::BcryptError;
use thiserror::Error;

/// Default bcrypt cost factor used when seeding credentials.
pub const DEFAULT_COST: u32 = 10;

/// bcrypt reads at most 72 bytes of input. Longer plaintexts are rejected
/// here instead of being silently truncated by the algorithm.
pub const MAX_PASSWORD_BYTES: usize = 72;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("password must not be empty")]
    Empty,
    #[error("password longer than {} bytes", MAX_PASSWORD_BYTES)]
    TooLong,
    #[error("malformed password digest")]
    MalformedDigest,
    #[error("bcrypt failure: {0}")]
    Hash(BcryptError),
}

/// bcrypt wrapper with a fixed cost factor.
///
/// `hash` salts every call with fresh randomness, so hashing the same
/// plaintext twice yields two different digests that both verify.
#[derive(Debug, Clone, Copy)]
pub struct Hasher {
    cost: u32,
}

impl Hasher {
    #[must_use]
    pub const fn new(cost: u32) -> Self {
        Self { cost }
    }

    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password into a self-describing digest string
    /// (algorithm tag, cost, salt and hash travel together).
    ///
    /// # Errors
    ///
    /// Returns an error for empty plaintext, plaintext beyond
    /// [`MAX_PASSWORD_BYTES`], or a bcrypt backend failure.
    pub fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        check_bounds(plaintext)?;

        bcrypt::hash(plaintext, self.cost).map_err(PasswordError::Hash)
    }
}

/// Compare a plaintext against a digest produced by [`Hasher::hash`].
///
/// Cost and salt are read from the digest itself; no external state is
/// needed. A wrong password is `Ok(false)`, never an error. Plaintext
/// outside the bounds accepted by `hash` cannot have produced any stored
/// digest and also returns `Ok(false)`.
///
/// # Errors
///
/// Returns [`PasswordError::MalformedDigest`] when the digest is not a
/// well-formed bcrypt string; a malformed digest never verifies.
pub fn verify(plaintext: &str, digest: &str) -> Result<bool, PasswordError> {
    if check_bounds(plaintext).is_err() {
        return Ok(false);
    }

    bcrypt::verify(plaintext, digest).map_err(|_| PasswordError::MalformedDigest)
}

fn check_bounds(plaintext: &str) -> Result<(), PasswordError> {
    if plaintext.is_empty() {
        return Err(PasswordError::Empty);
    }

    if plaintext.len() > MAX_PASSWORD_BYTES {
        return Err(PasswordError::TooLong);
    }

    Ok(())
}
