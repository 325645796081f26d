//! Credential verification service.
//!
//! Authenticates username/password pairs against an in-memory credential
//! store seeded at startup, using salted bcrypt digests. The [`auth`]
//! module is the core; [`entrata`] and [`cli`] are the HTTP and bootstrap
//! glue around it.

pub mod auth;
pub mod cli;
pub mod entrata;
