use crate::auth::{AuthConfig, SeedCredential};

pub mod server;

/// Actions the CLI can dispatch to.
#[derive(Debug)]
pub enum Action {
    Server {
        port: u16,
        config: AuthConfig,
        credentials: Vec<SeedCredential>,
    },
}
