use crate::auth::{Authenticator, CredentialStore, Hasher};
use crate::cli::actions::Action;
use crate::entrata;
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server {
            port,
            config,
            credentials,
        } => {
            let hasher = Hasher::new(config.cost());

            // hashing is deliberately slow, seed once before serving
            let started = Instant::now();
            let store = CredentialStore::seed(&hasher, &credentials)
                .context("Failed to seed credential store")?;

            info!(
                users = store.len(),
                cost = hasher.cost(),
                elapsed = ?started.elapsed(),
                "Credential store seeded"
            );

            let auth = Arc::new(Authenticator::new(store, config));

            entrata::new(port, auth).await?;
        }
    }

    Ok(())
}
