use crate::auth::{AuthConfig, SeedCredential, DEFAULT_COST};
use crate::cli::actions::Action;
use anyhow::Result;

// Demo seed set, replaced by --credential / ENTRATA_CREDENTIALS in any real
// deployment (credentials belong in a secret store, not in source).
fn default_credentials() -> Vec<SeedCredential> {
    vec![
        SeedCredential::new("admin", "password123"),
        SeedCredential::new("angie", "angie123"),
    ]
}

/// Map validated CLI matches to a server action.
///
/// # Errors
///
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let config = AuthConfig::new()
        .with_cost(matches.get_one::<u32>("cost").copied().unwrap_or(DEFAULT_COST))
        .with_mask_unknown_user(matches.get_flag("mask-unknown-user"));

    let credentials = matches
        .get_many::<SeedCredential>("credential")
        .map(|entries| entries.cloned().collect::<Vec<_>>())
        .unwrap_or_else(default_credentials);

    Ok(Action::Server {
        port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
        config,
        credentials,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;

    #[test]
    fn test_handler_defaults() {
        let matches = commands::new().get_matches_from(vec!["entrata"]);
        let Action::Server {
            port,
            config,
            credentials,
        } = handler(&matches).unwrap();

        assert_eq!(port, 8080);
        assert_eq!(config.cost(), DEFAULT_COST);
        assert!(!config.mask_unknown_user());
        // demo seed set applies when no credentials are given
        assert_eq!(credentials.len(), 2);
        assert_eq!(credentials[0].username, "admin");
    }

    #[test]
    fn test_handler_overrides() {
        let matches = commands::new().get_matches_from(vec![
            "entrata",
            "--port",
            "8443",
            "--cost",
            "12",
            "--mask-unknown-user",
            "--credential",
            "ops:hunter2",
        ]);
        let Action::Server {
            port,
            config,
            credentials,
        } = handler(&matches).unwrap();

        assert_eq!(port, 8443);
        assert_eq!(config.cost(), 12);
        assert!(config.mask_unknown_user());
        assert_eq!(credentials.len(), 1);
        assert_eq!(credentials[0].username, "ops");
    }
}
