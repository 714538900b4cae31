//! Environment-driven application configuration.
//!
//! Every external connection (database, identity provider, model endpoint)
//! is gated on an environment variable. Required variables that are missing
//! or empty abort startup with a [`ConfigError`].

use std::net::SocketAddr;

use thiserror::Error;

use crate::auth::PublicRoutes;

const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuration loading errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("Missing required environment variable: {var}")]
    Missing { var: &'static str },

    /// A variable is set but cannot be parsed
    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Identity provider settings used to verify session tokens
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub issuer: Option<String>,
    pub public_routes: PublicRoutes,
}

/// Hosted model endpoint settings
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub llm: LlmConfig,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first, if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &'static str| optional(key).ok_or(ConfigError::Missing { var: key });

        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("AUTH_JWT_SECRET")?;
        let api_key = required("LLM_API_KEY")?;

        let bind_addr = optional("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let max_connections = match optional("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| ConfigError::Invalid {
                var: "DATABASE_MAX_CONNECTIONS",
                reason: e.to_string(),
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let public_routes = optional("PUBLIC_ROUTES")
            .map(|raw| PublicRoutes::parse_list(&raw))
            .unwrap_or_default();

        Ok(Self {
            bind_addr,
            database: DatabaseConfig {
                url: database_url,
                max_connections,
            },
            auth: AuthConfig {
                jwt_secret,
                issuer: optional("AUTH_ISSUER"),
                public_routes,
            },
            llm: LlmConfig {
                api_key,
                base_url: optional("LLM_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_LLM_BASE_URL.to_string()),
                model: optional("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn minimal() -> HashMap<String, String> {
        env(&[
            ("DATABASE_URL", "postgres://localhost/planner"),
            ("AUTH_JWT_SECRET", "secret"),
            ("LLM_API_KEY", "sk-test"),
        ])
    }

    fn load(vars: &HashMap<String, String>) -> Result<AppConfig, ConfigError> {
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn minimal_environment_uses_defaults() {
        let config = load(&minimal()).expect("valid config");

        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.llm.base_url, "https://api.openai.com/v1");
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert!(config.auth.issuer.is_none());
        assert!(config.auth.public_routes.is_public("/health"));
    }

    #[test]
    fn each_required_variable_fails_fast() {
        for var in ["DATABASE_URL", "AUTH_JWT_SECRET", "LLM_API_KEY"] {
            let mut vars = minimal();
            vars.remove(var);
            assert_eq!(load(&vars).unwrap_err(), ConfigError::Missing { var });
        }
    }

    #[test]
    fn empty_required_variable_counts_as_missing() {
        let mut vars = minimal();
        vars.insert("AUTH_JWT_SECRET".into(), "  ".into());

        assert_eq!(
            load(&vars).unwrap_err(),
            ConfigError::Missing {
                var: "AUTH_JWT_SECRET"
            }
        );
    }

    #[test]
    fn invalid_bind_addr_is_rejected() {
        let mut vars = minimal();
        vars.insert("BIND_ADDR".into(), "not-an-address".into());

        assert!(matches!(
            load(&vars),
            Err(ConfigError::Invalid { var: "BIND_ADDR", .. })
        ));
    }

    #[test]
    fn invalid_max_connections_is_rejected() {
        let mut vars = minimal();
        vars.insert("DATABASE_MAX_CONNECTIONS".into(), "lots".into());

        assert!(matches!(
            load(&vars),
            Err(ConfigError::Invalid {
                var: "DATABASE_MAX_CONNECTIONS",
                ..
            })
        ));
    }

    #[test]
    fn optional_overrides_are_applied() {
        let mut vars = minimal();
        vars.insert("LLM_BASE_URL".into(), "http://localhost:8080/v1/".into());
        vars.insert("LLM_MODEL".into(), "llama3".into());
        vars.insert("AUTH_ISSUER".into(), "https://clerk.example.com".into());
        vars.insert("PUBLIC_ROUTES".into(), "/, /status".into());

        let config = load(&vars).expect("valid config");

        assert_eq!(config.llm.base_url, "http://localhost:8080/v1");
        assert_eq!(config.llm.model, "llama3");
        assert_eq!(config.auth.issuer.as_deref(), Some("https://clerk.example.com"));
        assert!(config.auth.public_routes.is_public("/status"));
        assert!(!config.auth.public_routes.is_public("/health"));
    }
}
