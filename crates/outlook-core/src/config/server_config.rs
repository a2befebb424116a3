//! HTTP server configuration, including the bearer-token → role table.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::access::Role;

/// A bearer token and the user/role it authenticates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    pub token: String,
    pub user: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub workers: Option<usize>,
    pub access_tokens: Vec<AccessToken>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
            workers: None,
            access_tokens: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Resolve a bearer token to its entry.
    pub fn lookup_token(&self, token: &str) -> Option<&AccessToken> {
        self.access_tokens.iter().find(|t| t.token == token)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "server.bind".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        let mut seen = HashSet::new();
        for entry in &self.access_tokens {
            if entry.token.is_empty() {
                return Err(ConfigError::Invalid {
                    key: "server.access_tokens".to_string(),
                    message: format!("empty token for user {}", entry.user),
                });
            }
            if !seen.insert(entry.token.as_str()) {
                return Err(ConfigError::Invalid {
                    key: "server.access_tokens".to_string(),
                    message: format!("duplicate token for user {}", entry.user),
                });
            }
        }
        Ok(())
    }
}
