//! Auth endpoint configuration.

use serde::{Deserialize, Serialize};

/// Where the authentication API lives.
///
/// Defaults to the local development server. All fields have serde
/// defaults so a partial configuration deserializes cleanly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Base URL of the API server, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl AuthConfig {
    /// Create a config pointing at the given API server.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_server() {
        assert_eq!(AuthConfig::default().base_url, "http://localhost:3000");
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let config: AuthConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AuthConfig::default());
    }
}
