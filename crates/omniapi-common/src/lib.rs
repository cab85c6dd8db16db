use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.omniapi.dev";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required client config field: {0}")]
    MissingField(&'static str),
    #[error("invalid value for {field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

/// Final, merged client configuration.
///
/// Merge order in the CLI: flags > ENV > defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Scheme and host, no trailing slash.
    pub base_url: String,
    /// Sent as `authorization: Bearer <key>` when present. Never serialized.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Optional outbound proxy.
    pub proxy: Option<String>,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            proxy: None,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("omniapi-rust/{}", env!("CARGO_PKG_VERSION"))
}

/// Optional layer used for merging client config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfigPatch {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub proxy: Option<String>,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl ClientConfigPatch {
    pub fn overlay(&mut self, other: ClientConfigPatch) {
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.proxy.is_some() {
            self.proxy = other.proxy;
        }
        if other.connect_timeout_secs.is_some() {
            self.connect_timeout_secs = other.connect_timeout_secs;
        }
        if other.request_timeout_secs.is_some() {
            self.request_timeout_secs = other.request_timeout_secs;
        }
        if other.user_agent.is_some() {
            self.user_agent = other.user_agent;
        }
    }

    pub fn into_config(self) -> Result<ClientConfig, ConfigError> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if base_url.is_empty() {
            return Err(ConfigError::MissingField("base_url"));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                field: "base_url",
                message: format!("`{base_url}` is not an http(s) URL"),
            });
        }
        let request_timeout_secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        if request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "request_timeout_secs",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(ClientConfig {
            base_url,
            api_key: self.api_key,
            proxy: self.proxy,
            connect_timeout_secs: self
                .connect_timeout_secs
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout_secs,
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
        })
    }
}

impl From<ClientConfig> for ClientConfigPatch {
    fn from(value: ClientConfig) -> Self {
        Self {
            base_url: Some(value.base_url),
            api_key: value.api_key,
            proxy: value.proxy,
            connect_timeout_secs: Some(value.connect_timeout_secs),
            request_timeout_secs: Some(value.request_timeout_secs),
            user_agent: Some(value.user_agent),
        }
    }
}

/// Treats blank values and unresolved `${VAR}` placeholders as "not set".
pub fn sanitize_optional_value(value: Option<String>) -> Option<String> {
    let trimmed = value?.trim().to_string();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("${") && trimmed.ends_with('}') {
        return None;
    }
    Some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_layer_wins_for_set_fields() {
        let mut merged = ClientConfigPatch {
            base_url: Some("https://env.example".to_string()),
            api_key: Some("env-key".to_string()),
            ..Default::default()
        };
        merged.overlay(ClientConfigPatch {
            api_key: Some("flag-key".to_string()),
            ..Default::default()
        });

        let config = merged.into_config().expect("config");
        assert_eq!(config.base_url, "https://env.example");
        assert_eq!(config.api_key.as_deref(), Some("flag-key"));
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let config = ClientConfigPatch::default().into_config().expect("config");
        assert_eq!(config, ClientConfig::default());
        assert!(config.user_agent.starts_with("omniapi-rust/"));
    }

    #[test]
    fn trailing_slash_is_trimmed_and_scheme_checked() {
        let config = ClientConfigPatch {
            base_url: Some("http://localhost:8080/".to_string()),
            ..Default::default()
        }
        .into_config()
        .expect("config");
        assert_eq!(config.base_url, "http://localhost:8080");

        let err = ClientConfigPatch {
            base_url: Some("ftp://nope".to_string()),
            ..Default::default()
        }
        .into_config()
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "base_url", .. }));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = ClientConfigPatch {
            request_timeout_secs: Some(0),
            ..Default::default()
        }
        .into_config()
        .unwrap_err();
        assert!(err.to_string().contains("request_timeout_secs"));
    }

    #[test]
    fn sanitizes_placeholders() {
        assert_eq!(sanitize_optional_value(Some("  ".to_string())), None);
        assert_eq!(sanitize_optional_value(Some("${OMNIAPI_API_KEY}".to_string())), None);
        assert_eq!(
            sanitize_optional_value(Some(" key ".to_string())).as_deref(),
            Some("key")
        );
    }

    #[test]
    fn config_serializes_for_diagnostics() {
        let value = serde_json::to_value(ClientConfig::default()).unwrap();
        assert_eq!(value["base_url"], DEFAULT_BASE_URL);
    }

    #[test]
    fn api_key_is_not_serialized() {
        let config = ClientConfig {
            api_key: Some("sk_live_secret".to_string()),
            ..ClientConfig::default()
        };
        let text = serde_json::to_string(&config).unwrap();
        assert!(!text.contains("sk_live_secret"));
        assert!(!text.contains("api_key"));

        let back: ClientConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back.api_key, None);
        assert_eq!(back.base_url, config.base_url);
    }

    #[test]
    fn patch_reads_partial_json() {
        let patch: ClientConfigPatch =
            serde_json::from_str(r#"{"base_url":"https://file.example","request_timeout_secs":5}"#)
                .unwrap();
        assert_eq!(patch.base_url.as_deref(), Some("https://file.example"));
        assert_eq!(patch.request_timeout_secs, Some(5));
        assert!(patch.api_key.is_none());
    }

    #[test]
    fn round_trips_through_patch() {
        let config = ClientConfig {
            api_key: Some("k".to_string()),
            ..ClientConfig::default()
        };
        let back = ClientConfigPatch::from(config.clone())
            .into_config()
            .expect("config");
        assert_eq!(back, config);
    }
}
