//! Configuration handling for the site

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Which submission collaborator to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubmitterKind {
    #[default]
    Simulated,
    Resend,
}

impl SubmitterKind {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "simulated" => Some(Self::Simulated),
            "resend" => Some(Self::Resend),
            _ => None,
        }
    }
}

/// User configuration for the site
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    /// Submission collaborator
    pub submitter: Option<SubmitterKind>,
    /// Resend API base URL
    pub resend_endpoint: Option<String>,
    /// Resend API key
    pub resend_api_key: Option<String>,
    /// Sender address for contact emails
    pub mail_from: Option<String>,
    /// Inbox receiving contact emails
    pub mail_to: Option<String>,
    /// Latency of the simulated submitter in milliseconds
    pub simulated_delay_ms: Option<u64>,
    /// Failure probability of the simulated submitter
    pub simulated_failure_rate: Option<f64>,
    /// Accent color as `#rrggbb`
    pub accent_color: Option<String>,
}

impl SiteConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("no", "johannesservice", "nes-site")
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };

        config.apply_env(
            std::env::var("NES_SITE_SUBMITTER").ok(),
            std::env::var("RESEND_API_KEY").ok(),
        );
        Ok(config)
    }

    fn apply_env(&mut self, submitter: Option<String>, api_key: Option<String>) {
        if let Some(value) = submitter {
            match SubmitterKind::parse(&value) {
                Some(kind) => self.submitter = Some(kind),
                None => tracing::warn!("Ignoring unknown NES_SITE_SUBMITTER value {value:?}"),
            }
        }
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            self.resend_api_key = Some(key);
        }
    }

    pub fn submitter_kind(&self) -> SubmitterKind {
        self.submitter.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert!(config.submitter.is_none());
        assert!(config.resend_api_key.is_none());
        assert!(config.simulated_delay_ms.is_none());
        assert!(config.accent_color.is_none());
        assert_eq!(config.submitter_kind(), SubmitterKind::Simulated);
    }

    #[test]
    fn test_serialization() {
        let config = SiteConfig {
            submitter: Some(SubmitterKind::Resend),
            resend_endpoint: Some("https://api.resend.com".to_string()),
            resend_api_key: Some("re_123".to_string()),
            mail_from: Some("skjema@johannesservice.no".to_string()),
            mail_to: Some("post@johannesservice.no".to_string()),
            simulated_delay_ms: Some(10),
            simulated_failure_rate: Some(0.5),
            accent_color: Some("#e67e22".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"resend\""));
        let parsed: SiteConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.submitter, Some(SubmitterKind::Resend));
        assert_eq!(parsed.resend_api_key, Some("re_123".to_string()));
        assert_eq!(parsed.simulated_delay_ms, Some(10));
        assert_eq!(parsed.simulated_failure_rate, Some(0.5));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: SiteConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.submitter.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"mail_to": "a@b.no", "unknown_field": "value"}"#;
        let parsed: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.mail_to, Some("a@b.no".to_string()));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = SiteConfig::default();
        config.apply_env(Some(" Resend ".to_string()), Some("re_env".to_string()));
        assert_eq!(config.submitter, Some(SubmitterKind::Resend));
        assert_eq!(config.resend_api_key, Some("re_env".to_string()));
    }

    #[test]
    fn test_unknown_env_submitter_is_ignored() {
        let mut config = SiteConfig {
            submitter: Some(SubmitterKind::Resend),
            ..Default::default()
        };
        config.apply_env(Some("carrier-pigeon".to_string()), Some(String::new()));
        assert_eq!(config.submitter, Some(SubmitterKind::Resend));
        assert!(config.resend_api_key.is_none());
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = SiteConfig::config_path();
    }
}
