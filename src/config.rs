use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::Organization;

pub const DEFAULT_CONFIG_PATH: &str = "config/asan_chat.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the chatbot backend, without a trailing slash.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_org")]
    pub default_org: String,
    #[serde(default = "default_organizations")]
    pub organizations: Vec<Organization>,
    /// Preset questions offered in a fresh transcript.
    #[serde(default = "default_quick_questions")]
    pub quick_questions: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            default_org: default_org(),
            organizations: default_organizations(),
            quick_questions: default_quick_questions(),
        }
    }
}

fn default_api_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_org() -> String {
    "asan_xidmet".to_string()
}

fn default_organizations() -> Vec<Organization> {
    vec![
        Organization {
            id: "asan_xidmet".to_string(),
            label: "ASAN Xidmət".to_string(),
        },
        Organization {
            id: "dost_merkezi".to_string(),
            label: "DOST Mərkəzi".to_string(),
        },
        Organization {
            id: "miqrasiya_xidmeti".to_string(),
            label: "Dövlət Miqrasiya Xidməti".to_string(),
        },
    ]
}

fn default_quick_questions() -> Vec<String> {
    vec![
        "Doğum haqqında şəhadətnaməni necə ala bilərəm?".to_string(),
        "Şəxsiyyət vəsiqəsimi necə dəyişdirə bilərəm?".to_string(),
        "ASAN xidmətin iş saatları necədir?".to_string(),
    ]
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

pub fn save_config(path: &str, config: &AppConfig) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gets_all_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:5000");
        assert_eq!(config.default_org, "asan_xidmet");
        assert_eq!(config.organizations.len(), 3);
        assert_eq!(config.quick_questions.len(), 3);
    }

    #[test]
    fn partial_config_keeps_unset_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"api_url": "http://chat.asan.gov.az"}"#).unwrap();
        assert_eq!(config.api_url, "http://chat.asan.gov.az");
        assert_eq!(config.default_org, "asan_xidmet");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config("does/not/exist.json");
        assert_eq!(config.default_org, "asan_xidmet");
    }

    #[test]
    fn save_creates_parent_dirs_and_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("asan_chat.json");
        let path = path.to_str().unwrap();

        let mut config = AppConfig::default();
        config.api_url = "http://chat.asan.gov.az".to_string();
        save_config(path, &config).unwrap();

        let loaded = load_config(path);
        assert_eq!(loaded.api_url, "http://chat.asan.gov.az");
        assert_eq!(loaded.organizations.len(), 3);
    }
}
