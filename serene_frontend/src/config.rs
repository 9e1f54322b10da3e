use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the companion API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bearer token sent with every request
    #[serde(default)]
    pub api_token: Option<String>,

    /// Signed-in user; mood and activities are skipped without one
    #[serde(default)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub user_email: Option<String>,

    /// Where local state (the upcoming events list) is written
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Seconds between automatic carousel advances
    #[serde(default = "default_carousel_interval")]
    pub carousel_interval_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_token: None,
            user_id: None,
            user_email: None,
            data_dir: None,
            carousel_interval_secs: default_carousel_interval(),
        }
    }
}

impl AppConfig {
    /// Reads the config file if present, then applies environment overrides.
    pub fn load() -> Self {
        let mut config = match config_path() {
            Some(path) if path.exists() => Self::from_file(&path).unwrap_or_else(|err| {
                warn!("ignoring config at {}: {err}", path.display());
                Self::default()
            }),
            _ => Self::default(),
        };
        config.apply_env(|key| env::var(key).ok());
        config
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(url) = non_empty("SERENE_API_URL") {
            self.api_url = url;
        }
        if let Some(token) = non_empty("SERENE_API_TOKEN") {
            self.api_token = Some(token);
        }
        if let Some(user_id) = non_empty("SERENE_USER_ID") {
            self.user_id = Some(user_id);
        }
        if let Some(dir) = non_empty("SERENE_DATA_DIR") {
            self.data_dir = Some(PathBuf::from(dir));
        }
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_secs(self.carousel_interval_secs.max(1))
    }

    /// Configured data directory, falling back to the platform data dir.
    pub fn resolved_data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("serene")))
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("serene").join("config.toml"))
}

fn default_api_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_carousel_interval() -> u64 {
    5
}
