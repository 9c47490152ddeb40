use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;

use checkin_domain::{ClientSettings, EventId, DEFAULT_PAGE_SIZE};

use super::validation::{validate_base_url, validate_page_size};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub api_token: Option<String>,
    pub event_id: String,
    pub page_size: u32,
    pub scan_cooldown_ms: u64,
    pub log_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            api_token: None,
            event_id: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            scan_cooldown_ms: 1200,
            log_dir: None,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> PathBuf {
        PathBuf::from(env::var("CHECKIN_CONFIG").unwrap_or_else(|_| "./checkin.toml".to_string()))
    }

    /// A missing file is not an error: defaults and the environment apply.
    pub async fn load_from(file_path: &Path) -> Result<Self> {
        let base_dir = file_path.parent();
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            Self::from_toml(&content)?
        } else {
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        self.base_url = self.base_url.trim().trim_end_matches('/').to_string();
        self.event_id = self.event_id.trim().to_string();
        if let Some(token) = &self.api_token {
            if token.trim().is_empty() {
                self.api_token = None;
            }
        }
        if let Some(dir) = &self.log_dir {
            if dir.trim().is_empty() {
                self.log_dir = None;
            }
        }
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        if let Some(dir) = &self.log_dir {
            self.log_dir = Some(resolve_path(base, dir));
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_base_url(&self.base_url)?;
        if self.event_id.is_empty() {
            return Err(anyhow!("event_id must not be empty"));
        }
        validate_page_size(self.page_size)?;
        if self.scan_cooldown_ms == 0 {
            return Err(anyhow!("scan_cooldown_ms must be greater than 0"));
        }
        Ok(())
    }

    /// Settings that load fine but will likely fail against a real server.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.api_token.is_none() {
            warnings.push(
                "api_token is not set, requests will carry no Authorization header".to_string(),
            );
        }
        warnings
    }

    pub fn to_client_settings(&self) -> ClientSettings {
        ClientSettings {
            event_id: EventId(self.event_id.clone()),
            page_size: self.page_size,
            scan_cooldown: Duration::from_millis(self.scan_cooldown_ms),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("CHECKIN_BASE_URL") {
            self.base_url = value;
        }
        if let Ok(value) = env::var("CHECKIN_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Ok(value) = env::var("CHECKIN_EVENT_ID") {
            self.event_id = value;
        }
        if let Ok(value) = env::var("CHECKIN_PAGE_SIZE") {
            self.page_size = value.parse().unwrap_or(self.page_size);
        }
        if let Ok(value) = env::var("CHECKIN_SCAN_COOLDOWN_MS") {
            self.scan_cooldown_ms = value.parse().unwrap_or(self.scan_cooldown_ms);
        }
        if let Ok(value) = env::var("CHECKIN_LOG_DIR") {
            self.log_dir = Some(value);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}
