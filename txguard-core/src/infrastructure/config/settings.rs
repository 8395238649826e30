// txguard-core/src/infrastructure/config/settings.rs

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::infrastructure::error::InfrastructureError;

const CONFIG_CANDIDATES: [&str; 2] = ["txguard.yaml", "txguard.yml"];

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    #[validate(length(min = 1))]
    pub host: String,

    #[serde(default = "default_port")]
    #[validate(range(min = 1))]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct Settings {
    #[serde(default)]
    #[validate(nested)]
    pub server: ServerSettings,

    /// Uploads above this size are refused before parsing.
    #[serde(rename = "max-upload-bytes", default = "default_max_upload_bytes")]
    #[validate(range(min = 1))]
    pub max_upload_bytes: usize,

    /// Accept a header-only file and report it as valid with zero rows.
    #[serde(rename = "allow-empty", default)]
    pub allow_empty: bool,

    #[serde(rename = "log-format", default)]
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            max_upload_bytes: default_max_upload_bytes(),
            allow_empty: false,
            log_format: LogFormat::default(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

// --- LOADER ---

/// Loads `txguard.yaml` (or `.yml`) from `dir`, falling back to defaults when
/// no file exists, then applies `TXGUARD_*` environment overrides.
#[instrument]
pub fn load_settings(dir: &Path) -> Result<Settings, InfrastructureError> {
    let mut settings = match find_config(dir) {
        Some(path) => {
            info!(path = ?path, "Loading settings");
            let content = fs::read_to_string(&path)?;
            parse_settings(&content)?
        }
        None => Settings::default(),
    };

    apply_overrides(&mut settings, |key| std::env::var(key).ok())?;
    settings.validate()?;

    Ok(settings)
}

fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.exists())
}

pub fn parse_settings(content: &str) -> Result<Settings, InfrastructureError> {
    // An empty file deserializes to unit, not to an empty map
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Layering: values found through `lookup` win over the file.
/// Ex: TXGUARD_PORT=9000 txguard serve
pub fn apply_overrides<F>(settings: &mut Settings, lookup: F) -> Result<(), InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("TXGUARD_HOST") {
        info!(old = ?settings.server.host, new = ?val, "Overriding host via ENV");
        settings.server.host = val;
    }
    if let Some(val) = lookup("TXGUARD_PORT") {
        settings.server.port = parse_env("TXGUARD_PORT", &val)?;
    }
    if let Some(val) = lookup("TXGUARD_MAX_UPLOAD_BYTES") {
        settings.max_upload_bytes = parse_env("TXGUARD_MAX_UPLOAD_BYTES", &val)?;
    }
    if let Some(val) = lookup("TXGUARD_ALLOW_EMPTY") {
        settings.allow_empty = parse_env("TXGUARD_ALLOW_EMPTY", &val)?;
    }
    if let Some(val) = lookup("TXGUARD_LOG_FORMAT") {
        settings.log_format = match val.to_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            _ => {
                return Err(InfrastructureError::ConfigError(format!(
                    "TXGUARD_LOG_FORMAT must be 'pretty' or 'json', got '{}'",
                    val
                )));
            }
        };
    }
    Ok(())
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, InfrastructureError> {
    raw.trim().parse().map_err(|_| {
        InfrastructureError::ConfigError(format!("{} has an invalid value: '{}'", key, raw))
    })
}
