//! Configuration service implementation.
//!
//! Builds the single [`FolioConfig`] used for a run: defaults, then the TOML
//! file (`~/.config/folio/config.toml` or an explicit path), then environment
//! variables. CLI flags are applied on top by the binary.

use crate::paths::FolioPaths;
use folio_core::config::DataDir;
use folio_core::{FolioConfig, FolioError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_GITHUB_USER: &str = "FOLIO_GITHUB_USER";
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_GITHUB_ENDPOINT: &str = "FOLIO_GITHUB_ENDPOINT";
pub const ENV_PROFILE_URL: &str = "FOLIO_PROFILE_URL";
pub const ENV_DATA_DIR: &str = "FOLIO_DATA_DIR";
pub const ENV_SITE_NAME: &str = "FOLIO_SITE_NAME";
pub const ENV_SITE_DESCRIPTION: &str = "FOLIO_SITE_DESCRIPTION";

/// Loads the pipeline configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigService {
    /// Explicit config file. When set, the file must exist.
    path: Option<PathBuf>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Loads file settings and overlays the process environment.
    pub fn load(&self) -> Result<FolioConfig> {
        let mut config = self.load_file()?;
        apply_env(&mut config, |key| std::env::var(key).ok());
        Ok(config)
    }

    /// Loads only the TOML file layer.
    ///
    /// A missing default file yields defaults; a missing explicit file is a
    /// configuration error.
    pub fn load_file(&self) -> Result<FolioConfig> {
        let (path, explicit) = match &self.path {
            Some(path) => (path.clone(), true),
            None => match FolioPaths::config_file() {
                Ok(path) => (path, false),
                Err(e) => {
                    tracing::debug!("No config directory ({}), using defaults", e);
                    return Ok(FolioConfig::default());
                }
            },
        };

        if !path.exists() {
            if explicit {
                return Err(FolioError::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Ok(FolioConfig::default());
        }

        read_toml(&path)
    }
}

fn read_toml(path: &Path) -> Result<FolioConfig> {
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(FolioConfig::default());
    }
    let config = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

/// Overlays environment values. Blank values are ignored.
pub fn apply_env(config: &mut FolioConfig, lookup: impl Fn(&str) -> Option<String>) {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(user) = get(ENV_GITHUB_USER) {
        config.github.user = user;
    }
    if let Some(token) = get(ENV_GITHUB_TOKEN) {
        config.github.token = Some(token);
    }
    if let Some(endpoint) = get(ENV_GITHUB_ENDPOINT) {
        config.github.endpoint = endpoint;
    }
    if let Some(url) = get(ENV_PROFILE_URL) {
        config.profile.url = Some(url);
    }
    if let Some(dir) = get(ENV_DATA_DIR) {
        config.data_dir = DataDir(PathBuf::from(dir));
    }
    if let Some(name) = get(ENV_SITE_NAME) {
        config.site.name = name;
    }
    if let Some(description) = get(ENV_SITE_DESCRIPTION) {
        config.site.description = description;
    }
}
