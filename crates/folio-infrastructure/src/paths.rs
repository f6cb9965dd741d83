//! Path management for folio configuration files.
//!
//! ```text
//! ~/.config/folio/             # Config directory (platform default via `dirs`)
//! └── config.toml              # Optional pipeline configuration
//!
//! ./data/                      # Data directory (FolioConfig::data_dir)
//! ├── gains.json               # Per-project gains (input)
//! ├── profile.fallback.json    # Curated fallback profile (input)
//! ├── profile.merged.json      # Merged profile (output)
//! ├── gains.csv                # Flattened gains (output)
//! └── gains.summary.json       # Per-project digest (output)
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

pub struct FolioPaths;

impl FolioPaths {
    /// Returns the folio configuration directory (e.g. `~/.config/folio/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("folio"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file() {
        // Headless CI may lack a config dir; only check the shape when it resolves.
        if let Ok(config_file) = FolioPaths::config_file() {
            assert!(config_file.ends_with("folio/config.toml"));
            let config_dir = FolioPaths::config_dir().unwrap();
            assert!(config_file.starts_with(&config_dir));
        }
    }
}
