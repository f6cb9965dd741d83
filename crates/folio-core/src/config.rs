//! Pipeline configuration.
//!
//! A single [`FolioConfig`] is built once at process start (defaults, then the
//! TOML file, then environment, then CLI flags) and passed by reference into
//! every component entry point.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_GITHUB_ENDPOINT: &str = "https://api.github.com/graphql";
pub const DEFAULT_PROFILE_BASE_URL: &str = "https://www.linkedin.com/in/";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120 Safari/537.36 PortfolioScraper/1.0";

/// Root configuration.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct FolioConfig {
    pub github: GithubSettings,
    pub profile: ProfileSettings,
    pub site: SiteSettings,
    /// Directory holding `gains.json`, `profile.fallback.json` and generated outputs.
    pub data_dir: DataDir,
}

/// Source-control hosting settings.
#[derive(Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct GithubSettings {
    /// Owner login. Empty means "nothing to fetch".
    pub user: String,
    pub token: Option<String>,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for GithubSettings {
    fn default() -> Self {
        Self {
            user: String::new(),
            token: None,
            endpoint: DEFAULT_GITHUB_ENDPOINT.to_string(),
            timeout_secs: 15,
        }
    }
}

impl fmt::Debug for GithubSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubSettings")
            .field("user", &self.user)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Public profile page settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ProfileSettings {
    /// Bare handle or absolute URL. Unset skips the scrape.
    pub url: Option<String>,
    /// Prefix used to turn a bare handle into a profile URL.
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub sections: SectionRules,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            url: None,
            base_url: DEFAULT_PROFILE_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
            sections: SectionRules::default(),
        }
    }
}

/// Tuning constants for the experience/project block scan.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SectionRules {
    /// Characters the flattened entry text is split on.
    pub separators: Vec<char>,
    pub min_experience_chars: usize,
    pub min_project_chars: usize,
}

impl Default for SectionRules {
    fn default() -> Self {
        Self {
            separators: vec!['·', '—', '\n'],
            min_experience_chars: 20,
            min_project_chars: 10,
        }
    }
}

/// Site identity shown on the landing page.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SiteSettings {
    pub name: String,
    pub description: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: "Portfolio".to_string(),
            description: String::new(),
        }
    }
}

/// Data directory wrapper so the default (`./data`) survives `#[serde(default)]`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct DataDir(pub PathBuf);

impl Default for DataDir {
    fn default() -> Self {
        Self(PathBuf::from("data"))
    }
}

impl DataDir {
    pub fn gains_file(&self) -> PathBuf {
        self.0.join("gains.json")
    }

    pub fn fallback_profile_file(&self) -> PathBuf {
        self.0.join("profile.fallback.json")
    }

    pub fn merged_profile_file(&self) -> PathBuf {
        self.0.join("profile.merged.json")
    }

    pub fn gains_csv_file(&self) -> PathBuf {
        self.0.join("gains.csv")
    }

    pub fn gains_summary_file(&self) -> PathBuf {
        self.0.join("gains.summary.json")
    }
}

impl FolioConfig {
    /// The trimmed API token, `None` when unset or blank.
    pub fn github_token(&self) -> Option<&str> {
        self.github
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}
