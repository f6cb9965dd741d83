//! Page-level aggregates handed to the render step.

use serde::{Deserialize, Serialize};

use crate::config::SiteSettings;
use crate::gains::{GainsMap, GainsRecord};
use crate::profile::ProfileRecord;
use crate::project::ProjectRecord;

/// Everything the landing page needs. Every field is always populated,
/// possibly with empty values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeData {
    pub site: SiteSettings,
    pub repos: Vec<ProjectRecord>,
    /// Contains a key for every entry of `repos`.
    pub gains: GainsMap,
    pub profile: ProfileRecord,
}

/// Data for a single project page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub repo: Option<ProjectRecord>,
    pub gains: GainsRecord,
}
