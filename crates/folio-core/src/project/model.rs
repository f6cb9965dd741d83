//! ProjectRecord domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound on the number of repositories requested per fetch.
pub const MAX_PROJECTS: usize = 100;

/// One externally hosted code repository.
///
/// Constructed fresh on every fetch and never mutated afterwards. `name` is
/// unique per owner and never empty; counts default to zero and `language`
/// to an empty string when the upstream response omits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub stars: u64,
    #[serde(default)]
    pub forks: u64,
    #[serde(default)]
    pub language: String,
    pub updated_at: DateTime<Utc>,
}

/// Orders records by `updated_at`, newest first, and caps the list at
/// [`MAX_PROJECTS`]. The sort is stable so equal timestamps keep upstream order.
pub fn sort_most_recent_first(records: &mut Vec<ProjectRecord>) {
    records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    records.truncate(MAX_PROJECTS);
}
