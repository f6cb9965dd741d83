//! Profile domain models.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One position on the owner's work history.
///
/// No identity beyond its position in the owning sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

/// One project listed on the owner's profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub metrics: Option<BTreeMap<String, f64>>,
}

/// Raw extraction artifacts kept for debugging, never for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDiagnostics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_ld: Option<Value>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// The normalized, always well-formed public profile.
///
/// Every field except `source_url` may be empty; the record is constructible
/// even when every extraction stage fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileRecord {
    pub source_url: String,
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub summary: Option<String>,
    pub experiences: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub raw: ProfileDiagnostics,
}

impl ProfileRecord {
    /// A record with no extracted data for the given source.
    pub fn empty(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            ..Default::default()
        }
    }

    /// An empty record carrying a failed HTTP status and the start of the body.
    pub fn rejected(source_url: impl Into<String>, status: u16, body_snippet: String) -> Self {
        let mut record = Self::empty(source_url);
        record.raw.error_status = Some(status);
        record.raw.body_snippet = Some(body_snippet);
        record
    }

    /// An empty record carrying a network fault description.
    pub fn failed(source_url: impl Into<String>, error: impl Into<String>) -> Self {
        let mut record = Self::empty(source_url);
        record.raw.error = Some(error.into());
        record
    }

    /// Copy without the diagnostic bag, for comparisons across runs.
    pub fn without_diagnostics(&self) -> Self {
        Self {
            raw: ProfileDiagnostics::default(),
            ..self.clone()
        }
    }

    /// True when no scalar field and no sequence holds data.
    pub fn is_blank(&self) -> bool {
        self.full_name.is_none()
            && self.headline.is_none()
            && self.location.is_none()
            && self.avatar_url.is_none()
            && self.summary.is_none()
            && self.experiences.is_empty()
            && self.projects.is_empty()
    }
}

/// Shape of the locally curated fallback file (`profile.fallback.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FallbackProfile {
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
    pub avatar_url: Option<String>,
    pub experiences: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_has_only_source_url() {
        let record = ProfileRecord::empty("");
        assert_eq!(record.source_url, "");
        assert!(record.is_blank());
        assert_eq!(record.raw, ProfileDiagnostics::default());
    }

    #[test]
    fn test_rejected_records_status_and_snippet() {
        let record = ProfileRecord::rejected("https://example.com/in/x/", 999, "denied".into());
        assert!(record.is_blank());
        assert_eq!(record.raw.error_status, Some(999));
        assert_eq!(record.raw.body_snippet.as_deref(), Some("denied"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut record = ProfileRecord::empty("https://example.com/in/jane/");
        record.full_name = Some("Jane Doe".into());
        record.avatar_url = Some("https://cdn.example.com/jane.png".into());

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["sourceUrl"], "https://example.com/in/jane/");
        assert_eq!(value["fullName"], "Jane Doe");
        assert_eq!(value["avatarUrl"], "https://cdn.example.com/jane.png");
        assert!(value["headline"].is_null());
    }

    #[test]
    fn test_fallback_accepts_partial_file() {
        let fallback: FallbackProfile =
            serde_json::from_str(r#"{"fullName": "Jane Doe", "projects": [{"name": "X"}]}"#)
                .unwrap();
        assert_eq!(fallback.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(fallback.projects.len(), 1);
        assert_eq!(fallback.projects[0].name.as_deref(), Some("X"));
        assert!(fallback.experiences.is_empty());
    }
}
