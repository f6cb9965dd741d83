//! Gains domain models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;

/// A labeled category total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GainEntry {
    pub label: String,
    pub value: f64,
}

/// A dated point of the time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GainPoint {
    pub date: String,
    pub value: f64,
}

/// Metrics for one hosted project. Both sequences default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GainsRecord {
    pub entries: Vec<GainEntry>,
    pub timeline: Vec<GainPoint>,
}

impl GainsRecord {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.timeline.is_empty()
    }
}

/// Project name to gains.
pub type GainsMap = BTreeMap<String, GainsRecord>;

/// Per-project digest written to `gains.summary.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GainsSummary {
    pub total_value: f64,
    pub entry_count: usize,
    pub timeline_points: usize,
}

/// Parses the gains file body. Top-level keys are project names.
pub fn parse_gains(content: &str) -> Result<GainsMap> {
    if content.trim().is_empty() {
        return Ok(GainsMap::new());
    }
    Ok(serde_json::from_str(content)?)
}
