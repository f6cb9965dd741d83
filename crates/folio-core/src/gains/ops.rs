//! Operations over a [`GainsMap`].

use std::collections::BTreeMap;

use super::model::{GainsMap, GainsRecord, GainsSummary};
use crate::project::ProjectRecord;

/// Gives every fetched project a gains record, inserting an empty one where
/// the local file has none. Existing records are left untouched.
pub fn reconcile(gains: &mut GainsMap, projects: &[ProjectRecord]) {
    for project in projects {
        gains.entry(project.name.clone()).or_default();
    }
}

/// Gains for one project, empty when the map has no such key.
pub fn gains_for(gains: &GainsMap, name: &str) -> GainsRecord {
    gains.get(name).cloned().unwrap_or_default()
}

/// Sums entry values per label across all projects.
pub fn aggregate_by_label(gains: &GainsMap) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for record in gains.values() {
        for entry in &record.entries {
            *totals.entry(entry.label.clone()).or_insert(0.0) += entry.value;
        }
    }
    totals
}

pub fn summarize(gains: &GainsMap) -> BTreeMap<String, GainsSummary> {
    gains
        .iter()
        .map(|(name, record)| {
            let summary = GainsSummary {
                total_value: record.entries.iter().map(|e| e.value).sum(),
                entry_count: record.entries.len(),
                timeline_points: record.timeline.len(),
            };
            (name.clone(), summary)
        })
        .collect()
}

/// Flattens the map into `project,type,label,value,date` rows.
///
/// Labels are always quoted with embedded quotes doubled; timeline rows
/// leave the label empty and entry rows leave the date empty.
pub fn to_csv(gains: &GainsMap) -> String {
    let mut rows = vec!["project,type,label,value,date".to_string()];
    for (project, record) in gains {
        for entry in &record.entries {
            rows.push(format!(
                "{},entry,\"{}\",{},",
                project,
                entry.label.replace('"', "\"\""),
                entry.value
            ));
        }
        for point in &record.timeline {
            rows.push(format!("{},timeline,,{},{}", project, point.value, point.date));
        }
    }
    rows.join("\n")
}
