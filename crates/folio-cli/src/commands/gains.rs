use super::utils::print_json;
use anyhow::{Context, Result};
use folio_core::FolioConfig;
use folio_core::gains::{GainsRepository, GainsSummary, aggregate_by_label, summarize};
use folio_infrastructure::JsonGainsRepository;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GainsReport {
    projects: BTreeMap<String, GainsSummary>,
    total_by_label: BTreeMap<String, f64>,
}

fn repository(config: &FolioConfig) -> JsonGainsRepository {
    JsonGainsRepository::new(config.data_dir.gains_file())
}

pub fn summary(config: &FolioConfig) -> Result<()> {
    let repo = repository(config);
    let gains = repo
        .load()
        .with_context(|| format!("Failed to read {}", repo.path().display()))?;
    print_json(&GainsReport {
        projects: summarize(&gains),
        total_by_label: aggregate_by_label(&gains),
    })
}

pub fn export(config: &FolioConfig) -> Result<()> {
    let repo = repository(config);
    let gains = repo
        .load()
        .with_context(|| format!("Failed to read {}", repo.path().display()))?;
    repo.export(
        &gains,
        &config.data_dir.gains_csv_file(),
        &config.data_dir.gains_summary_file(),
    )
    .context("Failed to export gains")?;
    Ok(())
}
