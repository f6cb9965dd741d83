//! JSON-backed gains repository.

use crate::storage::{JsonFile, write_atomic};
use folio_core::Result;
use folio_core::gains::{GainsMap, GainsRepository, parse_gains, summarize, to_csv};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads `gains.json` and writes its derived exports.
///
/// # Example
///
/// ```ignore
/// use folio_infrastructure::JsonGainsRepository;
/// use folio_core::repository::GainsRepository;
///
/// let repo = JsonGainsRepository::new("data/gains.json");
/// let gains = repo.load()?;
/// ```
#[derive(Debug, Clone)]
pub struct JsonGainsRepository {
    path: PathBuf,
}

impl JsonGainsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `gains.csv` and `gains.summary.json` next to each other.
    pub fn export(&self, gains: &GainsMap, csv_path: &Path, summary_path: &Path) -> Result<()> {
        write_atomic(csv_path, to_csv(gains).as_bytes())?;
        JsonFile::new(summary_path.to_path_buf()).save(&summarize(gains))?;
        tracing::info!(
            csv = %csv_path.display(),
            summary = %summary_path.display(),
            projects = gains.len(),
            "Exported gains"
        );
        Ok(())
    }
}

impl GainsRepository for JsonGainsRepository {
    fn load(&self) -> Result<GainsMap> {
        if !self.path.exists() {
            return Ok(GainsMap::new());
        }
        let gains = parse_gains(&fs::read_to_string(&self.path)?)?;
        tracing::debug!(path = %self.path.display(), projects = gains.len(), "Loaded gains");
        Ok(gains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_absent_file_is_empty_map() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonGainsRepository::new(temp_dir.path().join("gains.json"));
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_loads_and_defaults_sequences() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gains.json");
        fs::write(
            &path,
            r#"{"repo-a": {"entries": [{"label": "x", "value": 5}], "timeline": []}, "repo-b": {"timeline": [{"date": "2024-02-01", "value": 1}]}}"#,
        )
        .unwrap();

        let gains = JsonGainsRepository::new(&path).load().unwrap();
        assert_eq!(gains["repo-a"].entries.len(), 1);
        assert!(gains["repo-b"].entries.is_empty());
        assert_eq!(gains["repo-b"].timeline[0].date, "2024-02-01");
    }

    #[test]
    fn test_export_writes_csv_and_summary() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gains.json");
        fs::write(&path, r#"{"repo-a": {"entries": [{"label": "x", "value": 5}]}}"#).unwrap();
        let repo = JsonGainsRepository::new(&path);
        let gains = repo.load().unwrap();

        let csv_path = temp_dir.path().join("gains.csv");
        let summary_path = temp_dir.path().join("gains.summary.json");
        repo.export(&gains, &csv_path, &summary_path).unwrap();

        let csv = fs::read_to_string(&csv_path).unwrap();
        assert!(csv.starts_with("project,type,label,value,date\n"));
        assert!(csv.contains("repo-a,entry,\"x\",5,"));

        let summary: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&summary_path).unwrap()).unwrap();
        assert_eq!(summary["repo-a"]["entryCount"], 1);
        assert_eq!(summary["repo-a"]["totalValue"], 5.0);
    }
}
