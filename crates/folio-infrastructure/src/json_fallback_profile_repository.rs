//! JSON-backed fallback profile repository.

use crate::storage::JsonFile;
use folio_core::Result;
use folio_core::profile::{FallbackProfile, FallbackProfileRepository, ProfileRecord};
use std::path::PathBuf;

/// Reads `profile.fallback.json` and writes `profile.merged.json`.
#[derive(Debug, Clone)]
pub struct JsonFallbackProfileRepository {
    fallback_path: PathBuf,
    merged_path: PathBuf,
}

impl JsonFallbackProfileRepository {
    pub fn new(fallback_path: impl Into<PathBuf>, merged_path: impl Into<PathBuf>) -> Self {
        Self {
            fallback_path: fallback_path.into(),
            merged_path: merged_path.into(),
        }
    }
}

impl FallbackProfileRepository for JsonFallbackProfileRepository {
    fn load_fallback(&self) -> Result<Option<FallbackProfile>> {
        JsonFile::new(self.fallback_path.clone()).load()
    }

    fn save_merged(&self, profile: &ProfileRecord) -> Result<()> {
        JsonFile::new(self.merged_path.clone()).save(profile)?;
        tracing::info!(path = %self.merged_path.display(), "Wrote merged profile");
        Ok(())
    }
}
