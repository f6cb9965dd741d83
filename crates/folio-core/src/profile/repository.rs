//! Fallback profile repository trait.

use super::model::{FallbackProfile, ProfileRecord};
use crate::error::Result;

/// Access to the locally curated fallback profile and the merged output.
pub trait FallbackProfileRepository: Send + Sync {
    /// Loads the fallback record.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(FallbackProfile))`: File found and parsed
    /// - `Ok(None)`: File does not exist or is empty
    /// - `Err(FolioError)`: File exists but cannot be read or parsed
    fn load_fallback(&self) -> Result<Option<FallbackProfile>>;

    /// Persists a merged profile for later static builds.
    fn save_merged(&self, profile: &ProfileRecord) -> Result<()>;
}
