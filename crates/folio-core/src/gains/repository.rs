//! Gains repository trait.

use super::model::GainsMap;
use crate::error::Result;

/// Read access to the local gains file.
///
/// Absence of the file is a normal state, not an error.
pub trait GainsRepository: Send + Sync {
    /// Loads every project's gains.
    ///
    /// # Returns
    ///
    /// - `Ok(GainsMap)`: Parsed map, empty when the file does not exist
    /// - `Err(FolioError)`: File exists but cannot be read or parsed
    fn load(&self) -> Result<GainsMap>;
}
