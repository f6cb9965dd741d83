//! Repository source trait.

use super::model::ProjectRecord;
use crate::config::FolioConfig;
use crate::error::Result;

/// A provider of the owner's public repositories.
///
/// Implementations issue a single request per call and perform no retries.
/// Results are ordered most recently updated first and hold at most
/// [`super::MAX_PROJECTS`] records.
#[async_trait::async_trait]
pub trait RepositorySource: Send + Sync {
    /// Fetches the repositories of `config.github.user`.
    ///
    /// # Returns
    ///
    /// - `Ok(vec![])`: No owner configured
    /// - `Ok(Vec<ProjectRecord>)`: Repositories, newest first
    /// - `Err(FolioError::MissingCredential)`: Owner set but no token
    /// - `Err(FolioError)`: Upstream rejection or network fault
    async fn fetch_repos(&self, config: &FolioConfig) -> Result<Vec<ProjectRecord>>;
}
