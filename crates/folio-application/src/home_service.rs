//! Home and project page use cases.

use folio_core::gains::{GainsMap, GainsRepository, gains_for, reconcile};
use folio_core::profile::{FallbackProfileRepository, ProfileRecord, ProfileSource, merge_fallback};
use folio_core::project::{ProjectRecord, RepositorySource};
use folio_core::{FolioConfig, HomeData, ProjectDetail, Result};
use folio_infrastructure::{JsonFallbackProfileRepository, JsonGainsRepository};
use folio_interaction::{GithubApiClient, ProfileScraper};
use std::sync::Arc;

/// Builds [`HomeData`] and [`ProjectDetail`] from injected sources.
///
/// Remote sources and local repositories are trait objects so tests can
/// substitute stubs for the network and the data directory.
pub struct HomeService {
    config: FolioConfig,
    repositories: Arc<dyn RepositorySource>,
    profiles: Arc<dyn ProfileSource>,
    gains: Arc<dyn GainsRepository>,
    fallback: Arc<dyn FallbackProfileRepository>,
}

impl HomeService {
    pub fn new(
        config: FolioConfig,
        repositories: Arc<dyn RepositorySource>,
        profiles: Arc<dyn ProfileSource>,
        gains: Arc<dyn GainsRepository>,
        fallback: Arc<dyn FallbackProfileRepository>,
    ) -> Self {
        Self {
            config,
            repositories,
            profiles,
            gains,
            fallback,
        }
    }

    /// Wires the GraphQL client, the profile scraper and the JSON files under
    /// `config.data_dir`.
    pub fn from_config(config: FolioConfig) -> Self {
        let data_dir = &config.data_dir;
        let gains = Arc::new(JsonGainsRepository::new(data_dir.gains_file()));
        let fallback = Arc::new(JsonFallbackProfileRepository::new(
            data_dir.fallback_profile_file(),
            data_dir.merged_profile_file(),
        ));
        let profiles = Arc::new(ProfileScraper::new(&config.profile));
        Self::new(
            config,
            Arc::new(GithubApiClient::new()),
            profiles,
            gains,
            fallback,
        )
    }

    /// Landing page data: repositories, reconciled gains and merged profile.
    ///
    /// The repository fetch and the profile scrape run concurrently.
    pub async fn home_data(&self) -> HomeData {
        let (repos, scraped) = tokio::join!(self.repos(), self.scrape());

        let mut gains = self.gains();
        reconcile(&mut gains, &repos);
        let profile = self.merge_with_fallback(scraped);

        tracing::info!(
            repos = repos.len(),
            gains = gains.len(),
            has_profile = !profile.is_blank(),
            "Built home data"
        );
        HomeData {
            site: self.config.site.clone(),
            repos,
            gains,
            profile,
        }
    }

    /// Repository and gains for one project. Unknown names yield no repository
    /// and empty gains.
    pub async fn project_detail(&self, name: &str) -> ProjectDetail {
        let repo = self.repos().await.into_iter().find(|r| r.name == name);
        if repo.is_none() {
            tracing::debug!(name, "No fetched repository matches the project name");
        }
        ProjectDetail {
            repo,
            gains: gains_for(&self.gains(), name),
        }
    }

    /// Scraped profile merged over the local fallback record.
    pub async fn merged_profile(&self) -> ProfileRecord {
        let scraped = self.scrape().await;
        self.merge_with_fallback(scraped)
    }

    /// Merges the profile and persists it next to the fallback file.
    pub async fn write_merged_profile(&self) -> Result<ProfileRecord> {
        let profile = self.merged_profile().await;
        self.fallback.save_merged(&profile)?;
        Ok(profile)
    }

    /// The local gains file as-is, empty when absent or malformed.
    pub fn gains(&self) -> GainsMap {
        self.gains.load().unwrap_or_else(|err| {
            tracing::warn!("Ignoring unreadable gains file: {err}");
            GainsMap::new()
        })
    }

    async fn repos(&self) -> Vec<ProjectRecord> {
        match self.repositories.fetch_repos(&self.config).await {
            Ok(repos) => repos,
            Err(err) if err.is_missing_credential() => {
                tracing::warn!("Skipping repository fetch: {err}");
                Vec::new()
            }
            Err(err) => {
                tracing::warn!("Repository fetch failed: {err}");
                Vec::new()
            }
        }
    }

    async fn scrape(&self) -> ProfileRecord {
        self.profiles
            .scrape(self.config.profile.url.as_deref())
            .await
    }

    fn merge_with_fallback(&self, scraped: ProfileRecord) -> ProfileRecord {
        let fallback = self.fallback.load_fallback().unwrap_or_else(|err| {
            tracing::warn!("Ignoring unreadable fallback profile: {err}");
            None
        });
        merge_fallback(scraped, fallback)
    }
}
