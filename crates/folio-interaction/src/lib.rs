//! Remote sources for Folio: the repository GraphQL client and the public
//! profile scraper with its layered extraction stages.

pub mod extract;
pub mod github_api_client;
pub mod profile_scraper;

pub use github_api_client::GithubApiClient;
pub use profile_scraper::{ProfileScraper, normalize_profile_url};
