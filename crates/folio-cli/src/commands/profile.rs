use super::utils::print_json;
use anyhow::{Context, Result};
use folio_application::HomeService;
use folio_core::FolioConfig;

pub async fn run(config: FolioConfig, write: bool) -> Result<()> {
    let service = HomeService::from_config(config);
    let profile = if write {
        service
            .write_merged_profile()
            .await
            .context("Failed to write merged profile")?
    } else {
        service.merged_profile().await
    };
    print_json(&profile)
}
