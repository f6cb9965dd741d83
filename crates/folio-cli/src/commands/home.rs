use super::utils::print_json;
use anyhow::Result;
use folio_application::HomeService;
use folio_core::FolioConfig;

pub async fn run(config: FolioConfig) -> Result<()> {
    let home = HomeService::from_config(config).home_data().await;
    print_json(&home)
}
