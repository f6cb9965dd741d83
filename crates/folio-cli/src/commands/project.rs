use super::utils::print_json;
use anyhow::Result;
use folio_application::HomeService;
use folio_core::FolioConfig;

pub async fn run(config: FolioConfig, name: &str) -> Result<()> {
    let detail = HomeService::from_config(config).project_detail(name).await;
    print_json(&detail)
}
