use common::Datasets;

use crate::api_client;

/// TINs and years available for filtering
pub async fn get_datasets() -> Result<Datasets, String> {
    log::trace!("Fetching datasets");
    let result: Result<Datasets, String> = api_client::get("/datasets").await;
    match &result {
        Ok(datasets) => log::info!(
            "Fetched datasets: {} TINs, {} years",
            datasets.tins.len(),
            datasets.years.len()
        ),
        Err(e) => log::error!("Failed to fetch datasets: {}", e),
    }
    result
}
