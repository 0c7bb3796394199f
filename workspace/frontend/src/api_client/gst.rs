use common::{SalesComparison, SalesQuery};

use crate::api_client;

fn query_params(query: &SalesQuery) -> Vec<(&'static str, String)> {
    vec![
        ("tin", query.tin.clone()),
        ("start_date", query.start_date.to_string()),
        ("end_date", query.end_date.to_string()),
    ]
}

/// Monthly sales summaries of a TIN over a date range
pub async fn get_sales_comparison(query: SalesQuery) -> Result<SalesComparison, String> {
    log::trace!(
        "Fetching sales comparison for TIN {} ({} to {})",
        query.tin,
        query.start_date,
        query.end_date
    );
    let result: Result<SalesComparison, String> =
        api_client::get_with_query("/gst/sales-comparison", &query_params(&query)).await;
    match &result {
        Ok(comparison) => log::info!(
            "Fetched sales comparison for TIN {}: {} years",
            query.tin,
            comparison.records.len()
        ),
        Err(e) => log::error!("Failed to fetch sales comparison for TIN {}: {}", query.tin, e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_are_sent_in_report_format() {
        let params = query_params(&SalesQuery::default());
        assert_eq!(
            params,
            vec![
                ("tin", "500000009".to_string()),
                ("start_date", "01-01-2021".to_string()),
                ("end_date", "31-12-2022".to_string()),
            ]
        );
    }
}
