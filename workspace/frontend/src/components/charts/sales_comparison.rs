use common::charts::sales_comparison_options;
use common::{sales_series, SalesRecord};
use serde_json::Value;
use yew::prelude::*;

use super::apex::ApexChart;
use super::ChartCard;

#[derive(Properties, PartialEq)]
pub struct SalesComparisonChartProps {
    pub records: Vec<SalesRecord>,
}

/// Four sales metrics of the selected TIN, one point per filed month.
#[function_component(SalesComparisonChart)]
pub fn sales_comparison_chart(props: &SalesComparisonChartProps) -> Html {
    let chart = use_memo(props.records.clone(), |records| {
        let set = sales_series(records);
        log::debug!(
            "Sales comparison: {} categories, {} series",
            set.categories.len(),
            set.series.len()
        );
        let series = serde_json::to_value(&set.series).unwrap_or_else(|err| {
            log::error!("Failed to serialise sales series: {}", err);
            Value::Array(Vec::new())
        });
        (sales_comparison_options(&set.categories), series)
    });

    html! {
        <ChartCard title="Sales Comparison">
            <ApexChart config={chart.0.clone()} series={chart.1.clone()} />
        </ChartCard>
    }
}
