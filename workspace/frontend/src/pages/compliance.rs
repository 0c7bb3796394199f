use common::{DatasetsQuery, SalesQuery, Tenure};
use yew::prelude::*;

use crate::api_client::datasets::get_datasets;
use crate::api_client::gst::get_sales_comparison;
use crate::common::loading::Loading;
use crate::components::charts::{
    EmployeeLineChart, EmployeeRadarChart, MonthlySalesTaxSummaryChart, SalesComparisonChart,
    SalesIncomeChart, SwtSalariesChart, TaxpayersRiskChart,
};
use crate::components::filters::{TenureFilter, TinSelector};
use crate::hooks::use_query;

/// Filters, live sales comparison and the illustrative compliance charts.
#[function_component(CompliancePage)]
pub fn compliance_page() -> Html {
    let datasets = use_query(Some(DatasetsQuery), |_| get_datasets());
    let sales_query = use_state(SalesQuery::default);
    let sales = use_query(Some((*sales_query).clone()), get_sales_comparison);

    let selected_tin = use_state(|| None::<String>);
    let tenure = use_state(Tenure::default);

    let tins = datasets
        .view
        .data
        .as_ref()
        .map(|d| d.tins.clone())
        .unwrap_or_default();
    let years = datasets
        .view
        .data
        .as_ref()
        .map(|d| d.years.clone())
        .unwrap_or_default();

    // The first TIN is selected once datasets arrive
    {
        let selected_tin = selected_tin.clone();
        let first_tin = datasets
            .view
            .data
            .as_ref()
            .and_then(|d| d.first_tin())
            .map(str::to_string);
        use_effect_with(first_tin, move |first_tin| {
            if let Some(tin) = first_tin {
                log::debug!("Selecting first TIN {}", tin);
                selected_tin.set(Some(tin.clone()));
            }
            || ()
        });
    }

    let on_select_tin = {
        let selected_tin = selected_tin.clone();
        Callback::from(move |tin: String| selected_tin.set(Some(tin)))
    };

    let on_tenure_change = {
        let tenure = tenure.clone();
        Callback::from(move |value: Tenure| tenure.set(value))
    };

    let on_search = {
        let sales_query = sales_query.clone();
        let selected_tin = selected_tin.clone();
        let tenure = tenure.clone();
        let years = years.clone();
        let refetch = sales.refetch.clone();
        Callback::from(move |_: MouseEvent| {
            let query = SalesQuery::from_filters(selected_tin.as_deref(), &tenure, &years);
            log::info!(
                "Searching sales for TIN {} from {} to {}",
                query.tin,
                query.start_date,
                query.end_date
            );
            refetch.emit(query.clone());
            sales_query.set(query);
        })
    };

    let waiting = (datasets.view.loading && datasets.view.data.is_none())
        || (sales.view.loading && sales.view.data.is_none());
    if waiting {
        return html! { <Loading text={"Loading compliance data"} /> };
    }

    let records = sales
        .view
        .data
        .map(|comparison| comparison.records)
        .unwrap_or_default();

    html! {
        <div class="flex flex-col gap-8">
            <div class="flex flex-wrap items-center gap-3">
                <label class="font-bold mr-2">{"TIN"}</label>
                <TinSelector
                    tins={tins}
                    selected={(*selected_tin).clone()}
                    on_select={on_select_tin}
                />
                <TenureFilter years={years} value={*tenure} on_change={on_tenure_change} />
                <button class="btn btn-primary rounded-full px-6 ml-2" onclick={on_search}>
                    {"Search"}
                </button>
            </div>

            <SalesComparisonChart records={records} />

            <MonthlySalesTaxSummaryChart />
            <SalesIncomeChart />

            <div class="grid grid-cols-1 xl:grid-cols-2 gap-8">
                <EmployeeRadarChart />
                <TaxpayersRiskChart />
            </div>

            <div class="grid grid-cols-1 xl:grid-cols-2 gap-8">
                <EmployeeLineChart />
                <SwtSalariesChart />
            </div>
        </div>
    }
}
