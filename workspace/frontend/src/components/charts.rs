mod apex;
mod illustrative;
mod sales_comparison;

use yew::prelude::*;

pub use illustrative::{
    EmployeeLineChart, EmployeeRadarChart, MonthlySalesTaxSummaryChart, SalesIncomeChart,
    SwtSalariesChart, TaxpayersRiskChart,
};
pub use sales_comparison::SalesComparisonChart;

#[derive(Properties, PartialEq)]
pub struct ChartCardProps {
    pub title: AttrValue,
    pub children: Children,
}

#[function_component(ChartCard)]
pub fn chart_card(props: &ChartCardProps) -> Html {
    html! {
        <div class="card bg-base-100 shadow-sm border border-base-300">
            <div class="card-body">
                <h2 class="card-title text-primary">{&props.title}</h2>
                { for props.children.iter() }
            </div>
        </div>
    }
}
