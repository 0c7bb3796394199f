use common::charts::{
    employee_line_options, employee_radar_options, monthly_sales_tax_summary_options,
    sales_income_options, swt_salaries_options, taxpayers_risk_options, ChartConfig,
};
use serde_json::Value;
use yew::prelude::*;

use super::apex::ApexChart;
use super::ChartCard;
use crate::illustrative_data::{self, PAYROLL_YEAR, SALES_YEAR};

#[derive(Properties, PartialEq)]
struct FixedChartProps {
    title: AttrValue,
    config: ChartConfig,
    series: Value,
}

#[function_component(FixedChart)]
fn fixed_chart(props: &FixedChartProps) -> Html {
    html! {
        <ChartCard title={props.title.clone()}>
            <ApexChart config={props.config.clone()} series={props.series.clone()} />
        </ChartCard>
    }
}

#[function_component(MonthlySalesTaxSummaryChart)]
pub fn monthly_sales_tax_summary_chart() -> Html {
    let series = use_memo((), |_| illustrative_data::monthly_sales_tax_series());
    html! {
        <FixedChart
            title={format!("Monthly Sales Tax Summary ({SALES_YEAR})")}
            config={monthly_sales_tax_summary_options()}
            series={(*series).clone()}
        />
    }
}

#[function_component(SalesIncomeChart)]
pub fn sales_income_chart() -> Html {
    let series = use_memo((), |_| illustrative_data::sales_income_series());
    html! {
        <FixedChart
            title={format!("Sales Income ({SALES_YEAR})")}
            config={sales_income_options()}
            series={(*series).clone()}
        />
    }
}

#[function_component(TaxpayersRiskChart)]
pub fn taxpayers_risk_chart() -> Html {
    let series = use_memo((), |_| illustrative_data::taxpayers_risk_series());
    html! {
        <FixedChart
            title={format!("Total TaxPayers vs Risk Flagged ({SALES_YEAR})")}
            config={taxpayers_risk_options()}
            series={(*series).clone()}
        />
    }
}

#[function_component(EmployeeRadarChart)]
pub fn employee_radar_chart() -> Html {
    let series = use_memo((), |_| illustrative_data::employee_series());
    html! {
        <FixedChart
            title={format!("Employees on Payroll vs Paid SWT ({PAYROLL_YEAR})")}
            config={employee_radar_options()}
            series={(*series).clone()}
        />
    }
}

#[function_component(EmployeeLineChart)]
pub fn employee_line_chart() -> Html {
    let series = use_memo((), |_| illustrative_data::employee_series());
    html! {
        <FixedChart
            title={format!("Employees on Payroll vs Paid SWT (Line) ({PAYROLL_YEAR})")}
            config={employee_line_options()}
            series={(*series).clone()}
        />
    }
}

#[function_component(SwtSalariesChart)]
pub fn swt_salaries_chart() -> Html {
    let series = use_memo((), |_| illustrative_data::swt_salaries_series());
    html! {
        <FixedChart
            title={format!("SWT Salaries Comparison ({PAYROLL_YEAR})")}
            config={swt_salaries_options()}
            series={(*series).clone()}
        />
    }
}
