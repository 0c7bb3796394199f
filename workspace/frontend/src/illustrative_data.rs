//! Fixed datasets shown by the cards that have no backing endpoint yet.

use common::{MonthlySummary, SalesRecord};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{json, Value};

pub const SALES_YEAR: i32 = 2021;
pub const PAYROLL_YEAR: i32 = 2024;

/// Sales income and GST taxable sales per month of 2021, in cents.
const SALES_2021: [(i64, i64); 12] = [
    (12_637_377_573, 5_438_479_734),
    (12_938_788_422, 5_417_987_051),
    (13_456_963_577, 6_237_165_493),
    (11_858_614_334, 5_477_609_099),
    (13_630_786_031, 6_818_236_837),
    (14_176_342_429, 6_906_117_058),
    (15_139_388_466, 7_516_374_605),
    (14_552_677_000, 8_302_094_922),
    (15_189_737_162, 6_210_157_800),
    (15_134_150_090, 6_611_574_916),
    (15_009_295_778, 6_851_608_832),
    (18_945_117_261, 7_889_661_229),
];

/// Employees on payroll and employees paid SWT per month of 2024.
const EMPLOYEES_2024: [(u32, u32); 12] = [
    (1200, 950),
    (1250, 980),
    (1300, 1000),
    (1280, 1020),
    (1350, 1100),
    (1400, 1150),
    (1425, 1200),
    (1450, 1250),
    (1500, 1300),
    (1520, 1350),
    (1550, 1400),
    (1600, 1450),
];

/// Salary wages paid, wages liable for SWT and SWT deducted per month of 2024.
const SWT_SALARIES_2024: [(u64, u64, u64); 12] = [
    (1_000_000, 800_000, 1_060_000),
    (1_050_000, 850_000, 68_000),
    (1_100_000, 60_000, 1_100_000),
    (280_000, 870_000, 71_000),
    (1_150_000, 920_000, 75_000),
    (2_200_000, 950_000, 1_900_000),
    (2_230_000, 90_000, 80_000),
    (50_000, 1_000_000, 82_000),
    (1_270_000, 1_020_000, 83_000),
    (1_300_000, 1_040_000, 85_000),
    (20_000, 1_060_000, 86_000),
    (1_350_000, 1_080_000, 88_000),
];

/// Registered taxpayers and risk-flagged taxpayers per month of 2021.
const TAXPAYERS_RISK_2021: [(u32, u32); 12] = [
    (4200, 310),
    (4260, 295),
    (4310, 340),
    (4350, 325),
    (4420, 360),
    (4480, 372),
    (4530, 351),
    (4590, 388),
    (4640, 402),
    (4700, 395),
    (4760, 410),
    (4820, 436),
];

#[derive(Serialize)]
struct Series<V> {
    name: &'static str,
    data: Vec<V>,
}

fn series<V: Serialize>(name: &'static str, data: Vec<V>) -> Value {
    json!(Series { name, data })
}

/// The 2021 sales summary as a sales record.
pub fn sales_2021() -> SalesRecord {
    let monthly_summary = SALES_2021
        .iter()
        .zip(1..)
        .map(|(&(income, taxable), month)| MonthlySummary {
            month,
            total_sales_income: Decimal::new(income, 2),
            exempt_sales: Decimal::from(20),
            zero_rated_sales: Decimal::from(100),
            gst_taxable_sales: Decimal::new(taxable, 2),
        })
        .collect();

    SalesRecord {
        year: SALES_YEAR,
        monthly_summary,
    }
}

/// One series per sales metric of 2021.
pub fn monthly_sales_tax_series() -> Value {
    let set = common::sales_series(&[sales_2021()]);
    serde_json::to_value(&set.series).unwrap_or_else(|err| {
        log::error!("Failed to serialise sales tax series: {}", err);
        Value::Array(Vec::new())
    })
}

pub fn sales_income_series() -> Value {
    let income = SALES_2021
        .iter()
        .map(|&(income, _)| income as f64 / 100.0)
        .collect();
    json!([series("Sales Income", income)])
}

pub fn taxpayers_risk_series() -> Value {
    json!([
        series("Total TaxPayers", TAXPAYERS_RISK_2021.iter().map(|m| m.0).collect()),
        series("Risk Flagged", TAXPAYERS_RISK_2021.iter().map(|m| m.1).collect()),
    ])
}

pub fn employee_series() -> Value {
    json!([
        series("Employees on Payroll", EMPLOYEES_2024.iter().map(|m| m.0).collect()),
        series("Employees Paid SWT", EMPLOYEES_2024.iter().map(|m| m.1).collect()),
    ])
}

pub fn swt_salaries_series() -> Value {
    json!([
        series("Total Salary Wages Paid", SWT_SALARIES_2024.iter().map(|m| m.0).collect()),
        series("SW Paid for SWT Deduction", SWT_SALARIES_2024.iter().map(|m| m.1).collect()),
        series("Total SWT Tax Deducted", SWT_SALARIES_2024.iter().map(|m| m.2).collect()),
    ])
}
