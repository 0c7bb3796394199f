use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::period::{DateRange, PeriodError, ReportDate, Tenure};
use crate::query::{QueryParams, RequestKey};

/// TIN requested on the first load, before the user picks one.
pub const DEFAULT_TIN: &str = "500000009";

pub(crate) const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Sales figures of one TIN for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonthlySummary {
    /// Calendar month, 1 = January
    #[schema(example = 1)]
    pub month: u32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 126373775.73)]
    pub total_sales_income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub exempt_sales: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub zero_rated_sales: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub gst_taxable_sales: Decimal,
}

impl MonthlySummary {
    /// An all-zero summary for the given month.
    pub fn empty(month: u32) -> Self {
        Self {
            month,
            total_sales_income: Decimal::ZERO,
            exempt_sales: Decimal::ZERO,
            zero_rated_sales: Decimal::ZERO,
            gst_taxable_sales: Decimal::ZERO,
        }
    }
}

/// One year of monthly summaries, months in reporting order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SalesRecord {
    #[schema(example = 2021)]
    pub year: i32,
    pub monthly_summary: Vec<MonthlySummary>,
}

/// Sales comparison payload for a TIN and date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SalesComparison {
    pub records: Vec<SalesRecord>,
}

/// The four metrics plotted by the sales comparison chart, in series order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalesMetric {
    TotalSalesIncome,
    ExemptSales,
    ZeroRatedSales,
    GstTaxableSales,
}

impl SalesMetric {
    pub const ALL: [SalesMetric; 4] = [
        SalesMetric::TotalSalesIncome,
        SalesMetric::ExemptSales,
        SalesMetric::ZeroRatedSales,
        SalesMetric::GstTaxableSales,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SalesMetric::TotalSalesIncome => "Total Sales Income",
            SalesMetric::ExemptSales => "Exempt Sales",
            SalesMetric::ZeroRatedSales => "Zero Rated Sales",
            SalesMetric::GstTaxableSales => "GST Taxable Sales",
        }
    }

    pub fn value(self, summary: &MonthlySummary) -> Decimal {
        match self {
            SalesMetric::TotalSalesIncome => summary.total_sales_income,
            SalesMetric::ExemptSales => summary.exempt_sales,
            SalesMetric::ZeroRatedSales => summary.zero_rated_sales,
            SalesMetric::GstTaxableSales => summary.gst_taxable_sales,
        }
    }
}

/// A named chart series. Values go to the chart as plain JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    #[serde(serialize_with = "decimal_seq::serialize")]
    pub data: Vec<Decimal>,
}

/// Categories plus the series aligned with them.
///
/// `series` is empty when every value was zero; the chart renders its
/// "No Data Found" state for it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartSeriesSet {
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
}

/// Category label of a month, e.g. `Jan 2021`.
///
/// Months outside 1..=12 keep their number (`13 2021`).
pub fn month_label(year: i32, month: u32) -> String {
    match month
        .checked_sub(1)
        .and_then(|index| MONTH_ABBREVIATIONS.get(index as usize))
    {
        Some(abbreviation) => format!("{abbreviation} {year}"),
        None => format!("{month} {year}"),
    }
}

/// Flattens sales records into chart categories and one series per metric.
///
/// Records and their months are taken in the order given.
pub fn sales_series(records: &[SalesRecord]) -> ChartSeriesSet {
    let mut categories = Vec::new();
    let mut columns: [Vec<Decimal>; 4] = Default::default();

    for record in records {
        for summary in &record.monthly_summary {
            categories.push(month_label(record.year, summary.month));
            for (column, metric) in columns.iter_mut().zip(SalesMetric::ALL) {
                column.push(metric.value(summary));
            }
        }
    }

    let all_zero = columns.iter().flatten().all(Decimal::is_zero);
    let series = if all_zero {
        Vec::new()
    } else {
        SalesMetric::ALL
            .into_iter()
            .zip(columns)
            .map(|(metric, data)| ChartSeries {
                name: metric.label().to_string(),
                data,
            })
            .collect()
    };

    ChartSeriesSet { categories, series }
}

/// Parameters of a sales comparison request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesQuery {
    pub tin: String,
    pub start_date: ReportDate,
    pub end_date: ReportDate,
}

impl SalesQuery {
    pub fn new(tin: impl Into<String>, range: DateRange) -> Self {
        Self {
            tin: tin.into(),
            start_date: range.start(),
            end_date: range.end(),
        }
    }

    /// Query for the current filter selection.
    pub fn from_filters(tin: Option<&str>, tenure: &Tenure, years: &[i32]) -> Self {
        Self::new(tin.unwrap_or(DEFAULT_TIN), tenure.range(years))
    }

    pub fn range(&self) -> Result<DateRange, PeriodError> {
        DateRange::new(self.start_date, self.end_date)
    }
}

impl Default for SalesQuery {
    fn default() -> Self {
        Self::new(DEFAULT_TIN, DateRange::default_range())
    }
}

impl QueryParams for SalesQuery {
    fn request_key(&self) -> RequestKey {
        RequestKey::new(
            "gst/sales-comparison",
            &[
                &self.tin,
                &self.start_date.to_string(),
                &self.end_date.to_string(),
            ],
        )
    }
}

mod decimal_seq {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::ToPrimitive;
    use serde::Serializer;
    use serde::ser::SerializeSeq;

    pub fn serialize<S: Serializer>(values: &[Decimal], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&value.to_f64().unwrap_or_default())?;
        }
        seq.end()
    }
}
