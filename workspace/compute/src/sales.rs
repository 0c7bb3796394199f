use std::collections::BTreeMap;

use common::{DateRange, MonthlySummary, SalesRecord};
use model::entities::{gst_return, taxpayer};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::{debug, info, instrument, warn};

use crate::error::{ComputeError, Result};

/// Amounts of a single filed return.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnRow {
    pub year: i32,
    pub month: u32,
    pub total_sales_income: Decimal,
    pub exempt_sales: Decimal,
    pub zero_rated_sales: Decimal,
    pub gst_taxable_sales: Decimal,
}

impl From<gst_return::Model> for ReturnRow {
    fn from(model: gst_return::Model) -> Self {
        Self {
            year: model.year,
            // Negative months are as invalid as 13 and get skipped later.
            month: u32::try_from(model.month).unwrap_or(0),
            total_sales_income: model.total_sales_income,
            exempt_sales: model.exempt_sales,
            zero_rated_sales: model.zero_rated_sales,
            gst_taxable_sales: model.gst_taxable_sales,
        }
    }
}

/// Sums returns per (year, month) and groups the months by year.
///
/// Years come out ascending with their months ascending. Rows with a month
/// outside 1..=12 are skipped.
pub fn group_monthly(rows: impl IntoIterator<Item = ReturnRow>) -> Vec<SalesRecord> {
    let mut months: BTreeMap<(i32, u32), MonthlySummary> = BTreeMap::new();

    for row in rows {
        if !(1..=12).contains(&row.month) {
            warn!(year = row.year, month = row.month, "Skipping return with invalid month");
            continue;
        }

        let summary = months
            .entry((row.year, row.month))
            .or_insert_with(|| MonthlySummary::empty(row.month));
        summary.total_sales_income += row.total_sales_income;
        summary.exempt_sales += row.exempt_sales;
        summary.zero_rated_sales += row.zero_rated_sales;
        summary.gst_taxable_sales += row.gst_taxable_sales;
    }

    let mut records: Vec<SalesRecord> = Vec::new();
    for ((year, _), summary) in months {
        match records.last_mut() {
            Some(record) if record.year == year => record.monthly_summary.push(summary),
            _ => records.push(SalesRecord {
                year,
                monthly_summary: vec![summary],
            }),
        }
    }
    records
}

/// Monthly sales of `tin` for every month of `range` with at least one return.
#[instrument(skip(db))]
pub async fn sales_comparison(
    db: &DatabaseConnection,
    tin: &str,
    range: &DateRange,
) -> Result<Vec<SalesRecord>> {
    info!("Computing sales comparison");

    let registered = taxpayer::Entity::find()
        .filter(taxpayer::Column::Tin.eq(tin))
        .one(db)
        .await?;
    if registered.is_none() {
        warn!("TIN is not registered");
        return Err(ComputeError::UnknownTin(tin.to_string()));
    }

    let returns = gst_return::Entity::find()
        .filter(gst_return::Column::Tin.eq(tin))
        .filter(gst_return::Column::Year.between(range.start().year(), range.end().year()))
        .order_by_asc(gst_return::Column::Year)
        .order_by_asc(gst_return::Column::Month)
        .order_by_asc(gst_return::Column::Id)
        .all(db)
        .await?;
    debug!("Loaded {} filed returns", returns.len());

    let rows = returns
        .into_iter()
        .map(ReturnRow::from)
        .filter(|row| range.contains_month(row.year, row.month));
    let records = group_monthly(rows);

    info!(
        "Sales comparison covers {} years, {} months",
        records.len(),
        records.iter().map(|r| r.monthly_summary.len()).sum::<usize>()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{file_return, new_taxpayer, setup_db};
    use common::ReportDate;
    use rust_decimal_macros::dec;

    fn row(year: i32, month: u32, income: Decimal) -> ReturnRow {
        ReturnRow {
            year,
            month,
            total_sales_income: income,
            exempt_sales: dec!(20),
            zero_rated_sales: dec!(100),
            gst_taxable_sales: income / dec!(2),
        }
    }

    #[test]
    fn group_monthly_sums_amendments() {
        let records = group_monthly(vec![
            row(2021, 1, dec!(100)),
            row(2021, 1, dec!(-10)),
            row(2021, 2, dec!(50)),
        ]);

        assert_eq!(records.len(), 1);
        let months = &records[0].monthly_summary;
        assert_eq!(months.len(), 2);
        assert_eq!(months[0].month, 1);
        assert_eq!(months[0].total_sales_income, dec!(90));
        assert_eq!(months[0].exempt_sales, dec!(40));
        assert_eq!(months[0].zero_rated_sales, dec!(200));
        assert_eq!(months[0].gst_taxable_sales, dec!(45));
        assert_eq!(months[1].total_sales_income, dec!(50));
    }

    #[test]
    fn group_monthly_orders_years_and_months() {
        let records = group_monthly(vec![
            row(2022, 3, dec!(1)),
            row(2021, 12, dec!(2)),
            row(2022, 1, dec!(3)),
        ]);

        let layout: Vec<(i32, Vec<u32>)> = records
            .iter()
            .map(|r| (r.year, r.monthly_summary.iter().map(|m| m.month).collect()))
            .collect();
        assert_eq!(layout, vec![(2021, vec![12]), (2022, vec![1, 3])]);
    }

    #[test]
    fn group_monthly_skips_invalid_months() {
        let records = group_monthly(vec![row(2021, 0, dec!(1)), row(2021, 13, dec!(1))]);
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn sales_comparison_filters_by_tin_and_range() -> Result<()> {
        let db = setup_db().await?;
        new_taxpayer(&db, "500000009").await?;
        new_taxpayer(&db, "100000001").await?;

        for month in 1..=12 {
            file_return(&db, "500000009", 2021, month, [dec!(1000), dec!(20), dec!(100), dec!(500)]).await?;
        }
        file_return(&db, "500000009", 2022, 1, [dec!(2000), dec!(0), dec!(0), dec!(1000)]).await?;
        file_return(&db, "500000009", 2022, 1, [dec!(250.5), dec!(0), dec!(0), dec!(0)]).await?;
        file_return(&db, "500000009", 2023, 1, [dec!(9), dec!(9), dec!(9), dec!(9)]).await?;
        file_return(&db, "100000001", 2021, 6, [dec!(7), dec!(7), dec!(7), dec!(7)]).await?;

        let range = DateRange::new(
            ReportDate::from_ymd(2021, 11, 15).unwrap(),
            ReportDate::from_ymd(2022, 6, 30).unwrap(),
        )
        .unwrap();
        let records = sales_comparison(&db, "500000009", &range).await?;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].year, 2021);
        let months: Vec<u32> = records[0].monthly_summary.iter().map(|m| m.month).collect();
        assert_eq!(months, vec![11, 12]);
        assert_eq!(records[1].year, 2022);
        assert_eq!(records[1].monthly_summary.len(), 1);
        assert_eq!(records[1].monthly_summary[0].total_sales_income, dec!(2250.5));
        assert_eq!(records[1].monthly_summary[0].gst_taxable_sales, dec!(1000));

        Ok(())
    }

    #[tokio::test]
    async fn sales_comparison_rejects_unknown_tin() -> Result<()> {
        let db = setup_db().await?;

        let result = sales_comparison(&db, "999999999", &DateRange::default_range()).await;

        assert!(matches!(result, Err(ComputeError::UnknownTin(tin)) if tin == "999999999"));
        Ok(())
    }

    #[tokio::test]
    async fn sales_comparison_without_returns_is_empty() -> Result<()> {
        let db = setup_db().await?;
        new_taxpayer(&db, "500000009").await?;

        let records = sales_comparison(&db, "500000009", &DateRange::default_range()).await?;

        assert!(records.is_empty());
        Ok(())
    }
}
