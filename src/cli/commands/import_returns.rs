use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info, trace, warn};

use model::entities::{gst_return, taxpayer};

/// One filed return as found in an import file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReturnFiling {
    pub tin: String,
    #[serde(default)]
    pub name: Option<String>,
    pub year: i32,
    pub month: u32,
    pub total_sales_income: Decimal,
    pub exempt_sales: Decimal,
    pub zero_rated_sales: Decimal,
    pub gst_taxable_sales: Decimal,
    #[serde(default)]
    pub filed_on: Option<NaiveDate>,
}

/// Counts reported after an import.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub taxpayers_created: usize,
    pub returns_imported: usize,
}

/// Reads filings from a `.json`, `.yaml` or `.yml` file.
pub fn read_filings(path: &Path) -> Result<Vec<ReturnFiling>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read import file {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let filings = match extension.as_deref() {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML in {}", path.display()))?,
        _ => serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?,
    };
    Ok(filings)
}

fn validate(filing: &ReturnFiling, index: usize) -> Result<()> {
    if filing.tin.trim().is_empty() {
        bail!("Return #{index} has an empty TIN");
    }
    if !(1..=12).contains(&filing.month) {
        bail!("Return #{index} for TIN {} has invalid month {}", filing.tin, filing.month);
    }
    Ok(())
}

/// Imports filings in one transaction. Unknown TINs are registered first.
pub async fn import_filings<C>(db: &C, filings: &[ReturnFiling]) -> Result<ImportSummary>
where
    C: ConnectionTrait + TransactionTrait,
{
    for (index, filing) in filings.iter().enumerate() {
        validate(filing, index)?;
    }

    let txn = db.begin().await?;
    let mut summary = ImportSummary::default();
    let mut known: HashSet<String> = HashSet::new();

    for filing in filings {
        if !known.contains(&filing.tin) {
            let existing = taxpayer::Entity::find()
                .filter(taxpayer::Column::Tin.eq(filing.tin.as_str()))
                .one(&txn)
                .await?;
            if existing.is_none() {
                debug!("Registering taxpayer {}", filing.tin);
                taxpayer::ActiveModel {
                    tin: Set(filing.tin.clone()),
                    name: Set(filing.name.clone()),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
                summary.taxpayers_created += 1;
            }
            known.insert(filing.tin.clone());
        }

        trace!("Importing return {}/{} for {}", filing.month, filing.year, filing.tin);
        gst_return::ActiveModel {
            tin: Set(filing.tin.clone()),
            year: Set(filing.year),
            month: Set(filing.month as i32),
            total_sales_income: Set(filing.total_sales_income),
            exempt_sales: Set(filing.exempt_sales),
            zero_rated_sales: Set(filing.zero_rated_sales),
            gst_taxable_sales: Set(filing.gst_taxable_sales),
            filed_on: Set(filing.filed_on),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        summary.returns_imported += 1;
    }

    txn.commit().await?;
    Ok(summary)
}

pub async fn import_returns(file: &str, database_url: &str) -> Result<()> {
    info!("Importing GST returns from {}", file);
    debug!("Database URL: {}", database_url);

    let filings = read_filings(Path::new(file))?;
    if filings.is_empty() {
        warn!("Import file {} contains no returns", file);
        return Ok(());
    }

    let db: DatabaseConnection = Database::connect(database_url)
        .await
        .with_context(|| format!("Failed to connect to database '{database_url}'"))?;

    let summary = import_filings(&db, &filings).await?;
    info!(
        "Import completed: {} returns imported, {} taxpayers registered",
        summary.returns_imported, summary.taxpayers_created
    );
    Ok(())
}
