use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, DbErr, Set};

use model::entities::{gst_return, taxpayer};

pub type Result<T> = std::result::Result<T, DbErr>;

pub async fn setup_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;

    // Enable foreign keys
    db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

    Migrator::up(&db, None).await.expect("Migrations failed.");
    Ok(db)
}

pub async fn new_taxpayer(db: &DatabaseConnection, tin: &str) -> Result<taxpayer::Model> {
    taxpayer::ActiveModel {
        tin: Set(tin.to_string()),
        name: Set(Some(format!("Taxpayer {tin}"))),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Files a return; amounts are `[income, exempt, zero rated, taxable]`.
pub async fn file_return(
    db: &DatabaseConnection,
    tin: &str,
    year: i32,
    month: i32,
    amounts: [Decimal; 4],
) -> Result<gst_return::Model> {
    gst_return::ActiveModel {
        tin: Set(tin.to_string()),
        year: Set(year),
        month: Set(month),
        total_sales_income: Set(amounts[0]),
        exempt_sales: Set(amounts[1]),
        zero_rated_sales: Set(amounts[2]),
        gst_taxable_sales: Set(amounts[3]),
        filed_on: Set(NaiveDate::from_ymd_opt(year, 12, 31)),
        ..Default::default()
    }
    .insert(db)
    .await
}
