//! This file serves as the root for all SeaORM entity modules.
//! Taxpayers are identified by their TIN; GST returns reference the TIN
//! directly so imports and reports never need to resolve surrogate ids.

pub mod gst_return;
pub mod taxpayer;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::gst_return::Entity as GstReturn;
    pub use super::taxpayer::Entity as Taxpayer;
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use migration::{Migrator, MigratorTrait};
    use rust_decimal::Decimal;
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ColumnType, ConnectionTrait, Database, DatabaseConnection, DbErr,
        EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
    };

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        let db = Database::connect("sqlite::memory:").await?;

        // Enable foreign keys
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    fn monthly_return(tin: &str, year: i32, month: i32, income: i64) -> gst_return::ActiveModel {
        gst_return::ActiveModel {
            tin: Set(tin.to_string()),
            year: Set(year),
            month: Set(month),
            total_sales_income: Set(Decimal::new(income, 2)),
            exempt_sales: Set(Decimal::new(2000, 2)),
            zero_rated_sales: Set(Decimal::new(10000, 2)),
            gst_taxable_sales: Set(Decimal::new(income / 2, 2)),
            filed_on: Set(NaiveDate::from_ymd_opt(year, month as u32, 28)),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let taxpayer = taxpayer::ActiveModel {
            tin: Set("500000009".to_string()),
            name: Set(Some("Acme Trading".to_string())),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        monthly_return("500000009", 2021, 2, 12_937_788_450).insert(&db).await?;
        monthly_return("500000009", 2021, 1, 12_637_377_550).insert(&db).await?;

        let found = Taxpayer::find()
            .filter(taxpayer::Column::Tin.eq("500000009"))
            .one(&db)
            .await?
            .expect("taxpayer exists");
        assert_eq!(found, taxpayer);

        let returns = taxpayer
            .find_related(GstReturn)
            .order_by_asc(gst_return::Column::Month)
            .all(&db)
            .await?;
        assert_eq!(returns.len(), 2);
        assert_eq!(returns[0].month, 1);
        assert_eq!(returns[0].total_sales_income, Decimal::new(12_637_377_550, 2));
        assert_eq!(returns[0].zero_rated_sales, Decimal::new(100, 0));
        assert_eq!(returns[1].filed_on, NaiveDate::from_ymd_opt(2021, 2, 28));

        let owner = returns[1]
            .find_related(Taxpayer)
            .one(&db)
            .await?
            .expect("return has an owner");
        assert_eq!(owner.tin, "500000009");

        Ok(())
    }

    #[tokio::test]
    async fn test_amount_columns_hold_large_monthly_sales() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let amount_type = ColumnType::Decimal(Some((16, 4)));
        assert_eq!(gst_return::Column::TotalSalesIncome.def().get_column_type(), &amount_type);
        assert_eq!(gst_return::Column::GstTaxableSales.def().get_column_type(), &amount_type);

        taxpayer::ActiveModel {
            tin: Set("500000009".to_string()),
            ..Default::default()
        }
        .insert(&db)
        .await?;
        let filed = monthly_return("500000009", 2022, 12, 18_945_117_250)
            .insert(&db)
            .await?;

        let stored = GstReturn::find_by_id(filed.id)
            .one(&db)
            .await?
            .expect("return was stored");
        assert_eq!(stored.total_sales_income, Decimal::new(1_894_511_725, 1));
        assert_eq!(stored.gst_taxable_sales, Decimal::new(9_472_558_625, 2));

        Ok(())
    }

    #[tokio::test]
    async fn test_return_requires_registered_taxpayer() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let result = monthly_return("999999999", 2021, 1, 100).insert(&db).await;
        assert!(result.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn test_tin_is_unique() -> Result<(), DbErr> {
        let db = setup_db().await?;

        for _ in 0..2 {
            let _ = taxpayer::ActiveModel {
                tin: Set("100000001".to_string()),
                ..Default::default()
            }
            .insert(&db)
            .await;
        }

        let count = Taxpayer::find().all(&db).await?.len();
        assert_eq!(count, 1);

        Ok(())
    }
}
