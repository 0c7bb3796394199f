use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create taxpayers table
        manager
            .create_table(
                Table::create()
                    .table(Taxpayers::Table)
                    .if_not_exists()
                    .col(pk_auto(Taxpayers::Id))
                    .col(string_len(Taxpayers::Tin, 32).unique_key())
                    .col(string_null(Taxpayers::Name))
                    .to_owned(),
            )
            .await?;

        // Create gst_returns table, one row per filed (or amended) monthly return
        manager
            .create_table(
                Table::create()
                    .table(GstReturns::Table)
                    .if_not_exists()
                    .col(pk_auto(GstReturns::Id))
                    .col(string_len(GstReturns::Tin, 32))
                    .col(integer(GstReturns::Year))
                    .col(integer(GstReturns::Month))
                    .col(decimal(GstReturns::TotalSalesIncome).decimal_len(16, 4))
                    .col(decimal(GstReturns::ExemptSales).decimal_len(16, 4))
                    .col(decimal(GstReturns::ZeroRatedSales).decimal_len(16, 4))
                    .col(decimal(GstReturns::GstTaxableSales).decimal_len(16, 4))
                    .col(date_null(GstReturns::FiledOn))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gst_return_taxpayer")
                            .from(GstReturns::Table, GstReturns::Tin)
                            .to(Taxpayers::Table, Taxpayers::Tin)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_gst_returns_tin_period")
                    .table(GstReturns::Table)
                    .col(GstReturns::Tin)
                    .col(GstReturns::Year)
                    .col(GstReturns::Month)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GstReturns::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Taxpayers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Taxpayers {
    Table,
    Id,
    Tin,
    Name,
}

#[derive(DeriveIden)]
enum GstReturns {
    Table,
    Id,
    Tin,
    Year,
    Month,
    TotalSalesIncome,
    ExemptSales,
    ZeroRatedSales,
    GstTaxableSales,
    FiledOn,
}
