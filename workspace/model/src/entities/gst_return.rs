use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

use super::taxpayer;

/// A monthly GST return. Amendments are stored as further rows for the
/// same TIN and month; reports sum them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "gst_returns")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tin: String,
    pub year: i32,
    /// Calendar month, 1 = January.
    pub month: i32,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub total_sales_income: Decimal,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub exempt_sales: Decimal,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub zero_rated_sales: Decimal,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub gst_taxable_sales: Decimal,
    pub filed_on: Option<NaiveDate>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "taxpayer::Entity",
        from = "Column::Tin",
        to = "taxpayer::Column::Tin",
        on_delete = "Cascade"
    )]
    Taxpayer,
}

impl Related<taxpayer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Taxpayer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
