use sea_orm::entity::prelude::*;

use super::gst_return;

/// A registered taxpayer, identified by its TIN.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "taxpayers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Taxpayer Identification Number.
    #[sea_orm(unique)]
    pub tin: String,
    pub name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "gst_return::Entity")]
    GstReturn,
}

impl Related<gst_return::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GstReturn.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
