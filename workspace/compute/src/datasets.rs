use common::Datasets;
use model::entities::{gst_return, taxpayer};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, QuerySelect};
use tracing::{debug, instrument};

use crate::error::Result;

/// Registered TINs and the years that have filed returns, both ascending.
#[instrument(skip(db))]
pub async fn available_datasets(db: &DatabaseConnection) -> Result<Datasets> {
    let tins: Vec<String> = taxpayer::Entity::find()
        .select_only()
        .column(taxpayer::Column::Tin)
        .order_by_asc(taxpayer::Column::Tin)
        .into_tuple::<String>()
        .all(db)
        .await?;

    let years: Vec<i32> = gst_return::Entity::find()
        .select_only()
        .column(gst_return::Column::Year)
        .distinct()
        .order_by_asc(gst_return::Column::Year)
        .into_tuple::<i32>()
        .all(db)
        .await?;

    debug!("Found {} TINs and {} years", tins.len(), years.len());
    Ok(Datasets { tins, years })
}
