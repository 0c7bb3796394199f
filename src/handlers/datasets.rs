use axum::{extract::State, http::StatusCode, response::Json};
use common::{Datasets, DatasetsQuery, QueryParams};
use tracing::{debug, error, info, instrument, trace};

use crate::schemas::{ApiResponse, AppState, CachedData, ErrorResponse};

/// List the TINs and years that can be reported on
#[utoipa::path(
    get,
    path = "/api/v1/datasets",
    tag = "datasets",
    responses(
        (status = 200, description = "Datasets retrieved successfully", body = ApiResponse<Datasets>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_datasets(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Datasets>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_datasets function");

    let cache_key = DatasetsQuery.request_key();
    if let Some(CachedData::Datasets(datasets)) = state.cache.get(&cache_key).await {
        debug!("Serving datasets from cache");
        return Ok(Json(ApiResponse {
            data: datasets,
            message: "Datasets retrieved from cache".to_string(),
            success: true,
        }));
    }

    match compute::available_datasets(&state.db).await {
        Ok(datasets) => {
            info!(
                "Found {} TINs and {} years",
                datasets.tins.len(),
                datasets.years.len()
            );
            state
                .cache
                .insert(cache_key, CachedData::Datasets(datasets.clone()))
                .await;

            Ok(Json(ApiResponse {
                data: datasets,
                message: "Datasets retrieved successfully".to_string(),
                success: true,
            }))
        }
        Err(e) => {
            error!("Failed to retrieve datasets: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to retrieve datasets", "DATABASE_ERROR")),
            ))
        }
    }
}
