use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use common::SalesComparison;
use compute::ComputeError;
use tracing::{debug, error, info, instrument, trace, warn};

use crate::schemas::{ApiResponse, AppState, CachedData, ErrorResponse, SalesComparisonQuery};

/// Monthly sales of a TIN over a date range, grouped by year
#[utoipa::path(
    get,
    path = "/api/v1/gst/sales-comparison",
    tag = "gst",
    params(SalesComparisonQuery),
    responses(
        (status = 200, description = "Sales comparison retrieved successfully", body = ApiResponse<SalesComparison>),
        (status = 400, description = "Invalid TIN or date range", body = ErrorResponse),
        (status = 404, description = "TIN not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_sales_comparison(
    Valid(Query(query)): Valid<Query<SalesComparisonQuery>>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SalesComparison>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_sales_comparison function");

    let range = match query.range() {
        Ok(range) => range,
        Err(e) => {
            warn!("Rejecting sales comparison request: {}", e);
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(e.to_string(), "INVALID_DATE_RANGE")),
            ));
        }
    };

    let cache_key = query.request_key();
    if let Some(CachedData::SalesComparison(comparison)) = state.cache.get(&cache_key).await {
        debug!("Serving sales comparison from cache: {}", cache_key);
        return Ok(Json(ApiResponse {
            data: comparison,
            message: "Sales comparison retrieved from cache".to_string(),
            success: true,
        }));
    }

    match compute::sales_comparison(&state.db, &query.tin, &range).await {
        Ok(records) => {
            info!("Sales comparison for TIN {} has {} yearly records", query.tin, records.len());
            let comparison = SalesComparison { records };
            state
                .cache
                .insert(cache_key, CachedData::SalesComparison(comparison.clone()))
                .await;

            Ok(Json(ApiResponse {
                data: comparison,
                message: "Sales comparison retrieved successfully".to_string(),
                success: true,
            }))
        }
        Err(ComputeError::UnknownTin(tin)) => {
            warn!("Sales comparison requested for unknown TIN {}", tin);
            Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(
                    format!("TIN {tin} is not registered"),
                    "TIN_NOT_FOUND",
                )),
            ))
        }
        Err(e) => {
            error!("Failed to compute sales comparison: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(
                    "Failed to compute sales comparison",
                    "DATABASE_ERROR",
                )),
            ))
        }
    }
}
