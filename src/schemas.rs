use common::{
    Datasets, DateRange, MonthlySummary, PeriodError, QueryParams, ReportDate, RequestKey,
    SalesComparison, SalesQuery, SalesRecord,
};
use moka::future::Cache;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use utoipa::{IntoParams, OpenApi, ToSchema};
use validator::{Validate, ValidationError};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Cache of API responses keyed by request parameters
    pub cache: Cache<RequestKey, CachedData>,
    /// Per-request timeout applied by the router
    pub request_timeout: Duration,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    Datasets(Datasets),
    SalesComparison(SalesComparison),
}

/// Query parameters of the sales comparison endpoint
#[derive(Debug, Deserialize, ToSchema, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct SalesComparisonQuery {
    /// Taxpayer Identification Number
    #[validate(length(min = 1, max = 32), custom(function = "validate_tin"))]
    #[param(example = "500000009")]
    pub tin: String,
    /// First day of the period (DD-MM-YYYY)
    #[param(value_type = String, example = "01-01-2021")]
    pub start_date: ReportDate,
    /// Last day of the period (DD-MM-YYYY)
    #[param(value_type = String, example = "31-12-2022")]
    pub end_date: ReportDate,
}

impl SalesComparisonQuery {
    pub fn range(&self) -> Result<DateRange, PeriodError> {
        DateRange::new(self.start_date, self.end_date)
    }

    pub fn request_key(&self) -> RequestKey {
        SalesQuery {
            tin: self.tin.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
        }
        .request_key()
    }
}

fn validate_tin(tin: &str) -> Result<(), ValidationError> {
    if tin.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("tin_digits"))
    }
}

/// API response wrapper
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: &str) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
            success: false,
        }
    }
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::datasets::get_datasets,
        crate::handlers::gst::get_sales_comparison,
    ),
    components(
        schemas(
            ApiResponse<Datasets>,
            ApiResponse<SalesComparison>,
            ErrorResponse,
            HealthResponse,
            SalesComparisonQuery,
            Datasets,
            SalesComparison,
            SalesRecord,
            MonthlySummary,
            ReportDate,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "datasets", description = "Available filter values"),
        (name = "gst", description = "GST return reports"),
    ),
    info(
        title = "TaxDash API",
        description = "Compliance reporting API - aggregated GST return data for the TaxDash dashboard",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
