//! Common transport-layer types shared between backend and frontend.
//! These structs mirror the backend handlers' response payloads so the
//! frontend can deserialize API responses without duplicating shapes, and
//! hold the client-side logic that is worth testing natively (series
//! derivation, report dates, query caching, chart options).

pub mod charts;
mod datasets;
pub mod format;
pub mod period;
pub mod query;
mod sales;

pub use datasets::{Datasets, DatasetsQuery};
pub use period::{DateRange, PeriodError, ReportDate, Tenure, YearOption};
pub use query::{QueryParams, RequestKey};
pub use sales::{
    ChartSeries, ChartSeriesSet, DEFAULT_TIN, MonthlySummary, SalesComparison, SalesMetric,
    SalesQuery, SalesRecord, month_label, sales_series,
};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
/// Note: The backend has its own definition in src/schemas.rs with the
/// same field names. We mirror it here for the frontend to reuse.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
    pub success: bool,
}
