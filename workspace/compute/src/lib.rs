//! Reporting computations over the stored GST returns.

pub mod datasets;
pub mod error;
pub mod sales;

pub use datasets::available_datasets;
pub use error::{ComputeError, Result};
pub use sales::{ReturnRow, group_monthly, sales_comparison};

#[cfg(test)]
pub(crate) mod testing;
