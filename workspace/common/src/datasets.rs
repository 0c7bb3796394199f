use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::query::{QueryParams, RequestKey};

/// Filter values available on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct Datasets {
    /// Registered TINs, ascending
    #[schema(example = json!(["500000009"]))]
    pub tins: Vec<String>,
    /// Years with at least one filed return, ascending
    #[schema(example = json!([2021, 2022]))]
    pub years: Vec<i32>,
}

impl Datasets {
    pub fn first_tin(&self) -> Option<&str> {
        self.tins.first().map(String::as_str)
    }
}

/// The datasets request takes no parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatasetsQuery;

impl QueryParams for DatasetsQuery {
    fn request_key(&self) -> RequestKey {
        RequestKey::new("datasets", &[])
    }
}
