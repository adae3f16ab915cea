use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Pagination block of a list response. `total` counts every available
/// row, independent of the requested window.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub total: i64,
    pub page: i32,
    pub last_page: i64,
}
