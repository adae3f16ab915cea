use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire shape for every failed request, on both transports:
/// a human-readable message plus the HTTP-equivalent status code.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    pub status: u16,
}
