use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllProducts {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_limit")]
    pub limit: i32,
}

fn default_page() -> i32 {
    1
}

fn default_limit() -> i32 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Smartphone")]
    pub name: String,

    #[validate(range(min = 0.01, message = "Price must be greater than zero"))]
    #[schema(example = 999.99)]
    pub price: f64,

    #[schema(example = "Flagship model, 256GB")]
    pub description: Option<String>,
}

/// Partial patch; absent fields keep their stored value. A body `id` is
/// accepted for wire compatibility but always overwritten by the path id.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Smartphone")]
    pub name: Option<String>,

    #[validate(range(min = 0.01, message = "Price must be greater than zero"))]
    #[schema(example = 999.99)]
    pub price: Option<f64>,

    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ValidateProductsRequest {
    #[validate(length(min = 1, message = "At least one product id is required"))]
    pub ids: Vec<i32>,
}
