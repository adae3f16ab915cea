use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::{
        requests::product::{CreateProductRequest, UpdateProductRequest},
        response::{api::ApiResponse, product::ProductResponse},
    },
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🆕 Creating product: {}", req.name);

        let product = self.command.create_product(req).await.map_err(|e| {
            error!("❌ Failed to create product {}: {e:?}", req.name);
            ServiceError::Repo(e)
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product created successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🔄 Updating product ID: {id}");

        // Identity is immutable: the addressed id wins over anything the
        // payload carries.
        let patch = UpdateProductRequest {
            id: None,
            ..req.clone()
        };

        let product = self
            .command
            .update_product(id, &patch)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ServiceError::NotFound(id),
                other => {
                    error!("❌ Failed to update product {id}: {other:?}");
                    ServiceError::Repo(other)
                }
            })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product updated successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn trash_product(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🗑️ Soft deleting product ID: {id}");

        let product = self.command.trash_product(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::NotFound(id),
            other => {
                error!("❌ Failed to soft delete product {id}: {other:?}");
                ServiceError::Repo(other)
            }
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product deleted successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }
}
