use crate::{
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use mockall::automock;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[automock]
#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError>;

    /// Conditional patch: touches the row only while it is still
    /// available. Zero rows affected surfaces as `NotFound`.
    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError>;

    /// Conditional soft delete, the sole mutator of `available`.
    async fn trash_product(&self, id: i32) -> Result<ProductModel, RepositoryError>;
}
