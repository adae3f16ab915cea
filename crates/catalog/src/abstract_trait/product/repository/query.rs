use crate::{domain::requests::product::FindAllProducts, model::product::Product as ProductModel};
use async_trait::async_trait;
use mockall::automock;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[automock]
#[async_trait]
pub trait ProductQueryRepositoryTrait {
    /// Count of all available rows, independent of any page window.
    async fn count_available(&self) -> Result<i64, RepositoryError>;

    /// One page of available rows, store-default ordering.
    async fn find_available(
        &self,
        req: &FindAllProducts,
    ) -> Result<Vec<ProductModel>, RepositoryError>;

    /// Available row by id; `None` covers both absent and soft-deleted.
    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError>;

    /// Rows matching the given ids regardless of availability. Bulk
    /// validation checks existence against historical products too, so
    /// this is the one read path without the `available` filter.
    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<ProductModel>, RepositoryError>;
}
