use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::{
        requests::product::FindAllProducts,
        response::{
            api::{ApiResponse, ApiResponsePagination},
            meta::Meta,
            product::ProductResponse,
        },
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::collections::BTreeSet;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        info!(
            "🔍 Finding all products | Page: {}, Limit: {}",
            req.page, req.limit
        );

        // The upstream pagination parser owns rejection; this guard only
        // keeps nonsense values from reaching the store.
        let page = if req.page > 0 { req.page } else { 1 };
        let limit = if req.limit > 0 { req.limit } else { 10 };
        let normalized = FindAllProducts { page, limit };

        let total = self.query.count_available().await.map_err(|e| {
            error!("❌ Failed to count products: {e:?}");
            ServiceError::Repo(e)
        })?;

        let products = self.query.find_available(&normalized).await.map_err(|e| {
            error!("❌ Failed to fetch products: {e:?}");
            ServiceError::Repo(e)
        })?;

        let data: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

        // Signed `div_ceil` is unstable (`int_roundings`); both operands are
        // non-negative here, so the unsigned version is equivalent.
        let last_page = (total as u64).div_ceil(limit as u64) as i64;

        info!("✅ Found {} products (total: {total})", data.len());

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Products retrieved successfully".to_string(),
            data,
            meta: Meta {
                total,
                page,
                last_page,
            },
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🔍 Finding product by ID: {id}");

        let product = self.query.find_by_id(id).await.map_err(|e| {
            error!("❌ Failed to fetch product {id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        let product = product.ok_or(ServiceError::NotFound(id))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product retrieved successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn validate_products(
        &self,
        ids: &[i32],
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        // Set semantics: duplicates in the request collapse before the
        // membership check.
        let distinct: Vec<i32> = ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

        info!("🔎 Validating {} distinct product ids", distinct.len());

        let products = self.query.find_by_ids(&distinct).await.map_err(|e| {
            error!("❌ Failed to validate products: {e:?}");
            ServiceError::Repo(e)
        })?;

        if products.len() != distinct.len() {
            error!(
                "❌ Product validation failed: requested {}, found {}",
                distinct.len(),
                products.len()
            );
            return Err(ServiceError::Validation(
                "Some products were not found".to_string(),
            ));
        }

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Products validated successfully".to_string(),
            data: products.into_iter().map(ProductResponse::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::product::repository::MockProductQueryRepositoryTrait;
    use crate::model::product::Product as ProductModel;
    use shared::errors::RepositoryError;
    use std::sync::Arc;

    fn product(id: i32, available: bool) -> ProductModel {
        ProductModel {
            product_id: id,
            name: format!("Product {id}"),
            price: 10.0,
            description: None,
            available,
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn find_all_reports_true_total_for_empty_window() {
        let mut repo = MockProductQueryRepositoryTrait::new();
        repo.expect_count_available().returning(|| Ok(25));
        repo.expect_find_available()
            .withf(|req| req.page == 9 && req.limit == 10)
            .returning(|_| Ok(vec![]));

        let service = ProductQueryService::new(Arc::new(repo));
        let res = service
            .find_all(&FindAllProducts { page: 9, limit: 10 })
            .await
            .unwrap();

        assert!(res.data.is_empty());
        assert_eq!(res.meta.total, 25);
        assert_eq!(res.meta.page, 9);
        assert_eq!(res.meta.last_page, 3);
    }

    #[tokio::test]
    async fn find_all_last_page_is_ceiling_of_total_over_limit() {
        let mut repo = MockProductQueryRepositoryTrait::new();
        repo.expect_count_available().returning(|| Ok(21));
        repo.expect_find_available()
            .returning(|_| Ok(vec![product(1, true)]));

        let service = ProductQueryService::new(Arc::new(repo));
        let res = service
            .find_all(&FindAllProducts { page: 1, limit: 10 })
            .await
            .unwrap();

        assert_eq!(res.meta.last_page, 3);
    }

    #[tokio::test]
    async fn find_all_normalizes_non_positive_page_and_limit() {
        let mut repo = MockProductQueryRepositoryTrait::new();
        repo.expect_count_available().returning(|| Ok(0));
        repo.expect_find_available()
            .withf(|req| req.page == 1 && req.limit == 10)
            .returning(|_| Ok(vec![]));

        let service = ProductQueryService::new(Arc::new(repo));
        let res = service
            .find_all(&FindAllProducts { page: 0, limit: 0 })
            .await
            .unwrap();

        assert_eq!(res.meta.total, 0);
        assert_eq!(res.meta.last_page, 0);
    }

    #[tokio::test]
    async fn find_by_id_returns_available_product() {
        let mut repo = MockProductQueryRepositoryTrait::new();
        repo.expect_find_by_id()
            .withf(|id| *id == 7)
            .returning(|_| Ok(Some(product(7, true))));

        let service = ProductQueryService::new(Arc::new(repo));
        let res = service.find_by_id(7).await.unwrap();

        assert_eq!(res.data.id, 7);
        assert!(res.data.available);
    }

    #[tokio::test]
    async fn find_by_id_misses_map_to_not_found_with_id() {
        let mut repo = MockProductQueryRepositoryTrait::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = ProductQueryService::new(Arc::new(repo));
        let err = service.find_by_id(42).await.unwrap_err();

        match err {
            ServiceError::NotFound(id) => assert_eq!(id, 42),
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert_eq!(err.to_string(), "Product not found 42");
    }

    #[tokio::test]
    async fn validate_deduplicates_and_accepts_soft_deleted_rows() {
        let mut repo = MockProductQueryRepositoryTrait::new();
        repo.expect_find_by_ids()
            .withf(|ids| ids == [1, 2])
            .returning(|_| Ok(vec![product(1, true), product(2, false)]));

        let service = ProductQueryService::new(Arc::new(repo));
        let res = service.validate_products(&[1, 1, 2]).await.unwrap();

        assert_eq!(res.data.len(), 2);
    }

    #[tokio::test]
    async fn validate_fails_when_any_id_is_missing() {
        let mut repo = MockProductQueryRepositoryTrait::new();
        repo.expect_find_by_ids()
            .returning(|_| Ok(vec![product(1, true)]));

        let service = ProductQueryService::new(Arc::new(repo));
        let err = service.validate_products(&[1, 999]).await.unwrap_err();

        match err {
            ServiceError::Validation(msg) => {
                assert_eq!(msg, "Some products were not found");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn validate_propagates_store_failures() {
        let mut repo = MockProductQueryRepositoryTrait::new();
        repo.expect_find_by_ids()
            .returning(|_| Err(RepositoryError::Custom("connection reset".into())));

        let service = ProductQueryService::new(Arc::new(repo));
        let err = service.validate_products(&[1]).await.unwrap_err();

        assert!(matches!(err, ServiceError::Repo(_)));
    }
}
