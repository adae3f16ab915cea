use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::{CreateProductRequest, UpdateProductRequest},
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (name, price, description, created_at, updated_at)
            VALUES ($1, $2, $3, current_timestamp, current_timestamp)
            RETURNING product_id, name, price, description, available, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(req.price)
        .bind(&req.description)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", req.name, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created product ID {} ({})", result.product_id, result.name);
        Ok(result)
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Single conditional round-trip: the availability check and the
        // patch are one statement, so a concurrent soft delete cannot
        // slip between them.
        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                price = COALESCE($3, price),
                description = COALESCE($4, description),
                updated_at = current_timestamp
            WHERE product_id = $1 AND available = TRUE
            RETURNING product_id, name, price, description, available, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(req.price)
        .bind(&req.description)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        match result {
            Some(product) => {
                info!("🔄 Updated product ID {}", product.product_id);
                Ok(product)
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn trash_product(&self, id: i32) -> Result<ProductModel, RepositoryError> {
        info!("🗑️ Soft deleting product: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET available = FALSE,
                updated_at = current_timestamp
            WHERE product_id = $1 AND available = TRUE
            RETURNING product_id, name, price, description, available, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to soft delete product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        match result {
            Some(product) => {
                info!("✅ Product ID {} marked unavailable", product.product_id);
                Ok(product)
            }
            None => Err(RepositoryError::NotFound),
        }
    }
}
