use async_trait::async_trait;
use sqlx::PgPool;

use super::{
    CreateProductParams, ListProductsParams, ProductRepository, ProductRow, RepositoryError,
    UpdateProductStatusParams,
};
use crate::{database, queries::product_queries};

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create_product(
        &self,
        params: CreateProductParams,
    ) -> Result<ProductRow, RepositoryError> {
        let row = product_queries::create_product(&self.pool, &params).await?;
        Ok(row)
    }

    async fn get_product(&self, id: i32) -> Result<ProductRow, RepositoryError> {
        product_queries::find_by_id(&self.pool, id)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn list_products(
        &self,
        params: ListProductsParams,
    ) -> Result<Vec<ProductRow>, RepositoryError> {
        let rows = product_queries::list_products(&self.pool, params).await?;
        Ok(rows)
    }

    async fn update_product_status(
        &self,
        params: UpdateProductStatusParams,
    ) -> Result<ProductRow, RepositoryError> {
        product_queries::update_status(&self.pool, params)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        database::check_health(&self.pool).await?;
        Ok(())
    }
}
