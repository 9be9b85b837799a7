//! Storage contract for products and the row shapes it speaks in.
//!
//! The service layer only ever sees [`ProductRepository`]; production wires in
//! [`PgProductRepository`], tests and local runs can use
//! [`InMemoryProductRepository`].

mod memory;
mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::ProductStatus;

pub use memory::InMemoryProductRepository;
pub use postgres::PgProductRepository;

pub type DynProductRepository = Arc<dyn ProductRepository>;

/// A `products` row exactly as the store returns it.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub description: String,
    pub status: ProductStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProductParams {
    pub name: String,
    pub price: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListProductsParams {
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductStatusParams {
    pub id: i32,
    pub status: ProductStatus,
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("no rows in result set")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepositoryError::NotFound,
            other => RepositoryError::Database(other),
        }
    }
}

/// Every method is a single statement against the store. Keyed lookups and
/// updates report a missing row as [`RepositoryError::NotFound`].
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create_product(
        &self,
        params: CreateProductParams,
    ) -> Result<ProductRow, RepositoryError>;

    async fn get_product(&self, id: i32) -> Result<ProductRow, RepositoryError>;

    async fn list_products(
        &self,
        params: ListProductsParams,
    ) -> Result<Vec<ProductRow>, RepositoryError>;

    async fn update_product_status(
        &self,
        params: UpdateProductStatusParams,
    ) -> Result<ProductRow, RepositoryError>;

    async fn health_check(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
