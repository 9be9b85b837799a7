use thiserror::Error;

use crate::{
    models::{
        CreateProductRequest, ListProductsRequest, Product, ProductStatus,
        UpdateProductStatusRequest,
    },
    repository::{DynProductRepository, RepositoryError, UpdateProductStatusParams},
};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("product with id {0} not found")]
    NotFound(i32),

    #[error("{0}")]
    Internal(#[source] RepositoryError),
}

impl ServiceError {
    fn from_repository(id: i32, err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound(id),
            other => ServiceError::Internal(other),
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Product use cases. Requests arrive already validated; this layer only
/// sequences repository calls and classifies their failures.
#[derive(Clone)]
pub struct ProductService {
    repository: DynProductRepository,
}

impl ProductService {
    pub fn new(repository: DynProductRepository) -> Self {
        Self { repository }
    }

    pub async fn get_product(&self, id: i32) -> ServiceResult<Product> {
        let row = self
            .repository
            .get_product(id)
            .await
            .map_err(|e| ServiceError::from_repository(id, e))?;

        Ok(row.into())
    }

    pub async fn create_product(&self, req: CreateProductRequest) -> ServiceResult<Product> {
        let row = self
            .repository
            .create_product(req.to_params())
            .await
            .map_err(ServiceError::Internal)?;

        tracing::info!("Product {} created", row.id);

        Ok(row.into())
    }

    pub async fn list_products(&self, req: ListProductsRequest) -> ServiceResult<Vec<Product>> {
        let rows = self
            .repository
            .list_products(req.to_params())
            .await
            .map_err(ServiceError::Internal)?;

        Ok(Product::list_from_rows(rows))
    }

    pub async fn update_product_status(
        &self,
        req: UpdateProductStatusRequest,
    ) -> ServiceResult<Product> {
        let row = self
            .repository
            .update_product_status(req.to_params())
            .await
            .map_err(|e| ServiceError::from_repository(req.id, e))?;

        tracing::info!("Product {} status set to {}", row.id, row.status);

        Ok(row.into())
    }

    /// Soft delete: confirms the product exists, then writes `inactive`.
    ///
    /// The lookup and the write are two statements. A concurrent writer can
    /// slip in between; rows are assumed to have a single writer.
    pub async fn inactive_product(&self, id: i32) -> ServiceResult<Product> {
        self.get_product(id).await?;

        let params = UpdateProductStatusParams {
            id,
            status: ProductStatus::Inactive,
        };

        let row = self
            .repository
            .update_product_status(params)
            .await
            .map_err(|e| ServiceError::from_repository(id, e))?;

        tracing::info!("Product {} inactivated", id);

        Ok(row.into())
    }

    pub async fn delete_product(&self, id: i32) -> ServiceResult<()> {
        self.inactive_product(id).await?;
        Ok(())
    }

    pub async fn check_storage(&self) -> ServiceResult<()> {
        self.repository
            .health_check()
            .await
            .map_err(ServiceError::Internal)
    }
}
