use std::{
    collections::BTreeMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use async_trait::async_trait;
use chrono::Utc;

use super::{
    CreateProductParams, ListProductsParams, ProductRepository, ProductRow, RepositoryError,
    UpdateProductStatusParams,
};
use crate::models::ProductStatus;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i32, ProductRow>,
    last_id: i32,
}

/// Process-local product table. Ids are handed out in increasing order and
/// listings come back sorted by id, matching the Postgres adapter. Prices are
/// stored the way `NUMERIC(12, 2)` prints them, so `"7"` reads back as `"7.00"`.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    table: RwLock<Table>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // Expects a price that already passed `is_valid_price`.
    fn numeric_text(price: &str) -> String {
        let (integer, fraction) = price.split_once('.').unwrap_or((price, ""));
        let integer = match integer.trim_start_matches('0') {
            "" => "0",
            digits => digits,
        };
        format!("{integer}.{fraction:0<2}")
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Table>, RepositoryError> {
        self.table
            .read()
            .map_err(|_| RepositoryError::Unavailable("product table lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Table>, RepositoryError> {
        self.table
            .write()
            .map_err(|_| RepositoryError::Unavailable("product table lock poisoned".to_string()))
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create_product(
        &self,
        params: CreateProductParams,
    ) -> Result<ProductRow, RepositoryError> {
        let mut table = self.write()?;
        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::Unavailable("product id sequence exhausted".to_string()))?;
        let now = Utc::now();

        let row = ProductRow {
            id,
            name: params.name,
            price: Self::numeric_text(&params.price),
            description: params.description,
            status: ProductStatus::Available,
            created_at: now,
            updated_at: now,
        };

        table.last_id = id;
        table.rows.insert(id, row.clone());

        Ok(row)
    }

    async fn get_product(&self, id: i32) -> Result<ProductRow, RepositoryError> {
        self.read()?
            .rows
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn list_products(
        &self,
        params: ListProductsParams,
    ) -> Result<Vec<ProductRow>, RepositoryError> {
        let skip = usize::try_from(params.offset).unwrap_or(usize::MAX);
        let take = usize::try_from(params.limit).unwrap_or(0);

        Ok(self
            .read()?
            .rows
            .values()
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn update_product_status(
        &self,
        params: UpdateProductStatusParams,
    ) -> Result<ProductRow, RepositoryError> {
        let mut table = self.write()?;
        let row = table
            .rows
            .get_mut(&params.id)
            .ok_or(RepositoryError::NotFound)?;

        row.status = params.status;
        row.updated_at = Utc::now();

        Ok(row.clone())
    }
}
