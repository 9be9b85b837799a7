use sqlx::PgPool;

use crate::repository::{
    CreateProductParams, ListProductsParams, ProductRow, UpdateProductStatusParams,
};

// price is NUMERIC(12, 2) in the table and text everywhere else
const PRODUCT_COLUMNS: &str =
    "id, name, price::text AS price, description, status, created_at, updated_at";

pub async fn create_product(
    pool: &PgPool,
    params: &CreateProductParams,
) -> sqlx::Result<ProductRow> {
    let sql = format!(
        "INSERT INTO products (name, price, description)
         VALUES ($1, $2::numeric, $3)
         RETURNING {PRODUCT_COLUMNS}"
    );

    sqlx::query_as::<_, ProductRow>(&sql)
        .bind(&params.name)
        .bind(&params.price)
        .bind(&params.description)
        .fetch_one(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: i32) -> sqlx::Result<Option<ProductRow>> {
    let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");

    sqlx::query_as::<_, ProductRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_products(
    pool: &PgPool,
    params: ListProductsParams,
) -> sqlx::Result<Vec<ProductRow>> {
    let sql = format!(
        "SELECT {PRODUCT_COLUMNS}
         FROM products
         ORDER BY id ASC
         LIMIT $1 OFFSET $2"
    );

    sqlx::query_as::<_, ProductRow>(&sql)
        .bind(params.limit)
        .bind(params.offset)
        .fetch_all(pool)
        .await
}

pub async fn update_status(
    pool: &PgPool,
    params: UpdateProductStatusParams,
) -> sqlx::Result<Option<ProductRow>> {
    let sql = format!(
        "UPDATE products
         SET status = $2, updated_at = NOW()
         WHERE id = $1
         RETURNING {PRODUCT_COLUMNS}"
    );

    sqlx::query_as::<_, ProductRow>(&sql)
        .bind(params.id)
        .bind(params.status)
        .fetch_optional(pool)
        .await
}
