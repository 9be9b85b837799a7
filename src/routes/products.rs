use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::{
    AppState,
    error::Result,
    models::{
        CreateProductRequest, DeleteProductRequest, GetProductRequest, ListProductsRequest,
        Product, UpdateProductStatusRequest,
    },
};

pub async fn get_product(
    State(state): State<AppState>,
    path: std::result::Result<Path<GetProductRequest>, PathRejection>,
) -> Result<Json<Product>> {
    let Path(req) = path?;
    req.validate()?;

    let product = state.products.get_product(req.id).await?;

    Ok(Json(product))
}

pub async fn list_products(
    State(state): State<AppState>,
    query: std::result::Result<Query<ListProductsRequest>, QueryRejection>,
) -> Result<Json<Vec<Product>>> {
    let Query(req) = query?;
    req.validate()?;

    let products = state.products.list_products(req).await?;

    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>)> {
    let Json(req) = payload?;
    req.validate()?;

    let product = state.products.create_product(req).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product_status(
    State(state): State<AppState>,
    payload: std::result::Result<Json<UpdateProductStatusRequest>, JsonRejection>,
) -> Result<Json<Product>> {
    let Json(req) = payload?;
    req.validate()?;

    let product = state.products.update_product_status(req).await?;

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    path: std::result::Result<Path<DeleteProductRequest>, PathRejection>,
) -> Result<StatusCode> {
    let Path(req) = path?;
    req.validate()?;

    state.products.delete_product(req.id).await?;

    Ok(StatusCode::OK)
}
