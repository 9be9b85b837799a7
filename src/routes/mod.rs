mod health;
mod products;

use axum::{Router, routing::get};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route(
            "/products",
            get(products::list_products)
                .post(products::create_product)
                .patch(products::update_product_status),
        )
        .route(
            "/products/{id}",
            get(products::get_product).delete(products::delete_product),
        )
}
