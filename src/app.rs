use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, StatusCode},
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    config::AppConfig,
    database,
    error::{AppError, Result},
    repository::{DynProductRepository, PgProductRepository},
    routes,
    services::ProductService,
};

#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
}

impl AppState {
    pub fn new(repository: DynProductRepository) -> Self {
        Self {
            products: ProductService::new(repository),
        }
    }
}

/// Routes plus request tracing, without the deployment-specific layers.
pub fn router(state: AppState) -> Router {
    routes::create_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;
    let state = AppState::new(Arc::new(PgProductRepository::new(pool)));

    with_layers(state, config)
}

/// Wraps the routes in CORS, the body limit and the request timeout.
pub fn with_layers(state: AppState, config: &AppConfig) -> Result<Router> {
    let allowed_origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|_| {
                AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_origin(allowed_origins);

    // Dropping the handler future on timeout also drops the in-flight query.
    let app = router(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors);

    Ok(app)
}
