//! 应用层：产品与分类两组路由

pub mod category;
pub mod health;
pub mod product;

use std::{sync::Arc, time::Duration};

use axum::{
    middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::core::middleware::request_logging_middleware;
use crate::infrastructure::repository::Repository;
use category::{handler as categories, model::Category, service::CategoryService};
use product::{handler as products, model::Product, service::ProductService};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
    pub category_service: CategoryService,
    pub environment: Arc<str>,
}

impl AppState {
    pub fn new(
        products: Arc<dyn Repository<Product>>,
        categories: Arc<dyn Repository<Category>>,
        environment: &str,
    ) -> Self {
        let product_service = ProductService::new(products);
        let category_service = CategoryService::new(categories, product_service.clone());
        Self {
            product_service,
            category_service,
            environment: Arc::from(environment),
        }
    }
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/:id",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/:id",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .route(
            "/categories/:id/products",
            get(categories::get_category_products),
        )
}

/// 创建路由
pub fn create_router(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.http.timeout_seconds,
                )))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
