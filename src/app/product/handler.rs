//! 产品处理器

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::Json,
};

use super::{
    model::{Product, ProductPayload},
    service::ProductService,
};
use crate::app::AppState;
use crate::core::{error::CoreError, extract::Payload};

impl FromRef<AppState> for ProductService {
    fn from_ref(state: &AppState) -> Self {
        state.product_service.clone()
    }
}

pub async fn list_products(State(service): State<ProductService>) -> Json<Vec<Product>> {
    Json(service.list_products().await)
}

pub async fn get_product(
    State(service): State<ProductService>,
    Path(id): Path<String>,
) -> Result<Json<Product>, CoreError> {
    let product = service.get_product(&id).await?;
    Ok(Json(product))
}

pub async fn create_product(
    State(service): State<ProductService>,
    Payload(payload): Payload<ProductPayload>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let product = service.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(service): State<ProductService>,
    Path(id): Path<String>,
    Payload(payload): Payload<ProductPayload>,
) -> Result<Json<Product>, CoreError> {
    let product = service.update_product(&id, payload).await?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(service): State<ProductService>,
    Path(id): Path<String>,
) -> Result<StatusCode, CoreError> {
    service.delete_product(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
