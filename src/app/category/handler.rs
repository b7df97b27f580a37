//! 分类处理器

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::Json,
};

use super::{
    model::{Category, CategoryPayload},
    service::CategoryService,
};
use crate::app::{product::model::Product, AppState};
use crate::core::{error::CoreError, extract::Payload};

impl FromRef<AppState> for CategoryService {
    fn from_ref(state: &AppState) -> Self {
        state.category_service.clone()
    }
}

pub async fn list_categories(State(service): State<CategoryService>) -> Json<Vec<Category>> {
    Json(service.list_categories().await)
}

pub async fn get_category(
    State(service): State<CategoryService>,
    Path(id): Path<String>,
) -> Result<Json<Category>, CoreError> {
    let category = service.get_category(&id).await?;
    Ok(Json(category))
}

pub async fn get_category_products(
    State(service): State<CategoryService>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = service.category_products(&id).await?;
    Ok(Json(products))
}

pub async fn create_category(
    State(service): State<CategoryService>,
    Payload(payload): Payload<CategoryPayload>,
) -> (StatusCode, Json<Category>) {
    let category = service.create_category(payload).await;
    (StatusCode::CREATED, Json(category))
}

pub async fn update_category(
    State(service): State<CategoryService>,
    Path(id): Path<String>,
    Payload(payload): Payload<CategoryPayload>,
) -> Result<Json<Category>, CoreError> {
    let category = service.update_category(&id, payload).await?;
    Ok(Json(category))
}

pub async fn delete_category(
    State(service): State<CategoryService>,
    Path(id): Path<String>,
) -> Result<StatusCode, CoreError> {
    service.delete_category(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
