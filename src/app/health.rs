//! 健康检查

use axum::{extract::State, response::Json};

use super::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "environment": &*state.environment,
        "products": state.product_service.count().await,
        "categories": state.category_service.count().await,
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
