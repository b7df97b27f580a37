use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use product_catalog::{
    app::{category::model::Category, product::model::Product},
    create_router,
    infrastructure::{repository::InMemoryRepository, seed},
    AppState, Config,
};

const FRUIT: &str = "c1000000-0000-4000-8000-000000000000";
const EMPTY_CATEGORY: &str = "c2000000-0000-4000-8000-000000000000";
const UNKNOWN: &str = "ffffffff-ffff-4fff-8fff-ffffffffffff";
const TEA: &str = "p1000000-0000-4000-8000-000000000000";

fn category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: Some(name.to_string()),
    }
}

fn server_with(products: Vec<Product>, categories: Vec<Category>) -> TestServer {
    let state = AppState::new(
        Arc::new(InMemoryRepository::new(products)),
        Arc::new(InMemoryRepository::new(categories)),
        "test",
    );
    TestServer::new(create_router(state, &Config::default())).unwrap()
}

fn fruit_server() -> TestServer {
    server_with(Vec::new(), vec![category(FRUIT, "Fruit")])
}

fn tea_server() -> TestServer {
    let tea: Product = serde_json::from_value(json!({
        "id": TEA,
        "name": "Green Tea",
        "categoryId": FRUIT,
        "price": 4.5
    }))
    .unwrap();
    server_with(
        vec![tea],
        vec![category(FRUIT, "Fruit"), category(EMPTY_CATEGORY, "Empty")],
    )
}

#[tokio::test]
async fn test_create_product_then_list_by_category() {
    let server = fruit_server();

    let response = server
        .post("/api/products")
        .json(&json!({ "name": "Apple", "categoryId": FRUIT }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: Product = response.json();
    assert_eq!(created.id.len(), 36);
    assert_eq!(created.name, "Apple");

    let response = server.get(&format!("/api/categories/{}/products", FRUIT)).await;
    response.assert_status_ok();
    let listed: Vec<Product> = response.json();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn test_created_product_can_be_fetched() {
    let server = fruit_server();

    let created: Product = server
        .post("/api/products")
        .json(&json!({ "name": "Pear", "categoryId": FRUIT, "price": 2.25, "id": "mine" }))
        .await
        .json();
    assert_ne!(created.id, "mine");

    let response = server.get(&format!("/api/products/{}", created.id)).await;
    response.assert_status_ok();
    let fetched: Value = response.json();
    assert_eq!(
        fetched,
        json!({ "id": created.id, "name": "Pear", "categoryId": FRUIT, "price": 2.25 })
    );
}

#[tokio::test]
async fn test_create_product_requires_name() {
    let server = fruit_server();

    let response = server.post("/api/products").json(&json!({ "name": "ab" })).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.text(),
        "\"name\" length must be at least 3 characters long"
    );

    let response = server
        .post("/api/products")
        .json(&json!({ "categoryId": FRUIT }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "\"name\" is required");

    let products: Vec<Product> = server.get("/api/products").await.json();
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_400() {
    let server = fruit_server();

    let response = server
        .post("/api/products")
        .content_type("application/json")
        .text("{ not json")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_form_encoded_body() {
    let server = fruit_server();

    let response = server
        .post("/api/products")
        .form(&[("name", "Quince"), ("categoryId", FRUIT)])
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: Product = response.json();
    assert_eq!(created.name, "Quince");
    assert_eq!(created.category_id.as_deref(), Some(FRUIT));
}

#[tokio::test]
async fn test_update_preserves_path_id() {
    let server = tea_server();

    let response = server
        .put(&format!("/api/products/{}", TEA))
        .json(&json!({ "id": UNKNOWN, "name": "Black Tea", "categoryId": FRUIT }))
        .await;
    response.assert_status_ok();
    let updated: Value = response.json();
    assert_eq!(
        updated,
        json!({ "id": TEA, "name": "Black Tea", "categoryId": FRUIT })
    );

    let fetched: Value = server.get(&format!("/api/products/{}", TEA)).await.json();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_product_checks_id_before_name() {
    let server = tea_server();

    let response = server
        .put("/api/products/short")
        .json(&json!({ "name": "x" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "\"id\" length must be 36 characters long");

    let response = server
        .put(&format!("/api/products/{}", UNKNOWN))
        .json(&json!({ "name": "x" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .put(&format!("/api/products/{}", UNKNOWN))
        .json(&json!({ "name": "Oolong" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "Not Found");
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let server = tea_server();

    let response = server.delete(&format!("/api/products/{}", TEA)).await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    let response = server.get(&format!("/api/products/{}", TEA)).await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "Product not found");

    let response = server.delete(&format!("/api/products/{}", TEA)).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_ids_are_400_not_404() {
    let server = tea_server();

    for path in [
        "/api/products/nope",
        "/api/categories/nope",
        "/api/categories/nope/products",
    ] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
    server
        .delete("/api/products/nope")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .delete("/api/categories/nope")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    server
        .put("/api/categories/nope")
        .json(&json!({ "name": "Whatever" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_category_products_not_found_vs_empty() {
    let server = tea_server();

    let response = server
        .get(&format!("/api/categories/{}/products", UNKNOWN))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "Category not found");

    let response = server
        .get(&format!("/api/categories/{}/products", EMPTY_CATEGORY))
        .await;
    response.assert_status_ok();
    let products: Vec<Product> = response.json();
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_orphaned_products_are_still_listed() {
    let server = tea_server();

    server
        .delete(&format!("/api/categories/{}", FRUIT))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/categories/{}", FRUIT))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let response = server
        .get(&format!("/api/categories/{}/products", FRUIT))
        .await;
    response.assert_status_ok();
    let products: Vec<Product> = response.json();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, TEA);
}

#[tokio::test]
async fn test_category_crud_without_name_check() {
    let server = tea_server();

    let response = server.post("/api/categories").json(&json!({ "name": "X" })).await;
    response.assert_status(StatusCode::CREATED);
    let created: Category = response.json();
    assert_eq!(created.id.len(), 36);
    assert_eq!(created.name.as_deref(), Some("X"));

    let response = server
        .put(&format!("/api/categories/{}", created.id))
        .json(&json!({ "name": "Y" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Category>(), category(&created.id, "Y"));

    let categories: Vec<Category> = server.get("/api/categories").await.json();
    assert_eq!(categories.len(), 3);
    assert_eq!(categories[2], category(&created.id, "Y"));

    let response = server
        .put(&format!("/api/categories/{}", UNKNOWN))
        .json(&json!({ "name": "Z" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "Not Found");
}

#[tokio::test]
async fn test_get_category() {
    let server = tea_server();

    let response = server.get(&format!("/api/categories/{}", FRUIT)).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Category>(), category(FRUIT, "Fruit"));

    let response = server.get(&format!("/api/categories/{}", UNKNOWN)).await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "Category not found");
}

#[tokio::test]
async fn test_seeded_service_and_health() {
    let products = seed::products().unwrap();
    let categories = seed::categories().unwrap();
    let (product_count, category_count) = (products.len(), categories.len());
    let server = server_with(products, categories);

    let listed: Vec<Product> = server.get("/api/products").await.json();
    assert_eq!(listed.len(), product_count);

    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["environment"], "test");
    assert_eq!(body["products"], product_count);
    assert_eq!(body["categories"], category_count);
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let server = fruit_server();

    let response = server.get("/api/categories").await;
    response.assert_status_ok();
    assert!(response.headers().get("x-request-id").is_some());
}

#[tokio::test]
async fn test_category_create_accepts_any_body() {
    let server = fruit_server();

    let response = server.post("/api/categories").await;
    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    assert_eq!(created["id"].as_str().map(str::len), Some(36));
    assert!(created.get("name").is_none());

    let response = server
        .post("/api/categories")
        .json(&json!({ "name": null }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: Category = response.json();
    assert_eq!(created.name, None);

    let categories: Vec<Category> = server.get("/api/categories").await.json();
    assert_eq!(categories.len(), 3);
}

#[tokio::test]
async fn test_category_update_without_body_clears_name() {
    let server = fruit_server();

    let response = server.put(&format!("/api/categories/{}", FRUIT)).await;
    response.assert_status_ok();
    let updated: Value = response.json();
    assert_eq!(updated, json!({ "id": FRUIT }));
}

#[tokio::test]
async fn test_product_create_without_body_needs_name() {
    let server = fruit_server();

    let response = server.post("/api/products").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "\"name\" is required");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let server = fruit_server();

    let response = server
        .get("/api/categories")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://example.com"),
        )
        .await;
    response.assert_status_ok();
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_cors_preflight() {
    let server = fruit_server();

    let response = server
        .method(Method::OPTIONS, "/api/products")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://example.com"),
        )
        .add_header(
            HeaderName::from_static("access-control-request-method"),
            HeaderValue::from_static("DELETE"),
        )
        .await;
    response.assert_status_ok();
    let header = |name: &str| {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    assert_eq!(header("access-control-allow-origin").as_deref(), Some("*"));
    assert_eq!(header("access-control-allow-methods").as_deref(), Some("*"));
}
