// Route-level tests against the in-memory store

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use menu_core::seed::seed_if_empty;
use menu_core::services::MenuItemService;
use menu_infrastructure::InMemoryMenuItemRepository;
use menu_shared::config::AppSettings;

use crate::{build_app, AppState};

fn settings() -> AppSettings {
    AppSettings {
        env: "test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        name: "menu-server".to_string(),
        cors_origins: Vec::new(),
    }
}

async fn app(seeded: bool) -> Router {
    let repo = Arc::new(InMemoryMenuItemRepository::new());
    if seeded {
        seed_if_empty(repo.as_ref()).await.unwrap();
    }
    let service = Arc::new(MenuItemService::new(repo));
    build_app(AppState::new(service), &settings())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn names(items: &Value) -> Vec<&str> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect()
}

fn margherita() -> Value {
    json!({
        "name": "Margherita Pizza",
        "description": "Tomato, mozzarella, basil",
        "price": 12.99,
        "category": "Main Course",
        "dietaryTag": "Vegetarian"
    })
}

#[tokio::test]
async fn test_create_read_delete_lifecycle() {
    let app = app(false).await;

    let response = send(&app, "POST", "/menuitem", Some(margherita())).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let created = json_body(response).await;
    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(location, format!("/menuitem/{}", id));
    assert_eq!(created["price"].as_f64(), Some(12.99));
    assert_eq!(created["dietaryTag"], "Vegetarian");

    let response = send(&app, "GET", &location, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, created);

    let response = send(&app, "DELETE", &location, None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, "GET", &location, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "NotFound");

    let response = send(&app, "DELETE", &location, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_all_is_ordered_by_category_then_name() {
    let app = app(true).await;

    let response = send(&app, "GET", "/menuitem", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let items = json_body(response).await;
    assert_eq!(
        names(&items),
        vec!["Caesar Salad", "Chocolate Lava Cake", "Grilled Salmon", "Margherita Pizza"]
    );
}

#[tokio::test]
async fn test_create_trims_and_defaults_dietary_tag() {
    let app = app(false).await;
    let body = json!({
        "name": "  Garlic Bread  ",
        "price": 4.5,
        "category": " Appetizer "
    });

    let response = send(&app, "POST", "/menuitem", Some(body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["name"], "Garlic Bread");
    assert_eq!(created["category"], "Appetizer");
    assert_eq!(created["description"], "");
    assert_eq!(created["dietaryTag"], "None");
}

#[tokio::test]
async fn test_create_rejects_invalid_fields() {
    let app = app(false).await;
    let body = json!({
        "name": "",
        "price": 0,
        "category": "Pizza"
    });

    let response = send(&app, "POST", "/menuitem", Some(body)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = json_body(response).await;
    assert_eq!(error["error"], "ValidationError");
    let fields: Vec<&str> = error["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"name"));
    assert!(fields.contains(&"price"));

    let response = send(&app, "GET", "/menuitem", None).await;
    assert!(json_body(response).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_rejects_price_above_maximum() {
    let app = app(false).await;
    let mut body = margherita();
    body["price"] = json!(1000.0);

    let response = send(&app, "POST", "/menuitem", Some(body)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = json_body(response).await;
    assert_eq!(error["errors"][0]["field"], "price");
}

#[tokio::test]
async fn test_create_rejects_sub_cent_price() {
    let app = app(false).await;
    let mut body = margherita();
    body["price"] = json!(12.999);

    let response = send(&app, "POST", "/menuitem", Some(body)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = json_body(response).await;
    assert_eq!(error["errors"][0]["field"], "price");

    let response = send(&app, "GET", "/menuitem", None).await;
    assert!(json_body(response).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_update_rejects_invalid_fields() {
    let app = app(false).await;
    let created = json_body(send(&app, "POST", "/menuitem", Some(margherita())).await).await;
    let uri = format!("/menuitem/{}", created["id"]);

    let mut body = margherita();
    body["name"] = json!("");
    body["price"] = json!(0);

    for target in [uri.as_str(), "/menuitem/9999"] {
        let response = send(&app, "PUT", target, Some(body.clone())).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error = json_body(response).await;
        let fields: Vec<&str> = error["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"price"));
    }

    let response = send(&app, "GET", &uri, None).await;
    assert_eq!(json_body(response).await, created);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = app(false).await;
    let request = Request::builder()
        .method("POST")
        .uri("/menuitem")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = json_body(response).await;
    assert_eq!(error["error"], "BadRequest");
    assert!(error.get("errors").is_none());
}

#[tokio::test]
async fn test_non_integer_id_is_bad_request() {
    let app = app(true).await;

    let response = send(&app, "GET", "/menuitem/abc", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_existing_and_missing() {
    let app = app(false).await;
    let created = json_body(send(&app, "POST", "/menuitem", Some(margherita())).await).await;
    let id = created["id"].as_i64().unwrap();

    let mut body = margherita();
    body["price"] = json!(13.5);
    body["category"] = json!("Pizza");

    let response = send(&app, "PUT", &format!("/menuitem/{}", id), Some(body.clone())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    assert_eq!(updated["id"].as_i64(), Some(id));
    assert_eq!(updated["price"].as_f64(), Some(13.5));
    assert_eq!(updated["category"], "Pizza");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let response = send(&app, "PUT", "/menuitem/9999", Some(body)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, "GET", "/menuitem", None).await;
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_category_route_is_case_insensitive() {
    let app = app(true).await;

    let response = send(&app, "GET", "/menuitem/category/MAIN%20COURSE", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let items = json_body(response).await;
    assert_eq!(names(&items), vec!["Grilled Salmon", "Margherita Pizza"]);

    let response = send(&app, "GET", "/menuitem/category/Drinks", None).await;
    assert!(json_body(response).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_dietary_and_name_routes() {
    let app = app(true).await;

    let response = send(&app, "GET", "/menuitem/dietary/gluten-free", None).await;
    assert_eq!(names(&json_body(response).await), vec!["Grilled Salmon"]);

    let response = send(&app, "GET", "/menuitem/name/Cake", None).await;
    assert_eq!(names(&json_body(response).await), vec!["Chocolate Lava Cake"]);
}

#[tokio::test]
async fn test_search_route() {
    let app = app(true).await;

    let response = send(&app, "GET", "/menuitem/search?searchTerm=course", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        names(&json_body(response).await),
        vec!["Grilled Salmon", "Margherita Pizza"]
    );

    let response = send(
        &app,
        "GET",
        "/menuitem/search?searchTerm=Caesar%20Salad&exactMatch=true",
        None,
    )
    .await;
    assert_eq!(names(&json_body(response).await), vec!["Caesar Salad"]);

    let response = send(
        &app,
        "GET",
        "/menuitem/search?searchTerm=caesar%20salad&exactMatch=True",
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(names(&json_body(response).await), vec!["Caesar Salad"]);

    let response = send(&app, "GET", "/menuitem/search?searchTerm=%20%20", None).await;
    assert!(json_body(response).await.as_array().unwrap().is_empty());

    let response = send(&app, "GET", "/menuitem/search?exactMatch=maybe", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_and_request_id() {
    let app = app(false).await;

    let response = send(&app, "GET", "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(json_body(response).await["status"], "healthy");

    let response = send(&app, "GET", "/health/ready", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}
