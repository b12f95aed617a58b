//! Router tests against an in-memory database.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use barista_api::{router, ApiConfig, AppState};
use barista_core::{MenuService, NewCoffee};
use barista_db::{Database, DbConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

/// `(name, price_cents, water_ml, milk_ml, coffee_grounds_g)`
const MENU: &[(&str, i64, i64, i64, i64)] = &[
    ("Expresso", 200, 50, 0, 15),
    ("Expresso Duplo", 300, 100, 0, 30),
    ("Cappuccino", 450, 30, 120, 15),
    ("Flat White", 550, 30, 150, 15),
    ("Americano", 350, 100, 0, 15),
];

async fn app() -> (Router, Database) {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let menu = MenuService::new(db.clone());
    for &(name, price_cents, water_ml, milk_ml, coffee_grounds_g) in MENU {
        menu.create_coffee(&NewCoffee {
            name: name.to_string(),
            price_cents,
            water_ml,
            milk_ml,
            coffee_grounds_g,
        })
        .await
        .unwrap();
    }

    let app = router(AppState::new(db.clone()), &ApiConfig::default());
    (app, db)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

fn coffee_id(menu: &Value, name: &str) -> i64 {
    menu.as_array()
        .unwrap()
        .iter()
        .find(|item| item["name"] == name)
        .and_then(|item| item["id"].as_i64())
        .unwrap()
}

async fn order_count(db: &Database) -> i64 {
    db.orders().count().await.unwrap()
}

// =============================================================================
// Root / Health
// =============================================================================

#[tokio::test]
async fn test_root_and_health() {
    let (app, _) = app().await;

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Coffee Shop API");
    assert!(body["version"].is_string());

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_health_reports_closed_database() {
    let (app, db) = app().await;
    db.close().await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
}

// =============================================================================
// Menu
// =============================================================================

#[tokio::test]
async fn test_menu_prices_are_major_units() {
    let (app, _) = app().await;

    let (status, menu) = get(&app, "/menu/").await;
    assert_eq!(status, StatusCode::OK);

    let items = menu.as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["name"], "Expresso");
    assert_eq!(items[0]["price"], json!(2.0));
    assert_eq!(items[2]["price"], json!(4.5));
    assert_eq!(items[3]["milk_ml"], json!(150));
}

#[tokio::test]
async fn test_admin_listing_prices_are_integer_cents() {
    let (app, _) = app().await;

    let (status, all) = get(&app, "/menu/all").await;
    assert_eq!(status, StatusCode::OK);

    for item in all.as_array().unwrap() {
        assert!(item["price"].is_i64(), "{item}");
    }
    assert_eq!(all[2]["price"], json!(450));
}

#[tokio::test]
async fn test_menu_and_admin_prices_agree() {
    let (app, _) = app().await;

    let (_, menu) = get(&app, "/menu").await;
    let (_, all) = get(&app, "/menu/all").await;

    for (display, admin) in menu.as_array().unwrap().iter().zip(all.as_array().unwrap()) {
        assert_eq!(display["id"], admin["id"]);
        let major = display["price"].as_f64().unwrap();
        assert_eq!((major * 100.0).round() as i64, admin["price"].as_i64().unwrap());
    }
}

// =============================================================================
// Orders
// =============================================================================

#[tokio::test]
async fn test_create_order_scenario() {
    let (app, _) = app().await;
    let (_, menu) = get(&app, "/menu/").await;
    let expresso = coffee_id(&menu, "Expresso");
    let cappuccino = coffee_id(&menu, "Cappuccino");

    let (status, order) = post_json(
        &app,
        "/orders/",
        json!({ "items": [
            { "coffee_id": expresso, "quantity": 2 },
            { "coffee_id": cappuccino, "quantity": 1 },
        ]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["total_price"], json!(8.5));
    assert_eq!(order["status"], "pending");
    assert!(order["created_at"].is_string());

    let items = order["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["coffee_name"], "Expresso");
    assert_eq!(items[0]["item_price"], json!(4.0));
    assert_eq!(items[1]["coffee_name"], "Cappuccino");
    assert_eq!(items[1]["item_price"], json!(4.5));
}

#[tokio::test]
async fn test_order_total_is_major_unit_float() {
    let (app, _) = app().await;
    let (_, menu) = get(&app, "/menu/").await;
    let flat_white = coffee_id(&menu, "Flat White");

    let (_, order) = post_json(
        &app,
        "/orders",
        json!({ "items": [{ "coffee_id": flat_white, "quantity": 1 }] }),
    )
    .await;

    assert!(order["total_price"].is_f64());
    assert_eq!(order["total_price"], json!(5.5));
}

#[tokio::test]
async fn test_empty_order() {
    let (app, db) = app().await;

    let (status, order) = post_json(&app, "/orders/", json!({ "items": [] })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["total_price"], json!(0.0));
    assert_eq!(order["items"], json!([]));
    assert_eq!(order_count(&db).await, 1);
}

#[tokio::test]
async fn test_unknown_coffee_is_rejected() {
    let (app, db) = app().await;
    let (_, menu) = get(&app, "/menu/").await;
    let expresso = coffee_id(&menu, "Expresso");

    let (status, body) = post_json(
        &app,
        "/orders/",
        json!({ "items": [
            { "coffee_id": expresso, "quantity": 1 },
            { "coffee_id": 99999, "quantity": 1 },
        ]}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Coffee with id 99999 not found");
    assert_eq!(order_count(&db).await, 0);
}

#[tokio::test]
async fn test_invalid_quantity_is_unprocessable() {
    let (app, db) = app().await;
    let (_, menu) = get(&app, "/menu/").await;
    let expresso = coffee_id(&menu, "Expresso");

    let (status, body) = post_json(
        &app,
        "/orders/",
        json!({ "items": [{ "coffee_id": expresso, "quantity": 0 }] }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
    assert_eq!(order_count(&db).await, 0);
}

#[tokio::test]
async fn test_overflowing_quantity_is_unprocessable() {
    let (app, db) = app().await;
    let (_, menu) = get(&app, "/menu/").await;
    let expresso = coffee_id(&menu, "Expresso");

    let (status, body) = post_json(
        &app,
        "/orders/",
        json!({ "items": [{ "coffee_id": expresso, "quantity": 100_000_000_000_000_000_i64 }] }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "quantity is too large");
    assert_eq!(order_count(&db).await, 0);
}

#[tokio::test]
async fn test_malformed_body_is_unprocessable() {
    let (app, _) = app().await;

    let (status, body) = post_json(&app, "/orders/", json!({ "lines": [] })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());

    let (status, _) = post_json(
        &app,
        "/orders/",
        json!({ "items": [{ "coffee_id": "espresso", "quantity": 1 }] }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_pending_orders() {
    let (app, db) = app().await;
    let (_, menu) = get(&app, "/menu/").await;
    let americano = coffee_id(&menu, "Americano");

    let (_, first) = post_json(
        &app,
        "/orders/",
        json!({ "items": [{ "coffee_id": americano, "quantity": 1 }] }),
    )
    .await;
    let (_, second) = post_json(
        &app,
        "/orders/",
        json!({ "items": [{ "coffee_id": americano, "quantity": 2 }] }),
    )
    .await;

    mark_completed(&db, first["id"].as_i64().unwrap()).await;

    let (status, pending) = get(&app, "/orders/pending").await;
    assert_eq!(status, StatusCode::OK);

    let pending = pending.as_array().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["id"], second["id"]);
    assert_eq!(pending[0]["items"][0]["coffee_name"], "Americano");
    assert_eq!(pending[0]["items"][0]["item_price"], json!(7.0));
}

/// Marks an order completed behind the service's back.
async fn mark_completed(db: &Database, id: i64) {
    sqlx::query("UPDATE orders SET status = 'completed' WHERE id = ?1")
        .bind(id)
        .execute(db.pool())
        .await
        .unwrap();
}

// =============================================================================
// Consumption
// =============================================================================

#[tokio::test]
async fn test_consumption_without_orders() {
    let (app, _) = app().await;

    let (status, report) = get(&app, "/orders/consumption").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        report,
        json!({
            "period_days": 1,
            "total_coffees": 0,
            "total_water_ml": 0,
            "total_milk_ml": 0,
            "total_coffee_grounds_g": 0,
            "daily_averages": {
                "coffees": 0.0,
                "water_ml": 0.0,
                "milk_ml": 0.0,
                "coffee_grounds_g": 0.0,
            },
        })
    );
}

#[tokio::test]
async fn test_consumption_scenario() {
    let (app, _) = app().await;
    let (_, menu) = get(&app, "/menu/").await;
    let expresso = coffee_id(&menu, "Expresso");
    let cappuccino = coffee_id(&menu, "Cappuccino");

    post_json(
        &app,
        "/orders/",
        json!({ "items": [
            { "coffee_id": expresso, "quantity": 2 },
            { "coffee_id": cappuccino, "quantity": 1 },
        ]}),
    )
    .await;

    let (status, report) = get(&app, "/orders/consumption?days=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["total_coffees"], json!(3));
    assert_eq!(report["total_water_ml"], json!(130));
    assert_eq!(report["total_milk_ml"], json!(120));
    assert_eq!(report["total_coffee_grounds_g"], json!(45));
    assert_eq!(report["daily_averages"]["coffees"], json!(3.0));

    let (_, weekly) = get(&app, "/orders/consumption?days=7").await;
    assert_eq!(weekly["period_days"], json!(7));
    assert_eq!(weekly["total_coffees"], json!(3));
    let avg_water = weekly["daily_averages"]["water_ml"].as_f64().unwrap();
    assert!((avg_water - 130.0 / 7.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_consumption_rejects_bad_window() {
    let (app, _) = app().await;

    for uri in [
        "/orders/consumption?days=0",
        "/orders/consumption?days=-3",
        "/orders/consumption?days=week",
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        assert!(body["detail"].is_string(), "{uri}");
    }
}
