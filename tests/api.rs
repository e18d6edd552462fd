//! End-to-end behavior through the full router.
//!
//! The first group needs no database: requests are rejected before any query runs.
//! The second group runs against `TEST_DATABASE_URL` and is skipped when it is unset.

#[macro_use]
mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{delete, error_code, get, patch, post, put, send_request, unique};
use restaurant_api::models::{Customer, MenuItem, Order, OrderStatus, Restaurant};
use rust_decimal_macros::dec;
use serde_json::{json, Value};

fn parse<T: serde::de::DeserializeOwned>(body: Value) -> T {
    serde_json::from_value(body).expect("response shape")
}

// ---------- no database ----------

#[tokio::test]
async fn banner_and_health() {
    let app = common::offline_app();

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Restaurant API");
    assert!(body["version"].is_string());

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy" }));

    let (status, body) = get(&app, "/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "restaurant-api");
}

#[tokio::test]
async fn ready_reports_unreachable_database() {
    let app = common::offline_app();
    let (status, body) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = common::offline_app();
    let (status, body) = get(&app, "/api/v1/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/orders/{id}/status"].is_object());
}

#[tokio::test]
async fn unknown_route_is_404_with_error_body() {
    let app = common::offline_app();
    let (status, body) = get(&app, "/api/v1/drivers").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "not_found");
}

#[tokio::test]
async fn non_integer_id_is_400() {
    let app = common::offline_app();
    for uri in [
        "/api/v1/restaurants/abc",
        "/api/v1/menu-items/1.5",
        "/api/v1/customers/-",
        "/api/v1/orders/xyz",
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(error_code(&body), "bad_request", "{uri}");
    }
}

#[tokio::test]
async fn malformed_json_is_400() {
    let app = common::offline_app();
    let request = Request::post("/api/v1/restaurants")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .expect("request");
    let (status, body) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "bad_request");
}

#[tokio::test]
async fn malformed_query_is_400() {
    let app = common::offline_app();
    let (status, body) = get(&app, "/api/v1/orders?customer_id=first").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "bad_request");
}

#[tokio::test]
async fn oversized_body_is_413() {
    let app = common::offline_app();
    let payload = json!({ "name": "x".repeat(common::BODY_LIMIT + 1) }).to_string();
    let request = Request::post("/api/v1/restaurants")
        .header("content-type", "application/json")
        .header("content-length", payload.len())
        .body(Body::from(payload))
        .expect("request");
    let (status, _) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn invalid_payloads_are_rejected_before_storage() {
    let app = common::offline_app();
    let cases = [
        ("/api/v1/restaurants", json!({ "name": "   " }), "name"),
        ("/api/v1/restaurants", json!({ "name": "Luigi's", "email": "nope" }), "email"),
        ("/api/v1/customers", json!({ "name": "Ada" }), "email"),
        ("/api/v1/customers", json!({ "name": "Ada", "email": "ada@" }), "email"),
        ("/api/v1/menu-items", json!({ "restaurant_id": 1, "name": "Soup" }), "price"),
        ("/api/v1/menu-items", json!({ "restaurant_id": 1, "name": "Soup", "price": 0 }), "price"),
        ("/api/v1/menu-items", json!({ "name": "Soup", "price": 4.5 }), "restaurant_id"),
        (
            "/api/v1/menu-items",
            json!({ "restaurant_id": 1, "name": "Caviar", "price": 1000000000.00 }),
            "price must be at most",
        ),
        ("/api/v1/restaurants", json!({ "name": "x\u{0}y" }), "NUL"),
        (
            "/api/v1/customers",
            json!({ "name": "Ada", "email": "ada@example.com", "phone": "\u{0}" }),
            "phone",
        ),
        ("/api/v1/orders", json!({ "customer_id": 1, "restaurant_id": 1, "items": [] }), "items"),
        (
            "/api/v1/orders",
            json!({ "customer_id": 1, "restaurant_id": 1, "items": [{ "menu_item_id": 1, "quantity": 0 }] }),
            "quantity",
        ),
    ];
    for (uri, payload, field) in cases {
        let (status, body) = post(&app, uri, payload.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri} {payload}");
        assert_eq!(error_code(&body), "validation_error", "{uri} {payload}");
        let message = body["error"]["message"].as_str().unwrap_or_default();
        assert!(message.contains(field), "{message}");
    }
}

#[tokio::test]
async fn unknown_status_is_rejected() {
    let app = common::offline_app();
    for bad in ["shipped", "Pending", "CANCELLED", ""] {
        let (status, body) = patch(&app, "/api/v1/orders/1/status", json!({ "status": bad })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{bad}");
        assert_eq!(error_code(&body), "validation_error");
    }
}

// ---------- database ----------

struct Fixture {
    restaurant: Restaurant,
    menu_item: MenuItem,
    customer: Customer,
}

async fn fixture(app: &axum::Router) -> Fixture {
    let (status, body) = post(
        app,
        "/api/v1/restaurants",
        json!({ "name": unique("Trattoria"), "cuisine_type": "Italian" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let restaurant: Restaurant = parse(body);

    let (status, body) = post(
        app,
        "/api/v1/menu-items",
        json!({ "restaurant_id": restaurant.id, "name": "Margherita", "price": 10.00, "category": "Pizza" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let menu_item: MenuItem = parse(body);

    let email = format!("{}@example.com", unique("guest"));
    let (status, body) = post(app, "/api/v1/customers", json!({ "name": "Grace", "email": email })).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let customer: Customer = parse(body);

    Fixture {
        restaurant,
        menu_item,
        customer,
    }
}

async fn place_order(app: &axum::Router, f: &Fixture, quantity: i32) -> Order {
    let (status, body) = post(
        app,
        "/api/v1/orders",
        json!({
            "customer_id": f.customer.id,
            "restaurant_id": f.restaurant.id,
            "delivery_address": "1 Main St",
            "items": [{ "menu_item_id": f.menu_item.id, "quantity": quantity }]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    parse(body)
}

#[tokio::test]
async fn order_total_is_priced_from_the_menu() {
    let app = database_app_or_skip!();
    let f = fixture(&app).await;
    assert!(f.menu_item.is_available);
    assert_eq!(f.menu_item.price, dec!(10.00));

    let order = place_order(&app, &f, 2).await;
    assert_eq!(order.total_amount, dec!(20.00));
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items.len(), 1);
    let item = &order.items[0];
    assert_eq!(item.quantity, 2);
    assert_eq!(item.unit_price, dec!(10.00));
    assert_eq!(item.menu_item_id, f.menu_item.id);
    let summary = item.menu_item.as_ref().expect("menu item summary");
    assert_eq!(summary.name, "Margherita");
}

#[tokio::test]
async fn price_change_does_not_rewrite_existing_orders() {
    let app = database_app_or_skip!();
    let f = fixture(&app).await;
    let order = place_order(&app, &f, 3).await;

    let (status, _) = put(
        &app,
        &format!("/api/v1/menu-items/{}", f.menu_item.id),
        json!({ "restaurant_id": f.restaurant.id, "name": "Margherita", "price": 12.50, "category": "Pizza" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app, &format!("/api/v1/orders/{}", order.id)).await;
    assert_eq!(status, StatusCode::OK);
    let reloaded: Order = parse(body);
    assert_eq!(reloaded.total_amount, dec!(30.00));
    assert_eq!(reloaded.items[0].unit_price, dec!(10.00));

    let next = place_order(&app, &f, 2).await;
    assert_eq!(next.total_amount, dec!(25.00));
}

#[tokio::test]
async fn failed_order_leaves_nothing_behind() {
    let app = database_app_or_skip!();
    let f = fixture(&app).await;

    let (status, body) = post(
        &app,
        "/api/v1/orders",
        json!({
            "customer_id": f.customer.id,
            "restaurant_id": f.restaurant.id,
            "items": [
                { "menu_item_id": f.menu_item.id, "quantity": 1 },
                { "menu_item_id": i64::MAX, "quantity": 1 }
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "invalid_reference");

    let (status, body) = post(
        &app,
        "/api/v1/orders",
        json!({
            "customer_id": i64::MAX,
            "restaurant_id": f.restaurant.id,
            "items": [{ "menu_item_id": f.menu_item.id, "quantity": 1 }]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "invalid_reference");

    let (status, body) = get(&app, &format!("/api/v1/orders?customer_id={}", f.customer.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn order_total_beyond_storage_range_is_rejected() {
    let app = database_app_or_skip!();
    let f = fixture(&app).await;

    let (status, body) = post(
        &app,
        "/api/v1/orders",
        json!({
            "customer_id": f.customer.id,
            "restaurant_id": f.restaurant.id,
            "items": [{ "menu_item_id": f.menu_item.id, "quantity": 2_000_000_000 }]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    assert_eq!(error_code(&body), "validation_error");

    let (_, body) = get(&app, &format!("/api/v1/orders?customer_id={}", f.customer.id)).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn orders_filter_by_customer_and_restaurant() {
    let app = database_app_or_skip!();
    let f = fixture(&app).await;
    let first = place_order(&app, &f, 1).await;
    let second = place_order(&app, &f, 4).await;

    let (status, body) = get(&app, &format!("/api/v1/orders?customer_id={}", f.customer.id)).await;
    assert_eq!(status, StatusCode::OK);
    let orders: Vec<Order> = parse(body);
    let ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    assert!(orders.iter().all(|o| o.items.len() == 1));

    let (_, body) = get(
        &app,
        &format!("/api/v1/orders?customer_id={}&restaurant_id={}", f.customer.id, i64::MAX),
    )
    .await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn menu_items_filter_and_order_by_category_then_name() {
    let app = database_app_or_skip!();
    let f = fixture(&app).await;
    for (name, category) in [("Tiramisu", "Dessert"), ("Bruschetta", "Antipasti"), ("Cannoli", "Dessert")] {
        let (status, _) = post(
            &app,
            "/api/v1/menu-items",
            json!({ "restaurant_id": f.restaurant.id, "name": name, "price": 6.00, "category": category }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = get(&app, &format!("/api/v1/menu-items?restaurant_id={}", f.restaurant.id)).await;
    assert_eq!(status, StatusCode::OK);
    let items: Vec<MenuItem> = parse(body);
    let names: Vec<&str> = items.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Bruschetta", "Cannoli", "Tiramisu", "Margherita"]);
    assert!(items.iter().all(|m| m.restaurant_id == f.restaurant.id));
}

#[tokio::test]
async fn menu_item_for_missing_restaurant_is_invalid_reference() {
    let app = database_app_or_skip!();
    let (status, body) = post(
        &app,
        "/api/v1/menu-items",
        json!({ "restaurant_id": i64::MAX, "name": "Ghost", "price": 1.00 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "invalid_reference");
}

#[tokio::test]
async fn get_is_repeatable() {
    let app = database_app_or_skip!();
    let f = fixture(&app).await;
    let uri = format!("/api/v1/restaurants/{}", f.restaurant.id);
    let (_, first) = get(&app, &uri).await;
    let (_, second) = get(&app, &uri).await;
    assert_eq!(first, second);
    let restaurant: Restaurant = parse(first);
    assert_eq!(restaurant, f.restaurant);
}

#[tokio::test]
async fn update_keeps_identity_and_creation_time() {
    let app = database_app_or_skip!();
    let f = fixture(&app).await;

    let (status, body) = put(
        &app,
        &format!("/api/v1/restaurants/{}", f.restaurant.id),
        json!({ "name": "Renamed", "phone": "555-0100" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated: Restaurant = parse(body);
    assert_eq!(updated.id, f.restaurant.id);
    assert_eq!(updated.created_at, f.restaurant.created_at);
    assert!(updated.updated_at >= f.restaurant.updated_at);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.phone.as_deref(), Some("555-0100"));
    assert_eq!(updated.cuisine_type, None);

    let (status, body) = put(
        &app,
        &format!("/api/v1/customers/{}", f.customer.id),
        json!({ "name": "Grace H.", "email": f.customer.email }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let customer: Customer = parse(body);
    assert_eq!(customer.id, f.customer.id);
    assert_eq!(customer.created_at, f.customer.created_at);
    assert_eq!(customer.name, "Grace H.");
}

#[tokio::test]
async fn missing_rows_are_404_everywhere() {
    let app = database_app_or_skip!();
    let missing = i64::MAX;

    for resource in ["restaurants", "menu-items", "customers", "orders"] {
        let (status, body) = get(&app, &format!("/api/v1/{resource}/{missing}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{resource}");
        assert_eq!(error_code(&body), "not_found");

        let (status, _) = delete(&app, &format!("/api/v1/{resource}/{missing}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{resource}");
    }

    let (status, _) = put(&app, &format!("/api/v1/restaurants/{missing}"), json!({ "name": "Nobody" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = put(
        &app,
        &format!("/api/v1/customers/{missing}"),
        json!({ "name": "Nobody", "email": "nobody@example.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = put(
        &app,
        &format!("/api/v1/menu-items/{missing}"),
        json!({ "restaurant_id": 1, "name": "Nothing", "price": 1.00 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = patch(&app, &format!("/api/v1/orders/{missing}/status"), json!({ "status": "ready" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn every_status_is_accepted_in_any_order() {
    let app = database_app_or_skip!();
    let f = fixture(&app).await;
    let order = place_order(&app, &f, 1).await;
    let uri = format!("/api/v1/orders/{}/status", order.id);

    for status_name in ["delivered", "pending", "cancelled", "confirmed", "ready", "preparing"] {
        let (status, body) = patch(&app, &uri, json!({ "status": status_name })).await;
        assert_eq!(status, StatusCode::OK, "{status_name}");
        let updated: Order = parse(body);
        assert_eq!(updated.status.as_str(), status_name);
        assert_eq!(updated.total_amount, order.total_amount);
        assert_eq!(updated.created_at, order.created_at);
    }

    let (status, _) = patch(&app, &uri, json!({ "status": "shipped" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, body) = get(&app, &format!("/api/v1/orders/{}", order.id)).await;
    assert_eq!(body["status"], "preparing");
}

#[tokio::test]
async fn delete_twice_is_200_then_404() {
    let app = database_app_or_skip!();
    let f = fixture(&app).await;
    let order = place_order(&app, &f, 1).await;
    let uri = format!("/api/v1/orders/{}", order.id);

    let (status, body) = delete(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Order deleted successfully");

    let (status, _) = delete(&app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn referenced_rows_cannot_be_deleted() {
    let app = database_app_or_skip!();
    let f = fixture(&app).await;
    let order = place_order(&app, &f, 1).await;

    for uri in [
        format!("/api/v1/customers/{}", f.customer.id),
        format!("/api/v1/restaurants/{}", f.restaurant.id),
        format!("/api/v1/menu-items/{}", f.menu_item.id),
    ] {
        let (status, body) = delete(&app, &uri).await;
        assert_eq!(status, StatusCode::CONFLICT, "{uri}");
        assert_eq!(error_code(&body), "conflict");
    }

    let (status, _) = delete(&app, &format!("/api/v1/orders/{}", order.id)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = delete(&app, &format!("/api/v1/restaurants/{}", f.restaurant.id)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get(&app, &format!("/api/v1/menu-items/{}", f.menu_item.id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
