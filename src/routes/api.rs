//! Resource routes mounted under `/api/v1`.

use crate::handlers::{
    create_customer, create_menu_item, create_order, create_restaurant, delete_customer, delete_menu_item,
    delete_order, delete_restaurant, get_customer, get_menu_item, get_order, get_restaurant, list_customers,
    list_menu_items, list_orders, list_restaurants, update_customer, update_menu_item, update_order_status,
    update_restaurant,
};
use crate::openapi::ApiDoc;
use crate::state::AppState;
use axum::{
    routing::{get, patch},
    Json, Router,
};
use utoipa::OpenApi;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/restaurants", get(list_restaurants).post(create_restaurant))
        .route(
            "/restaurants/:id",
            get(get_restaurant).put(update_restaurant).delete(delete_restaurant),
        )
        .route("/menu-items", get(list_menu_items).post(create_menu_item))
        .route(
            "/menu-items/:id",
            get(get_menu_item).put(update_menu_item).delete(delete_menu_item),
        )
        .route("/customers", get(list_customers).post(create_customer))
        .route(
            "/customers/:id",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/:id", get(get_order).delete(delete_order))
        .route("/orders/:id/status", patch(update_order_status))
        .route("/openapi.json", get(openapi_json))
        .with_state(state)
}
