//! Order handlers: create (priced, atomic), list, fetch, status change, delete.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{ApiJson, ApiQuery, EntityId};
use crate::models::{CreateOrderRequest, Order, OrderFilter, UpdateOrderStatusRequest};
use crate::response::{created, deleted, ok, Message};
use crate::service::OrderService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    post,
    path = "/api/v1/orders",
    tag = "orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order with priced line items", body = Order),
        (status = 400, description = "Invalid body or unknown customer, restaurant, or menu item", body = ErrorBody),
        (status = 500, body = ErrorBody)
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::create(&state.pool, &body).await?;
    Ok(created(order))
}

#[utoipa::path(
    get,
    path = "/api/v1/orders",
    tag = "orders",
    params(OrderFilter),
    responses(
        (status = 200, description = "Newest first", body = [Order]),
        (status = 400, body = ErrorBody)
    )
)]
pub async fn list_orders(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<OrderFilter>,
) -> Result<impl IntoResponse, AppError> {
    let orders = OrderService::list(&state.pool, &filter).await?;
    Ok(ok(orders))
}

#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}",
    tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    responses((status = 200, body = Order), (status = 404, body = ErrorBody))
)]
pub async fn get_order(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::get(&state.pool, id).await?;
    Ok(ok(order))
}

#[utoipa::path(
    patch,
    path = "/api/v1/orders/{id}/status",
    tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, body = Order),
        (status = 400, description = "Unknown status", body = ErrorBody),
        (status = 404, body = ErrorBody)
    )
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ApiJson(body): ApiJson<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::update_status(&state.pool, id, &body).await?;
    Ok(ok(order))
}

#[utoipa::path(
    delete,
    path = "/api/v1/orders/{id}",
    tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    responses((status = 200, body = Message), (status = 404, body = ErrorBody))
)]
pub async fn delete_order(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    OrderService::delete(&state.pool, id).await?;
    Ok(deleted("Order"))
}
