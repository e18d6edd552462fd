//! Menu item CRUD handlers. Listing takes an optional `restaurant_id` filter.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{ApiJson, ApiQuery, EntityId};
use crate::models::{MenuItem, MenuItemFilter, MenuItemRequest};
use crate::response::{created, deleted, ok, Message};
use crate::service::MenuItemService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    post,
    path = "/api/v1/menu-items",
    tag = "menu-items",
    request_body = MenuItemRequest,
    responses(
        (status = 201, body = MenuItem),
        (status = 400, description = "Invalid body or unknown restaurant", body = ErrorBody)
    )
)]
pub async fn create_menu_item(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<MenuItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    let item = MenuItemService::create(&state.pool, &body).await?;
    Ok(created(item))
}

#[utoipa::path(
    get,
    path = "/api/v1/menu-items",
    tag = "menu-items",
    params(MenuItemFilter),
    responses(
        (status = 200, description = "Ordered by category, then name", body = [MenuItem]),
        (status = 400, body = ErrorBody)
    )
)]
pub async fn list_menu_items(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<MenuItemFilter>,
) -> Result<impl IntoResponse, AppError> {
    let items = MenuItemService::list(&state.pool, &filter).await?;
    Ok(ok(items))
}

#[utoipa::path(
    get,
    path = "/api/v1/menu-items/{id}",
    tag = "menu-items",
    params(("id" = i64, Path, description = "Menu item id")),
    responses((status = 200, body = MenuItem), (status = 404, body = ErrorBody))
)]
pub async fn get_menu_item(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let item = MenuItemService::get(&state.pool, id).await?;
    Ok(ok(item))
}

#[utoipa::path(
    put,
    path = "/api/v1/menu-items/{id}",
    tag = "menu-items",
    params(("id" = i64, Path, description = "Menu item id")),
    request_body = MenuItemRequest,
    responses(
        (status = 200, body = MenuItem),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody)
    )
)]
pub async fn update_menu_item(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ApiJson(body): ApiJson<MenuItemRequest>,
) -> Result<impl IntoResponse, AppError> {
    let item = MenuItemService::update(&state.pool, id, &body).await?;
    Ok(ok(item))
}

#[utoipa::path(
    delete,
    path = "/api/v1/menu-items/{id}",
    tag = "menu-items",
    params(("id" = i64, Path, description = "Menu item id")),
    responses(
        (status = 200, body = Message),
        (status = 404, body = ErrorBody),
        (status = 409, description = "Order lines still reference the item", body = ErrorBody)
    )
)]
pub async fn delete_menu_item(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    MenuItemService::delete(&state.pool, id).await?;
    Ok(deleted("Menu item"))
}
