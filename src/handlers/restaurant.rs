//! Restaurant CRUD handlers.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{ApiJson, EntityId};
use crate::models::{Restaurant, RestaurantRequest};
use crate::response::{created, deleted, ok, Message};
use crate::service::RestaurantService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    post,
    path = "/api/v1/restaurants",
    tag = "restaurants",
    request_body = RestaurantRequest,
    responses(
        (status = 201, description = "Restaurant created", body = Restaurant),
        (status = 400, description = "Invalid body", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn create_restaurant(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RestaurantRequest>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = RestaurantService::create(&state.pool, &body).await?;
    Ok(created(restaurant))
}

#[utoipa::path(
    get,
    path = "/api/v1/restaurants",
    tag = "restaurants",
    responses((status = 200, description = "All restaurants, newest first", body = [Restaurant]))
)]
pub async fn list_restaurants(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let restaurants = RestaurantService::list(&state.pool).await?;
    Ok(ok(restaurants))
}

#[utoipa::path(
    get,
    path = "/api/v1/restaurants/{id}",
    tag = "restaurants",
    params(("id" = i64, Path, description = "Restaurant id")),
    responses(
        (status = 200, body = Restaurant),
        (status = 404, body = ErrorBody)
    )
)]
pub async fn get_restaurant(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = RestaurantService::get(&state.pool, id).await?;
    Ok(ok(restaurant))
}

#[utoipa::path(
    put,
    path = "/api/v1/restaurants/{id}",
    tag = "restaurants",
    params(("id" = i64, Path, description = "Restaurant id")),
    request_body = RestaurantRequest,
    responses(
        (status = 200, body = Restaurant),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody)
    )
)]
pub async fn update_restaurant(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ApiJson(body): ApiJson<RestaurantRequest>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = RestaurantService::update(&state.pool, id, &body).await?;
    Ok(ok(restaurant))
}

#[utoipa::path(
    delete,
    path = "/api/v1/restaurants/{id}",
    tag = "restaurants",
    params(("id" = i64, Path, description = "Restaurant id")),
    responses(
        (status = 200, body = Message),
        (status = 404, body = ErrorBody),
        (status = 409, description = "Orders still reference the restaurant", body = ErrorBody)
    )
)]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    RestaurantService::delete(&state.pool, id).await?;
    Ok(deleted("Restaurant"))
}
