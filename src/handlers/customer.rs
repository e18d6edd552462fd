//! Customer CRUD handlers.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{ApiJson, EntityId};
use crate::models::{Customer, CustomerRequest};
use crate::response::{created, deleted, ok, Message};
use crate::service::CustomerService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    post,
    path = "/api/v1/customers",
    tag = "customers",
    request_body = CustomerRequest,
    responses(
        (status = 201, body = Customer),
        (status = 400, body = ErrorBody)
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CustomerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerService::create(&state.pool, &body).await?;
    Ok(created(customer))
}

#[utoipa::path(
    get,
    path = "/api/v1/customers",
    tag = "customers",
    responses((status = 200, body = [Customer]))
)]
pub async fn list_customers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let customers = CustomerService::list(&state.pool).await?;
    Ok(ok(customers))
}

#[utoipa::path(
    get,
    path = "/api/v1/customers/{id}",
    tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    responses((status = 200, body = Customer), (status = 404, body = ErrorBody))
)]
pub async fn get_customer(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerService::get(&state.pool, id).await?;
    Ok(ok(customer))
}

#[utoipa::path(
    put,
    path = "/api/v1/customers/{id}",
    tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    request_body = CustomerRequest,
    responses(
        (status = 200, body = Customer),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody)
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ApiJson(body): ApiJson<CustomerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let customer = CustomerService::update(&state.pool, id, &body).await?;
    Ok(ok(customer))
}

#[utoipa::path(
    delete,
    path = "/api/v1/customers/{id}",
    tag = "customers",
    params(("id" = i64, Path, description = "Customer id")),
    responses(
        (status = 200, body = Message),
        (status = 404, body = ErrorBody),
        (status = 409, body = ErrorBody)
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, AppError> {
    CustomerService::delete(&state.pool, id).await?;
    Ok(deleted("Customer"))
}
