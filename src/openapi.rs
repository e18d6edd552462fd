//! OpenAPI document for every route, served at `/api/v1/openapi.json`.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers;
use crate::models::{
    CreateOrderRequest, Customer, CustomerRequest, MenuItem, MenuItemRequest, MenuItemSummary, Order, OrderItem,
    OrderLineRequest, OrderStatus, Restaurant, RestaurantRequest, UpdateOrderStatusRequest,
};
use crate::response::Message;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Restaurant API", description = "Restaurants, menus, customers and orders"),
    paths(
        handlers::restaurant::create_restaurant,
        handlers::restaurant::list_restaurants,
        handlers::restaurant::get_restaurant,
        handlers::restaurant::update_restaurant,
        handlers::restaurant::delete_restaurant,
        handlers::menu_item::create_menu_item,
        handlers::menu_item::list_menu_items,
        handlers::menu_item::get_menu_item,
        handlers::menu_item::update_menu_item,
        handlers::menu_item::delete_menu_item,
        handlers::customer::create_customer,
        handlers::customer::list_customers,
        handlers::customer::get_customer,
        handlers::customer::update_customer,
        handlers::customer::delete_customer,
        handlers::order::create_order,
        handlers::order::list_orders,
        handlers::order::get_order,
        handlers::order::update_order_status,
        handlers::order::delete_order,
    ),
    components(schemas(
        Restaurant,
        RestaurantRequest,
        MenuItem,
        MenuItemRequest,
        Customer,
        CustomerRequest,
        Order,
        OrderItem,
        MenuItemSummary,
        OrderStatus,
        CreateOrderRequest,
        OrderLineRequest,
        UpdateOrderStatusRequest,
        Message,
        ErrorBody,
        ErrorDetail,
    )),
    tags(
        (name = "restaurants"),
        (name = "menu-items"),
        (name = "customers"),
        (name = "orders")
    )
)]
pub struct ApiDoc;
