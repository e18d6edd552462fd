use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MenuItem {
    pub id: i64,
    pub restaurant_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MenuItemRequest {
    #[serde(default)]
    pub restaurant_id: i64,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    #[serde(default = "available_by_default")]
    pub is_available: bool,
}

impl Default for MenuItemRequest {
    fn default() -> Self {
        MenuItemRequest {
            restaurant_id: 0,
            name: String::new(),
            description: None,
            price: None,
            category: None,
            is_available: true,
        }
    }
}

fn available_by_default() -> bool {
    true
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MenuItemFilter {
    /// Only items belonging to this restaurant.
    pub restaurant_id: Option<i64>,
}
