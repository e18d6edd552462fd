use super::{execute_by_id, fetch_all, fetch_by_id, fetch_optional, Validate};
use crate::error::AppError;
use crate::models::{MenuItem, MenuItemFilter, MenuItemRequest};
use crate::sql::{delete, insert, select_by_id, select_list, update, PgBindValue, MENU_ITEMS};
use rust_decimal::Decimal;
use sqlx::PgPool;

pub struct MenuItemService;

impl MenuItemService {
    fn columns(req: &MenuItemRequest) -> Vec<(&'static str, PgBindValue)> {
        vec![
            ("restaurant_id", req.restaurant_id.into()),
            ("name", req.name.trim().into()),
            ("description", req.description.clone().into()),
            ("price", req.price.unwrap_or(Decimal::ZERO).into()),
            ("category", req.category.clone().into()),
            ("is_available", req.is_available.into()),
        ]
    }

    pub async fn create(pool: &PgPool, req: &MenuItemRequest) -> Result<MenuItem, AppError> {
        req.validate()?;
        let q = insert(&MENU_ITEMS, &Self::columns(req));
        let row = fetch_optional(pool, &q)
            .await
            .map_err(|e| AppError::on_write(e, "restaurant_id"))?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
        Ok(row)
    }

    /// Ordered by category then name; without a restaurant filter, grouped by restaurant first.
    pub async fn list(pool: &PgPool, filter: &MenuItemFilter) -> Result<Vec<MenuItem>, AppError> {
        let q = match filter.restaurant_id {
            Some(rid) => select_list(
                &MENU_ITEMS,
                &[("restaurant_id", PgBindValue::I64(rid))],
                &["category", "name", "id"],
            ),
            None => select_list(&MENU_ITEMS, &[], &["restaurant_id", "category", "name", "id"]),
        };
        Ok(fetch_all(pool, &q).await?)
    }

    pub async fn get(pool: &PgPool, id: i64) -> Result<MenuItem, AppError> {
        let q = select_by_id(&MENU_ITEMS);
        fetch_by_id(pool, &q, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("menu item {}", id)))
    }

    /// Price changes never touch existing order lines; they keep their own unit_price.
    pub async fn update(pool: &PgPool, id: i64, req: &MenuItemRequest) -> Result<MenuItem, AppError> {
        req.validate()?;
        let q = update(&MENU_ITEMS, id, &Self::columns(req));
        fetch_optional(pool, &q)
            .await
            .map_err(|e| AppError::on_write(e, "restaurant_id"))?
            .ok_or_else(|| AppError::NotFound(format!("menu item {}", id)))
    }

    pub async fn delete(pool: &PgPool, id: i64) -> Result<(), AppError> {
        let q = delete(&MENU_ITEMS);
        let done = execute_by_id(pool, &q, id)
            .await
            .map_err(|e| AppError::on_delete(e, &format!("menu item {}", id)))?;
        if done.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("menu item {}", id)));
        }
        Ok(())
    }
}
