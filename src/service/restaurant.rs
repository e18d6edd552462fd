use super::{execute_by_id, fetch_all, fetch_by_id, fetch_optional, Validate};
use crate::error::AppError;
use crate::models::{Restaurant, RestaurantRequest};
use crate::sql::{delete, insert, select_by_id, select_list, update, PgBindValue, RESTAURANTS};
use sqlx::PgPool;

pub struct RestaurantService;

impl RestaurantService {
    fn columns(req: &RestaurantRequest) -> Vec<(&'static str, PgBindValue)> {
        vec![
            ("name", req.name.trim().into()),
            ("address", req.address.clone().into()),
            ("phone", req.phone.clone().into()),
            ("email", req.email.clone().into()),
            ("cuisine_type", req.cuisine_type.clone().into()),
        ]
    }

    pub async fn create(pool: &PgPool, req: &RestaurantRequest) -> Result<Restaurant, AppError> {
        req.validate()?;
        let q = insert(&RESTAURANTS, &Self::columns(req));
        let row = fetch_optional(pool, &q)
            .await
            .map_err(|e| AppError::on_write(e, "restaurant"))?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
        Ok(row)
    }

    /// Newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Restaurant>, AppError> {
        let q = select_list(&RESTAURANTS, &[], &["created_at DESC", "id DESC"]);
        Ok(fetch_all(pool, &q).await?)
    }

    pub async fn get(pool: &PgPool, id: i64) -> Result<Restaurant, AppError> {
        let q = select_by_id(&RESTAURANTS);
        fetch_by_id(pool, &q, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("restaurant {}", id)))
    }

    pub async fn update(pool: &PgPool, id: i64, req: &RestaurantRequest) -> Result<Restaurant, AppError> {
        req.validate()?;
        let q = update(&RESTAURANTS, id, &Self::columns(req));
        fetch_optional(pool, &q)
            .await
            .map_err(|e| AppError::on_write(e, "restaurant"))?
            .ok_or_else(|| AppError::NotFound(format!("restaurant {}", id)))
    }

    /// Menu items go with the restaurant; orders placed with it block the delete.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<(), AppError> {
        let q = delete(&RESTAURANTS);
        let done = execute_by_id(pool, &q, id)
            .await
            .map_err(|e| AppError::on_delete(e, &format!("restaurant {}", id)))?;
        if done.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("restaurant {}", id)));
        }
        Ok(())
    }
}
