use super::{execute_by_id, fetch_all, fetch_by_id, fetch_optional, Validate};
use crate::error::AppError;
use crate::models::{Customer, CustomerRequest};
use crate::sql::{delete, insert, select_by_id, select_list, update, PgBindValue, CUSTOMERS};
use sqlx::PgPool;

pub struct CustomerService;

impl CustomerService {
    fn columns(req: &CustomerRequest) -> Vec<(&'static str, PgBindValue)> {
        vec![
            ("name", req.name.trim().into()),
            ("email", req.email.trim().into()),
            ("phone", req.phone.clone().into()),
            ("address", req.address.clone().into()),
        ]
    }

    pub async fn create(pool: &PgPool, req: &CustomerRequest) -> Result<Customer, AppError> {
        req.validate()?;
        let q = insert(&CUSTOMERS, &Self::columns(req));
        let row = fetch_optional(pool, &q)
            .await
            .map_err(|e| AppError::on_write(e, "customer"))?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
        Ok(row)
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Customer>, AppError> {
        let q = select_list(&CUSTOMERS, &[], &["created_at DESC", "id DESC"]);
        Ok(fetch_all(pool, &q).await?)
    }

    pub async fn get(pool: &PgPool, id: i64) -> Result<Customer, AppError> {
        let q = select_by_id(&CUSTOMERS);
        fetch_by_id(pool, &q, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("customer {}", id)))
    }

    pub async fn update(pool: &PgPool, id: i64, req: &CustomerRequest) -> Result<Customer, AppError> {
        req.validate()?;
        let q = update(&CUSTOMERS, id, &Self::columns(req));
        fetch_optional(pool, &q)
            .await
            .map_err(|e| AppError::on_write(e, "customer"))?
            .ok_or_else(|| AppError::NotFound(format!("customer {}", id)))
    }

    pub async fn delete(pool: &PgPool, id: i64) -> Result<(), AppError> {
        let q = delete(&CUSTOMERS);
        let done = execute_by_id(pool, &q, id)
            .await
            .map_err(|e| AppError::on_delete(e, &format!("customer {}", id)))?;
        if done.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("customer {}", id)));
        }
        Ok(())
    }
}
