//! Per-resource storage operations. Each service validates its request, runs parameterized SQL, and maps rows.

mod customer;
mod menu_item;
mod order;
mod restaurant;
mod validation;

pub use customer::CustomerService;
pub use menu_item::MenuItemService;
pub use order::{price_lines, OrderService, PricedLine};
pub use restaurant::RestaurantService;
pub use validation::{RequestValidator, Validate};

use crate::sql::QueryBuf;
use sqlx::postgres::{PgQueryResult, PgRow};
use sqlx::{Executor, FromRow, Postgres};

async fn fetch_optional<'e, T, E>(executor: E, q: &'e QueryBuf) -> Result<Option<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    E: Executor<'e, Database = Postgres>,
{
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let mut query = sqlx::query_as::<_, T>(&q.sql);
    for p in &q.params {
        query = query.bind(p.clone());
    }
    query.fetch_optional(executor).await
}

async fn fetch_all<'e, T, E>(executor: E, q: &'e QueryBuf) -> Result<Vec<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    E: Executor<'e, Database = Postgres>,
{
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let mut query = sqlx::query_as::<_, T>(&q.sql);
    for p in &q.params {
        query = query.bind(p.clone());
    }
    query.fetch_all(executor).await
}

/// DELETE-style statement bound to a single id.
async fn execute_by_id<'e, E>(executor: E, q: &'e QueryBuf, id: i64) -> Result<PgQueryResult, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    tracing::debug!(sql = %q.sql, id, "query");
    sqlx::query(&q.sql).bind(id).execute(executor).await
}

/// Bound to `$1`; used with `sql::select_by_id`.
async fn fetch_by_id<'e, T, E>(executor: E, q: &'e QueryBuf, id: i64) -> Result<Option<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    E: Executor<'e, Database = Postgres>,
{
    tracing::debug!(sql = %q.sql, id, "query");
    sqlx::query_as::<_, T>(&q.sql).bind(id).fetch_optional(executor).await
}
