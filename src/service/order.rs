//! Order workflow: price lines from current menu data and persist the order with its items atomically.

use super::validation::max_order_total;
use super::{execute_by_id, fetch_all, fetch_by_id, Validate};
use crate::error::AppError;
use crate::models::{
    CreateOrderRequest, Order, OrderFilter, OrderItem, OrderItemRow, OrderLineRequest, OrderStatus,
    UpdateOrderStatusRequest,
};
use crate::sql::{delete, select_by_id, select_list, PgBindValue, ORDERS};
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use std::collections::HashMap;

const SELECT_ITEMS: &str = r#"
    SELECT oi.id, oi.order_id, oi.menu_item_id, oi.quantity, oi.unit_price,
           mi.name, mi.description, mi.category
    FROM order_items oi
    JOIN menu_items mi ON mi.id = oi.menu_item_id
    WHERE oi.order_id = ANY($1)
    ORDER BY oi.order_id, oi.id
"#;

/// A request line with the unit price read inside the order transaction.
#[derive(Clone, Debug, PartialEq)]
pub struct PricedLine {
    pub menu_item_id: i64,
    pub quantity: i32,
    pub unit_price: Decimal,
}

/// Attach a price to every line and sum `unit_price × quantity`.
/// A line whose menu item is missing from `prices` fails the whole order with `InvalidReference`;
/// a total beyond what `orders.total_amount` stores is a `Validation` error.
pub fn price_lines(
    lines: &[OrderLineRequest],
    prices: &HashMap<i64, Decimal>,
) -> Result<(Vec<PricedLine>, Decimal), AppError> {
    let mut priced = Vec::with_capacity(lines.len());
    let mut total = Decimal::ZERO;
    for line in lines {
        let unit_price = *prices
            .get(&line.menu_item_id)
            .ok_or_else(|| AppError::InvalidReference(format!("menu item {} does not exist", line.menu_item_id)))?;
        total = unit_price
            .checked_mul(Decimal::from(line.quantity))
            .and_then(|subtotal| total.checked_add(subtotal))
            .filter(|t| *t <= max_order_total())
            .ok_or_else(|| {
                AppError::Validation(format!("order total must be at most {}", max_order_total()))
            })?;
        priced.push(PricedLine {
            menu_item_id: line.menu_item_id,
            quantity: line.quantity,
            unit_price,
        });
    }
    Ok((priced, total))
}

pub struct OrderService;

impl OrderService {
    /// Validate, then in one transaction: lock-read prices, insert the order and its items, commit.
    /// Any error before commit drops the transaction, which rolls it back.
    pub async fn create(pool: &PgPool, req: &CreateOrderRequest) -> Result<Order, AppError> {
        req.validate()?;
        let mut tx = pool.begin().await?;

        let prices = Self::current_prices(&mut *tx, &req.items).await?;
        let (lines, total) = price_lines(&req.items, &prices)?;

        let order_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO orders (customer_id, restaurant_id, total_amount, delivery_address, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(req.customer_id)
        .bind(req.restaurant_id)
        .bind(total)
        .bind(req.delivery_address.as_deref())
        .bind(req.notes.as_deref())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::on_write(e, "customer_id or restaurant_id"))?;

        for line in &lines {
            sqlx::query(
                "INSERT INTO order_items (order_id, menu_item_id, quantity, unit_price) VALUES ($1, $2, $3, $4)",
            )
            .bind(order_id)
            .bind(line.menu_item_id)
            .bind(line.quantity)
            .bind(line.unit_price)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::on_write(e, "menu_item_id"))?;
        }

        tx.commit().await?;
        tracing::info!(order_id, lines = lines.len(), total = %total, "order created");
        Self::get(pool, order_id).await
    }

    /// `FOR SHARE` holds concurrent price edits on these rows until the order commits.
    async fn current_prices(
        conn: &mut PgConnection,
        lines: &[OrderLineRequest],
    ) -> Result<HashMap<i64, Decimal>, AppError> {
        let mut ids: Vec<i64> = lines.iter().map(|l| l.menu_item_id).collect();
        ids.sort_unstable();
        ids.dedup();
        tracing::debug!(menu_item_ids = ?ids, "reading prices");
        let rows: Vec<(i64, Decimal)> =
            sqlx::query_as("SELECT id, price FROM menu_items WHERE id = ANY($1) FOR SHARE")
                .bind(ids)
                .fetch_all(&mut *conn)
                .await?;
        Ok(rows.into_iter().collect())
    }

    pub async fn get(pool: &PgPool, id: i64) -> Result<Order, AppError> {
        let q = select_by_id(&ORDERS);
        let mut order: Order = fetch_by_id(pool, &q, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("order {}", id)))?;
        order.items = Self::items_by_order(pool, &[id]).await?.remove(&id).unwrap_or_default();
        Ok(order)
    }

    /// Newest first, each with its items.
    pub async fn list(pool: &PgPool, filter: &OrderFilter) -> Result<Vec<Order>, AppError> {
        let mut filters = Vec::new();
        if let Some(cid) = filter.customer_id {
            filters.push(("customer_id", PgBindValue::I64(cid)));
        }
        if let Some(rid) = filter.restaurant_id {
            filters.push(("restaurant_id", PgBindValue::I64(rid)));
        }
        let q = select_list(&ORDERS, &filters, &["order_date DESC", "id DESC"]);
        let mut orders: Vec<Order> = fetch_all(pool, &q).await?;
        let ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
        let mut items = Self::items_by_order(pool, &ids).await?;
        for order in &mut orders {
            order.items = items.remove(&order.id).unwrap_or_default();
        }
        Ok(orders)
    }

    async fn items_by_order(pool: &PgPool, order_ids: &[i64]) -> Result<HashMap<i64, Vec<OrderItem>>, AppError> {
        let mut out: HashMap<i64, Vec<OrderItem>> = HashMap::new();
        if order_ids.is_empty() {
            return Ok(out);
        }
        tracing::debug!(sql = %SELECT_ITEMS, order_ids = ?order_ids, "query");
        let rows: Vec<OrderItemRow> = sqlx::query_as(SELECT_ITEMS)
            .bind(order_ids.to_vec())
            .fetch_all(pool)
            .await?;
        for row in rows {
            out.entry(row.order_id).or_default().push(OrderItem::from(row));
        }
        Ok(out)
    }

    /// Exact lowercase match against the six statuses; any status may follow any other.
    pub async fn update_status(pool: &PgPool, id: i64, req: &UpdateOrderStatusRequest) -> Result<Order, AppError> {
        let status: OrderStatus = req.status.parse().map_err(|_| {
            let allowed: Vec<&str> = OrderStatus::ALL.iter().map(|s| s.as_str()).collect();
            AppError::Validation(format!("status must be one of: {}", allowed.join(", ")))
        })?;
        let done = sqlx::query("UPDATE orders SET status = $1, updated_at = NOW() WHERE id = $2")
            .bind(status)
            .bind(id)
            .execute(pool)
            .await?;
        if done.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("order {}", id)));
        }
        tracing::info!(order_id = id, status = %status, "order status updated");
        Self::get(pool, id).await
    }

    /// Line items are removed with the order.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<(), AppError> {
        let q = delete(&ORDERS);
        let done = execute_by_id(pool, &q, id).await?;
        if done.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("order {}", id)));
        }
        Ok(())
    }
}
