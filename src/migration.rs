//! Schema bootstrap: the `order_status` type, five tables, and foreign-key indexes.
//! Every statement is idempotent, so it runs on each start.

use crate::error::AppError;
use sqlx::PgPool;

/// Key for `pg_advisory_lock` so concurrent starts do not race on CREATE TYPE / CREATE TABLE.
const SCHEMA_LOCK_KEY: i64 = 0x7265_7374_6175_7261;

const STATEMENTS: &[&str] = &[
    r#"
    DO $$ BEGIN
        CREATE TYPE order_status AS ENUM
            ('pending', 'confirmed', 'preparing', 'ready', 'delivered', 'cancelled');
    EXCEPTION
        WHEN duplicate_object THEN NULL;
    END $$
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS restaurants (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        address TEXT,
        phone TEXT,
        email TEXT,
        cuisine_type TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS menu_items (
        id BIGSERIAL PRIMARY KEY,
        restaurant_id BIGINT NOT NULL REFERENCES restaurants (id) ON DELETE CASCADE,
        name TEXT NOT NULL,
        description TEXT,
        price NUMERIC(10, 2) NOT NULL CHECK (price > 0),
        category TEXT,
        is_available BOOLEAN NOT NULL DEFAULT TRUE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS customers (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT,
        address TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS orders (
        id BIGSERIAL PRIMARY KEY,
        customer_id BIGINT NOT NULL REFERENCES customers (id),
        restaurant_id BIGINT NOT NULL REFERENCES restaurants (id),
        total_amount NUMERIC(12, 2) NOT NULL,
        status order_status NOT NULL DEFAULT 'pending',
        order_date TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        delivery_address TEXT,
        notes TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS order_items (
        id BIGSERIAL PRIMARY KEY,
        order_id BIGINT NOT NULL REFERENCES orders (id) ON DELETE CASCADE,
        menu_item_id BIGINT NOT NULL REFERENCES menu_items (id),
        quantity INTEGER NOT NULL CHECK (quantity > 0),
        unit_price NUMERIC(10, 2) NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS menu_items_restaurant_id_idx ON menu_items (restaurant_id)",
    "CREATE INDEX IF NOT EXISTS orders_customer_id_idx ON orders (customer_id)",
    "CREATE INDEX IF NOT EXISTS orders_restaurant_id_idx ON orders (restaurant_id)",
    "CREATE INDEX IF NOT EXISTS order_items_order_id_idx ON order_items (order_id)",
    "CREATE INDEX IF NOT EXISTS order_items_menu_item_id_idx ON order_items (menu_item_id)",
];

/// Create the type, tables, and indexes if missing. Holds a session advisory lock on one connection while running.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    let mut conn = pool.acquire().await?;
    sqlx::query("SELECT pg_advisory_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *conn)
        .await?;

    let mut result = Ok(());
    for ddl in STATEMENTS {
        tracing::debug!(sql = %ddl.trim(), "schema");
        if let Err(e) = sqlx::query(ddl).execute(&mut *conn).await {
            result = Err(AppError::Db(e));
            break;
        }
    }

    let unlocked = sqlx::query("SELECT pg_advisory_unlock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *conn)
        .await
        .map(|_| ());
    if unlocked.is_err() {
        // Session locks die with the connection; keep it out of the pool.
        drop(conn.detach());
    }
    let result = schema_outcome(result, unlocked);
    if result.is_ok() {
        tracing::info!(statements = STATEMENTS.len(), "schema ready");
    }
    result
}

/// A DDL failure is reported over an unlock failure; the unlock failure alone only warns.
fn schema_outcome(ddl: Result<(), AppError>, unlock: Result<(), sqlx::Error>) -> Result<(), AppError> {
    if let Err(e) = unlock {
        tracing::warn!(error = %e, "failed to release schema lock");
    }
    ddl
}
