//! Builds parameterized INSERT, SELECT, UPDATE, DELETE from static table descriptors.

use crate::sql::PgBindValue;

/// A table known at compile time: name and the columns every SELECT/RETURNING lists, in order.
#[derive(Clone, Copy, Debug)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

pub const RESTAURANTS: Table = Table {
    name: "restaurants",
    columns: &["id", "name", "address", "phone", "email", "cuisine_type", "created_at", "updated_at"],
};

pub const MENU_ITEMS: Table = Table {
    name: "menu_items",
    columns: &[
        "id",
        "restaurant_id",
        "name",
        "description",
        "price",
        "category",
        "is_available",
        "created_at",
        "updated_at",
    ],
};

pub const CUSTOMERS: Table = Table {
    name: "customers",
    columns: &["id", "name", "email", "phone", "address", "created_at", "updated_at"],
};

pub const ORDERS: Table = Table {
    name: "orders",
    columns: &[
        "id",
        "customer_id",
        "restaurant_id",
        "total_amount",
        "status",
        "order_date",
        "delivery_address",
        "notes",
        "created_at",
        "updated_at",
    ],
};

/// Quote identifier for PostgreSQL (safe: only from descriptors).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn column_list(table: &Table) -> String {
    table.columns.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

#[derive(Debug, Default)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<PgBindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf::default()
    }

    fn push_param(&mut self, v: PgBindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// SELECT by primary key `id`. Caller binds the id as `$1`.
pub fn select_by_id(table: &Table) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = $1",
        column_list(table),
        quoted(table.name),
        quoted("id")
    );
    q
}

/// SELECT with optional equality filters (AND-ed, bound in order) and an ORDER BY over fixed columns.
/// Sort keys are `"column"` or `"column DESC"`.
pub fn select_list(table: &Table, filters: &[(&str, PgBindValue)], order_by: &[&str]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut where_parts = Vec::new();
    for (col, val) in filters {
        let n = q.push_param(val.clone());
        where_parts.push(format!("{} = ${}", quoted(col), n));
    }
    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    let order_clause = if order_by.is_empty() {
        String::new()
    } else {
        let keys: Vec<String> = order_by
            .iter()
            .map(|k| match k.strip_suffix(" DESC") {
                Some(col) => format!("{} DESC", quoted(col)),
                None => quoted(k),
            })
            .collect();
        format!(" ORDER BY {}", keys.join(", "))
    };
    q.sql = format!(
        "SELECT {} FROM {}{}{}",
        column_list(table),
        quoted(table.name),
        where_clause,
        order_clause
    );
    q
}

/// INSERT the given columns; everything else (id, timestamps, defaults) comes from the database.
pub fn insert(table: &Table, values: &[(&str, PgBindValue)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::with_capacity(values.len());
    let mut placeholders = Vec::with_capacity(values.len());
    for (col, val) in values {
        let n = q.push_param(val.clone());
        cols.push(quoted(col));
        placeholders.push(format!("${}", n));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(table.name),
        cols.join(", "),
        placeholders.join(", "),
        column_list(table)
    );
    q
}

/// UPDATE by id: SET every given column and refresh `updated_at`. The id is bound last.
pub fn update(table: &Table, id: i64, values: &[(&str, PgBindValue)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sets = Vec::with_capacity(values.len() + 1);
    for (col, val) in values {
        let n = q.push_param(val.clone());
        sets.push(format!("{} = ${}", quoted(col), n));
    }
    sets.push(format!("{} = NOW()", quoted("updated_at")));
    let id_param = q.push_param(PgBindValue::I64(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        quoted(table.name),
        sets.join(", "),
        quoted("id"),
        id_param,
        column_list(table)
    );
    q
}

/// DELETE by id (`$1`).
pub fn delete(table: &Table) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("DELETE FROM {} WHERE {} = $1", quoted(table.name), quoted("id"));
    q
}
