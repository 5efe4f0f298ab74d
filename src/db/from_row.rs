//! Row mapping for the store's tables.

use rusqlite::types::Type;
use rusqlite::{Connection, Row, ToSql};

use crate::error::Result;
use crate::models::*;

pub const MENU_COLS: &str = "id, name, category, price, description, image, created_at";
pub const REVIEW_COLS: &str = "id, name, details, rating";
pub const CART_COLS: &str = "id, email, menu_item_id, name, image, price, created_at";
pub const USER_COLS: &str = "id, email, name, role, created_at";
pub const PAYMENT_COLS: &str =
    "id, email, price, transaction_id, date, cart_ids, menu_item_ids, status, created_at";

pub trait FromRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}

pub fn query_one<T: FromRow>(
    conn: &Connection,
    sql: &str,
    params: &[&dyn ToSql],
) -> Result<Option<T>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    match rows.next()? {
        Some(row) => Ok(Some(T::from_row(row)?)),
        None => Ok(None),
    }
}

pub fn query_all<T: FromRow>(conn: &Connection, sql: &str, params: &[&dyn ToSql]) -> Result<Vec<T>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, |row| T::from_row(row))?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

/// Decode a JSON array column into a list of ids.
fn id_list(row: &Row, idx: usize) -> rusqlite::Result<Vec<String>> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

impl FromRow for MenuItem {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(MenuItem {
            id: row.get(0)?,
            name: row.get(1)?,
            category: row.get(2)?,
            price: row.get(3)?,
            description: row.get(4)?,
            image: row.get(5)?,
            created_at: row.get(6)?,
        })
    }
}

impl FromRow for Review {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Review {
            id: row.get(0)?,
            name: row.get(1)?,
            details: row.get(2)?,
            rating: row.get(3)?,
        })
    }
}

impl FromRow for CartItem {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(CartItem {
            id: row.get(0)?,
            email: row.get(1)?,
            menu_item_id: row.get(2)?,
            name: row.get(3)?,
            image: row.get(4)?,
            price: row.get(5)?,
            created_at: row.get(6)?,
        })
    }
}

impl FromRow for User {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let role: Option<String> = row.get(3)?;
        Ok(User {
            id: row.get(0)?,
            email: row.get(1)?,
            name: row.get(2)?,
            role: role.and_then(|r| r.parse().ok()),
            created_at: row.get(4)?,
        })
    }
}

impl FromRow for Payment {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Payment {
            id: row.get(0)?,
            email: row.get(1)?,
            price: row.get(2)?,
            transaction_id: row.get(3)?,
            date: row.get(4)?,
            cart_ids: id_list(row, 5)?,
            menu_item_ids: id_list(row, 6)?,
            status: row.get(7)?,
            created_at: row.get(8)?,
        })
    }
}
