use rusqlite::{Connection, params, types::Value};

use crate::error::{AppError, Result};
use crate::models::*;
use crate::util::{gen_id, now};

use super::from_row::{
    CART_COLS, MENU_COLS, PAYMENT_COLS, REVIEW_COLS, USER_COLS, query_all, query_one,
};

/// Builder for dynamic UPDATE statements with optional fields.
/// Combines multiple field updates into a single query.
struct UpdateBuilder {
    table: &'static str,
    id: String,
    fields: Vec<(&'static str, Value)>,
}

impl UpdateBuilder {
    fn new(table: &'static str, id: &str) -> Self {
        Self {
            table,
            id: id.to_string(),
            fields: Vec::new(),
        }
    }

    fn set(mut self, column: &'static str, value: impl Into<Value>) -> Self {
        self.fields.push((column, value.into()));
        self
    }

    fn set_opt<V: Into<Value>>(self, column: &'static str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(column, v),
            None => self,
        }
    }

    /// Returns the number of matched rows. With no fields nothing is written,
    /// but the row still counts as matched if it exists.
    fn execute(self, conn: &Connection) -> Result<usize> {
        if self.fields.is_empty() {
            let sql = format!("SELECT COUNT(*) FROM {} WHERE id = ?1", self.table);
            let matched: i64 = conn.query_row(&sql, params![self.id], |row| row.get(0))?;
            return Ok(matched as usize);
        }
        let sets: Vec<String> = self
            .fields
            .iter()
            .map(|(col, _)| format!("{} = ?", col))
            .collect();
        let mut values: Vec<Value> = self.fields.into_iter().map(|(_, v)| v).collect();
        values.push(self.id.into());
        let sql = format!("UPDATE {} SET {} WHERE id = ?", self.table, sets.join(", "));
        let affected = conn.execute(&sql, rusqlite::params_from_iter(values))?;
        Ok(affected)
    }
}

// ============ Menu ============

pub fn list_menu_items(conn: &Connection) -> Result<Vec<MenuItem>> {
    query_all(
        conn,
        &format!("SELECT {} FROM menu ORDER BY created_at, rowid", MENU_COLS),
        &[],
    )
}

pub fn get_menu_item(conn: &Connection, id: &str) -> Result<Option<MenuItem>> {
    query_one(
        conn,
        &format!("SELECT {} FROM menu WHERE id = ?1", MENU_COLS),
        &[&id],
    )
}

pub fn create_menu_item(conn: &Connection, input: &CreateMenuItem) -> Result<MenuItem> {
    let id = gen_id();
    let now = now();

    conn.execute(
        "INSERT INTO menu (id, name, category, price, description, image, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            &id,
            &input.name,
            &input.category,
            input.price,
            &input.description,
            &input.image,
            now
        ],
    )?;

    Ok(MenuItem {
        id,
        name: input.name.clone(),
        category: input.category.clone(),
        price: input.price,
        description: input.description.clone(),
        image: input.image.clone(),
        created_at: now,
    })
}

/// Apply the given fields. Returns the number of matched items (0 or 1).
pub fn update_menu_item(conn: &Connection, id: &str, input: &UpdateMenuItem) -> Result<usize> {
    UpdateBuilder::new("menu", id)
        .set_opt("name", input.name.clone())
        .set_opt("category", input.category.clone())
        .set_opt("price", input.price)
        .set_opt("description", input.description.clone())
        .set_opt("image", input.image.clone())
        .execute(conn)
}

pub fn delete_menu_item(conn: &Connection, id: &str) -> Result<usize> {
    Ok(conn.execute("DELETE FROM menu WHERE id = ?1", params![id])?)
}

// ============ Reviews ============

pub fn list_reviews(conn: &Connection) -> Result<Vec<Review>> {
    query_all(
        conn,
        &format!("SELECT {} FROM reviews ORDER BY rowid", REVIEW_COLS),
        &[],
    )
}

pub fn create_review(conn: &Connection, input: &CreateReview) -> Result<Review> {
    let id = gen_id();

    conn.execute(
        "INSERT INTO reviews (id, name, details, rating) VALUES (?1, ?2, ?3, ?4)",
        params![&id, &input.name, &input.details, input.rating],
    )?;

    Ok(Review {
        id,
        name: input.name.clone(),
        details: input.details.clone(),
        rating: input.rating,
    })
}

// ============ Users ============

/// Outcome of a login upsert keyed by email.
#[derive(Debug)]
pub enum UpsertOutcome {
    Inserted(User),
    Existing(User),
}

/// Insert a user for `email` unless one already exists.
///
/// The unique index on email makes this a single atomic statement, so two
/// concurrent logins for the same address still produce one record.
pub fn upsert_user(conn: &Connection, email: &str, input: &UpsertUser) -> Result<UpsertOutcome> {
    let id = gen_id();
    let now = now();

    let inserted = conn.execute(
        "INSERT INTO users (id, email, name, role, created_at)
         VALUES (?1, ?2, ?3, NULL, ?4)
         ON CONFLICT(email) DO NOTHING",
        params![&id, email, &input.name, now],
    )?;

    if inserted == 0 {
        let existing = get_user_by_email(conn, email)?.ok_or_else(|| {
            AppError::Internal(format!("User {} vanished during upsert", email))
        })?;
        return Ok(UpsertOutcome::Existing(existing));
    }

    Ok(UpsertOutcome::Inserted(User {
        id,
        email: email.to_string(),
        name: input.name.clone(),
        role: None,
        created_at: now,
    }))
}

pub fn get_user_by_email(conn: &Connection, email: &str) -> Result<Option<User>> {
    query_one(
        conn,
        &format!("SELECT {} FROM users WHERE email = ?1", USER_COLS),
        &[&email],
    )
}

pub fn list_users(conn: &Connection) -> Result<Vec<User>> {
    query_all(
        conn,
        &format!("SELECT {} FROM users ORDER BY created_at, rowid", USER_COLS),
        &[],
    )
}

pub fn set_user_role(conn: &Connection, id: &str, role: UserRole) -> Result<usize> {
    UpdateBuilder::new("users", id)
        .set("role", role.as_ref().to_string())
        .execute(conn)
}

pub fn delete_user(conn: &Connection, id: &str) -> Result<usize> {
    Ok(conn.execute("DELETE FROM users WHERE id = ?1", params![id])?)
}

// ============ Carts ============

pub fn create_cart_item(conn: &Connection, input: &CreateCartItem) -> Result<CartItem> {
    let id = gen_id();
    let now = now();

    conn.execute(
        "INSERT INTO carts (id, email, menu_item_id, name, image, price, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            &id,
            &input.email,
            &input.menu_item_id,
            &input.name,
            &input.image,
            input.price,
            now
        ],
    )?;

    Ok(CartItem {
        id,
        email: input.email.clone(),
        menu_item_id: input.menu_item_id.clone(),
        name: input.name.clone(),
        image: input.image.clone(),
        price: input.price,
        created_at: now,
    })
}

pub fn list_cart_items(conn: &Connection, email: &str) -> Result<Vec<CartItem>> {
    query_all(
        conn,
        &format!(
            "SELECT {} FROM carts WHERE email = ?1 ORDER BY created_at, rowid",
            CART_COLS
        ),
        &[&email],
    )
}

pub fn delete_cart_item(conn: &Connection, id: &str) -> Result<usize> {
    Ok(conn.execute("DELETE FROM carts WHERE id = ?1", params![id])?)
}

fn delete_cart_items(conn: &Connection, ids: &[String]) -> Result<usize> {
    if ids.is_empty() {
        return Ok(0);
    }
    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!("DELETE FROM carts WHERE id IN ({})", placeholders);
    Ok(conn.execute(&sql, rusqlite::params_from_iter(ids.iter()))?)
}

// ============ Payments ============

/// Record a payment and remove the cart items it settles.
///
/// Both writes share one transaction: if the cleanup fails the payment is not kept.
pub fn settle_payment(conn: &mut Connection, input: &CreatePayment) -> Result<PaymentReceipt> {
    let id = gen_id();
    let now = now();
    let cart_ids_json = serde_json::to_string(&input.cart_ids)?;
    let menu_item_ids_json = serde_json::to_string(&input.menu_item_ids)?;

    let tx = conn.transaction()?;
    tx.execute(
        "INSERT INTO payments (id, email, price, transaction_id, date, cart_ids, menu_item_ids, status, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            &id,
            &input.email,
            input.price,
            &input.transaction_id,
            &input.date,
            &cart_ids_json,
            &menu_item_ids_json,
            &input.status,
            now
        ],
    )?;
    let deleted_count = delete_cart_items(&tx, &input.cart_ids)?;
    tx.commit()?;

    Ok(PaymentReceipt {
        payment: Payment {
            id,
            email: input.email.clone(),
            price: input.price,
            transaction_id: input.transaction_id.clone(),
            date: input.date.clone(),
            cart_ids: input.cart_ids.clone(),
            menu_item_ids: input.menu_item_ids.clone(),
            status: input.status.clone(),
            created_at: now,
        },
        deleted_count,
    })
}

pub fn list_payments(conn: &Connection, email: &str) -> Result<Vec<Payment>> {
    query_all(
        conn,
        &format!(
            "SELECT {} FROM payments WHERE email = ?1 ORDER BY created_at DESC, rowid DESC",
            PAYMENT_COLS
        ),
        &[&email],
    )
}

// ============ Stats ============

pub fn admin_stats(conn: &Connection) -> Result<AdminStats> {
    let count = |table: &str| -> rusqlite::Result<i64> {
        conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
    };

    let revenue: f64 = conn.query_row(
        "SELECT COALESCE(SUM(price), 0.0) FROM payments",
        [],
        |row| row.get(0),
    )?;

    Ok(AdminStats {
        users: count("users")?,
        menu_items: count("menu")?,
        orders: count("payments")?,
        revenue,
    })
}
