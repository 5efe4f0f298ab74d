mod from_row;
pub mod queries;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use crate::jwt::TokenSigner;
use crate::payments::StripeClient;

pub type DbPool = Pool<SqliteConnectionManager>;

/// Shared handles injected into every handler. Built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub tokens: TokenSigner,
    pub stripe: StripeClient,
}

/// Open a pool on the SQLite file at `path` and make sure the schema exists.
pub fn create_pool(path: &str) -> anyhow::Result<DbPool> {
    let manager = SqliteConnectionManager::file(path)
        .with_init(|conn| conn.execute_batch("PRAGMA busy_timeout = 5000;"));
    let pool = Pool::builder().build(manager)?;
    let conn = pool.get()?;
    init_db(&conn)?;
    drop(conn);
    Ok(pool)
}

/// Create the five collections if they do not exist yet.
pub fn init_db(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS menu (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            category TEXT NOT NULL,
            price REAL NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            image TEXT NOT NULL DEFAULT '',
            created_at INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS reviews (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            details TEXT NOT NULL,
            rating REAL NOT NULL
        );

        CREATE TABLE IF NOT EXISTS carts (
            id TEXT PRIMARY KEY,
            email TEXT NOT NULL,
            menu_item_id TEXT NOT NULL,
            name TEXT NOT NULL DEFAULT '',
            image TEXT NOT NULL DEFAULT '',
            price REAL NOT NULL,
            created_at INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_carts_email ON carts(email);

        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            email TEXT NOT NULL UNIQUE,
            name TEXT,
            role TEXT,
            created_at INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS payments (
            id TEXT PRIMARY KEY,
            email TEXT NOT NULL,
            price REAL NOT NULL,
            transaction_id TEXT NOT NULL DEFAULT '',
            date TEXT NOT NULL DEFAULT '',
            cart_ids TEXT NOT NULL DEFAULT '[]',
            menu_item_ids TEXT NOT NULL DEFAULT '[]',
            status TEXT NOT NULL,
            created_at INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_payments_email ON payments(email);
        ",
    )
}
