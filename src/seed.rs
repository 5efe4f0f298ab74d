//! Load demo menu items and reviews from JSON files into the store.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::db::queries;
use crate::models::{CreateMenuItem, CreateReview};

/// Counts of records written by a seeding run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub menu_items: usize,
    pub reviews: usize,
}

/// Insert every entry of the given JSON arrays. Either file may be omitted.
pub fn seed(conn: &Connection, menu: Option<&Path>, reviews: Option<&Path>) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    if let Some(path) = menu {
        let items: Vec<CreateMenuItem> = read_json(path)?;
        for item in &items {
            queries::create_menu_item(conn, item)?;
        }
        report.menu_items = items.len();
    }

    if let Some(path) = reviews {
        let entries: Vec<CreateReview> = read_json(path)?;
        for entry in &entries {
            queries::create_review(conn, entry)?;
        }
        report.reviews = entries.len();
    }

    Ok(report)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {}", path.display()))
}
