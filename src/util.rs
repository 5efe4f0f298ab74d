//! Shared utility functions for the Bistro Boss API.

use axum::http::{HeaderMap, header::AUTHORIZATION};
use chrono::Utc;
use uuid::Uuid;

pub fn now() -> i64 {
    Utc::now().timestamp()
}

pub fn gen_id() -> String {
    Uuid::new_v4().to_string()
}

/// Extract a Bearer token from the Authorization header.
///
/// Returns the token string without the "Bearer " prefix, or None if
/// the header is missing, uses another scheme, or is empty after the prefix.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

/// Convert a decimal currency amount to minor units (cents).
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}
