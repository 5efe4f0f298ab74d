use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserRole {
    Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Absent for ordinary customers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    pub created_at: i64,
}

impl User {
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Some(UserRole::Admin))
    }
}

/// Optional profile fields sent along with a login upsert.
#[derive(Debug, Default, Deserialize)]
pub struct UpsertUser {
    #[serde(default)]
    pub name: Option<String>,
}
