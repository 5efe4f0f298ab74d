use serde::{Deserialize, Serialize};

/// A pending, unpurchased menu selection owned by a user's email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(rename = "menuId")]
    pub menu_item_id: String,
    pub name: String,
    pub image: String,
    pub price: f64,
    pub created_at: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCartItem {
    pub email: String,
    #[serde(rename = "menuId")]
    pub menu_item_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub price: f64,
}
