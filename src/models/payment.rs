use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub price: f64,
    pub transaction_id: String,
    /// Client-reported payment date, stored as sent
    pub date: String,
    /// Cart items settled by this payment; removed from the cart on insert
    pub cart_ids: Vec<String>,
    pub menu_item_ids: Vec<String>,
    pub status: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayment {
    pub email: String,
    pub price: f64,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub cart_ids: Vec<String>,
    #[serde(default)]
    pub menu_item_ids: Vec<String>,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "pending".to_string()
}

/// Result of recording a payment and clearing its cart items.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub payment: Payment,
    pub deleted_count: usize,
}

/// Amount sent to `/create-confirm-intent`, in major currency units.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIntent {
    pub price: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentSecret {
    pub client_secret: String,
}

/// Dashboard counts for `/admin-stats`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub users: i64,
    pub menu_items: i64,
    pub orders: i64,
    pub revenue: f64,
}
