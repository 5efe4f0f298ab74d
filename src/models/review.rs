use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: String,
    /// Reviewer's display name
    pub name: String,
    pub details: String,
    pub rating: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub name: String,
    pub details: String,
    pub rating: f64,
}
