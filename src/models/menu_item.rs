use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    /// Short recipe/description text shown under the dish name
    #[serde(alias = "recipe")]
    pub description: String,
    pub image: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMenuItem {
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default, alias = "recipe")]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateMenuItem {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    #[serde(alias = "recipe")]
    pub description: Option<String>,
    pub image: Option<String>,
}

impl UpdateMenuItem {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.image.is_none()
    }
}
