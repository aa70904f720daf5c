//! Frontend Models
//!
//! Data structures matching backend entities, plus the fixed allergen and
//! dietary vocabularies used by the menu item forms.

use serde::{Deserialize, Serialize};

/// Authenticated user (matches `/auth/user` response)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "restaurantId", default)]
    pub restaurant_id: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// Restaurant data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// One in-progress, unsaved menu item draft.
///
/// `price_display` is always the canonical `"$D.CC"` form of `price_numeric`;
/// every mutation path goes through the price mask to keep the pair in sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub price_display: String,
    pub price_numeric: f64,
    pub allergens: Vec<String>,
    #[serde(rename = "dietaryCategories")]
    pub dietary_categories: Vec<String>,
    pub ingredients: String,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price_display: "$0.00".to_string(),
            price_numeric: 0.0,
            allergens: Vec::new(),
            dietary_categories: Vec::new(),
            ingredients: String::new(),
        }
    }
}

impl ItemDraft {
    /// Body sent to `POST /restaurants/{id}/menu`. Price goes out numeric,
    /// never as the display string.
    pub fn to_payload(&self) -> MenuItemPayload {
        MenuItemPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price_numeric,
            allergens: self.allergens.clone(),
            dietary_categories: self.dietary_categories.clone(),
            ingredients: self.ingredients.clone(),
        }
    }
}

/// Menu item creation request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItemPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub allergens: Vec<String>,
    #[serde(rename = "dietaryCategories")]
    pub dietary_categories: Vec<String>,
    pub ingredients: String,
}

/// Created menu item returned by the backend
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(rename = "dietaryCategories", default)]
    pub dietary_categories: Vec<String>,
    #[serde(default)]
    pub ingredients: String,
}

/// Result of `POST /ai/parse-ingredients`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedIngredientsResult {
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(rename = "dietaryCategories", default)]
    pub dietary_categories: Vec<String>,
    #[serde(rename = "extractedIngredients", default)]
    pub extracted_ingredients: Vec<String>,
}

/// Result of `POST /ai/ingest-menu`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct BulkIngestResult {
    #[serde(default)]
    pub items: Vec<IngestedItem>,
}

/// One candidate item extracted from an uploaded menu image.
/// Every field may be missing; seeding fills in defaults.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct IngestedItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub allergens: Option<Vec<String>>,
    #[serde(rename = "dietaryCategories", default)]
    pub dietary_categories: Option<Vec<String>>,
    #[serde(default)]
    pub ingredients: Option<String>,
}

/// Allergen vocabulary: (id, label, icon)
pub const ALLERGEN_OPTIONS: &[(&str, &str, &str)] = &[
    ("milk", "Milk", "🥛"),
    ("eggs", "Eggs", "🥚"),
    ("fish", "Fish", "🐟"),
    ("tree_nuts", "Tree Nuts", "🌰"),
    ("wheat", "Wheat", "🌾"),
    ("shellfish", "Shellfish", "🦀"),
    ("gluten_free", "Gluten-Free", "🌾"),
    ("peanuts", "Peanuts", "🥜"),
    ("soybeans", "Soybeans", "🫘"),
    ("sesame", "Sesame", "✨"),
];

/// Dietary vocabulary: (id, label, icon)
pub const DIETARY_OPTIONS: &[(&str, &str, &str)] = &[
    ("vegan", "Vegan", "🌱"),
    ("vegetarian", "Vegetarian", "🥗"),
];

/// Label + icon lookup for an allergen id (used when listing parsed allergens)
pub fn allergen_label(id: &str) -> Option<(&'static str, &'static str)> {
    ALLERGEN_OPTIONS
        .iter()
        .find(|(opt_id, _, _)| *opt_id == id)
        .map(|(_, label, icon)| (*label, *icon))
}
