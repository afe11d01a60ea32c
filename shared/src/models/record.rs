//! Product Record Model
//!
//! Append-only log of prepared recipes. Records are created on save and
//! never updated or deleted.

use serde::{Deserialize, Serialize};

use super::skin::SkinSelection;

/// Preparation metadata attached on confirm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    /// `yyyy.mm.dd`
    pub prep_date: String,
    /// `{base_id}{yyyymmdd}{nn}`
    pub prep_number: String,
    pub volume: String,
    pub use_by_date: String,
    pub manager_name: String,
    pub price: String,
}

/// Stored record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub product_name: String,
    pub selected_base: String,
    pub is_manual_mode: bool,
    pub selected_skin_chars: SkinSelection,
    /// Present only for manual-mode records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_ingredients: Option<Vec<String>>,
    #[serde(default)]
    pub selected_fragrance: Option<String>,
    pub manager_name: String,
    pub price: String,
    pub use_by_date: String,
    pub product_info: ProductInfo,
    /// Unix millis
    pub created_at: i64,
}

/// Create record payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecipeRecord {
    pub customer_name: String,
    pub customer_phone: String,
    pub product_name: String,
    pub selected_base: String,
    pub is_manual_mode: bool,
    pub selected_skin_chars: SkinSelection,
    pub manual_ingredients: Option<Vec<String>>,
    pub selected_fragrance: Option<String>,
    pub manager_name: String,
    pub price: String,
    pub use_by_date: String,
    pub product_info: ProductInfo,
}

impl NewRecipeRecord {
    pub fn into_record(self, id: String, created_at: i64) -> RecipeRecord {
        RecipeRecord {
            id,
            customer_name: self.customer_name,
            customer_phone: self.customer_phone,
            product_name: self.product_name,
            selected_base: self.selected_base,
            is_manual_mode: self.is_manual_mode,
            selected_skin_chars: self.selected_skin_chars,
            manual_ingredients: self.manual_ingredients,
            selected_fragrance: self.selected_fragrance,
            manager_name: self.manager_name,
            price: self.price,
            use_by_date: self.use_by_date,
            product_info: self.product_info,
            created_at,
        }
    }
}

/// Save response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRecord {
    pub id: String,
    pub share_url: String,
    pub qr_image_url: String,
}

/// Search response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSearchResult {
    pub customer_name: String,
    pub records: Vec<RecipeRecord>,
}

/// Single record with the draft it re-populates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDetail {
    pub record: RecipeRecord,
    pub draft: super::recipe::RecipeDraft,
}
