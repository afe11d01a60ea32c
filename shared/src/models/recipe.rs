//! Recipe draft and preview models

use serde::{Deserialize, Serialize};

use super::record::{ProductInfo, RecipeRecord};
use super::skin::{SkinSelection, SkinTypeCode};

/// Form session state as edited by the operator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDraft {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub manager_name: String,
    #[serde(default)]
    pub price: String,
    pub base_id: String,
    #[serde(default)]
    pub skin: SkinSelection,
    /// Fragrance category name (`Citrus`, `Green`, ...)
    #[serde(default)]
    pub fragrance: Option<String>,
    #[serde(default)]
    pub manual_mode: bool,
    #[serde(default)]
    pub manual_ingredients: Vec<String>,
}

impl RecipeDraft {
    /// Fragrance choice with blank strings treated as "none"
    pub fn fragrance(&self) -> Option<&str> {
        self.fragrance
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
    }
}

impl From<&RecipeRecord> for RecipeDraft {
    /// Re-populate the form from a stored record
    fn from(record: &RecipeRecord) -> Self {
        Self {
            customer_name: record.customer_name.clone(),
            customer_phone: record.customer_phone.clone(),
            manager_name: record.manager_name.clone(),
            price: record.price.clone(),
            base_id: record.selected_base.clone(),
            skin: record.selected_skin_chars.clone(),
            fragrance: record.selected_fragrance.clone(),
            manual_mode: record.is_manual_mode,
            manual_ingredients: if record.is_manual_mode {
                record.manual_ingredients.clone().unwrap_or_default()
            } else {
                Vec::new()
            },
        }
    }
}

/// Additive shown in the core-ingredient section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreIngredient {
    pub name: String,
    /// Effect text, empty when the catalog has none
    pub effect: String,
}

/// Descriptive text for a complete skin type code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinTypeInfo {
    pub code: SkinTypeCode,
    pub summary: String,
    pub description: String,
}

/// Why the confirm action is disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmBlocker {
    MissingCustomerName,
    MissingManagerName,
    SelectionIncomplete,
    NoRecipeForCode,
    NoManualIngredients,
}

/// Everything derived from a draft, recomputed on every change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipePreview {
    pub code: Option<SkinTypeCode>,
    pub skin_type: Option<SkinTypeInfo>,
    pub product_name: String,
    pub base_category: String,
    pub usage: String,
    pub core_ingredients: Vec<CoreIngredient>,
    pub full_ingredients: Vec<String>,
    pub concept: String,
    pub blockers: Vec<ConfirmBlocker>,
    pub can_confirm: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualToggleRequest {
    #[serde(default)]
    pub selected: Vec<String>,
    pub ingredient: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualToggleResponse {
    pub selected: Vec<String>,
    pub added: bool,
}

/// Result of the confirm action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmedRecipe {
    pub draft: RecipeDraft,
    pub preview: RecipePreview,
    pub product_info: ProductInfo,
}

/// Confirm response: the confirmed recipe and its info sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmResponse {
    pub recipe: ConfirmedRecipe,
    pub sheet: super::sheet::InfoSheet,
}
