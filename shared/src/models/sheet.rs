//! Info Sheet Model
//!
//! Printable customer handout for one prepared product.

use serde::{Deserialize, Serialize};

use super::catalog::PrecautionSection;
use super::recipe::{CoreIngredient, SkinTypeInfo};
use super::record::ProductInfo;

/// Seller or manufacturer identity printed on the sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Share link and its QR image, available once the record is saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLink {
    pub url: String,
    pub qr_image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoSheet {
    pub title: String,
    pub product_name: String,
    pub skin_type: Option<SkinTypeInfo>,
    pub concept: String,
    pub core_ingredients: Vec<CoreIngredient>,
    pub usage: String,
    pub full_ingredients: Vec<String>,
    pub precautions: Vec<PrecautionSection>,
    pub product_info: ProductInfo,
    pub seller: BusinessInfo,
    pub manufacturer: BusinessInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share: Option<ShareLink>,
}
