//! Catalog Model
//!
//! Shape of the versioned reference dataset. The server indexes it once at
//! startup; clients receive the same types through `GET /api/catalog`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::skin::{SkinAxis, SkinMark};

/// Unscented carrier product (cream, serum, toner, essence)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseFormulation {
    pub id: String,
    pub description: String,
    pub category: String,
    /// Declared ingredient names, in label order
    pub ingredients: Vec<String>,
    pub usage: String,
    /// Nominal fill volume, e.g. `100g`
    #[serde(default)]
    pub volume: Option<String>,
}

/// Fragrance category option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragrance {
    pub name: String,
    pub label: String,
}

/// One category of the manual-selection menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditiveCategory {
    pub category: String,
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecautionSection {
    pub title: String,
    pub items: Vec<String>,
}

/// Whole catalog asset as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    /// Placeholder token inside additive recipes marking the fragrance slot
    pub fragrance_sentinel: String,
    /// Aggregate token declared in the full ingredient list for any fragrance
    pub fragrance_declaration: String,
    pub bases: Vec<BaseFormulation>,
    pub fragrances: Vec<Fragrance>,
    /// Five-letter skin type code -> additive ingredient names
    pub recipes: BTreeMap<String, Vec<String>>,
    pub ingredient_effects: BTreeMap<String, String>,
    /// Four-letter code prefix -> short summary
    pub skin_type_summaries: BTreeMap<String, String>,
    /// Five-letter code -> long description
    pub skin_type_details: BTreeMap<String, String>,
    pub additive_menu: Vec<AdditiveCategory>,
    #[serde(default)]
    pub precautions: Vec<PrecautionSection>,
}

/// Axis description for selection widgets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkinAxisView {
    pub axis: SkinAxis,
    pub label: String,
    pub options: Vec<SkinMarkView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkinMarkView {
    pub mark: SkinMark,
    pub label: String,
}

impl SkinAxisView {
    pub fn all() -> Vec<Self> {
        SkinAxis::ALL
            .into_iter()
            .map(|axis| Self {
                axis,
                label: axis.label().to_string(),
                options: axis
                    .marks()
                    .into_iter()
                    .map(|mark| SkinMarkView {
                        mark,
                        label: mark.label().to_string(),
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Catalog response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogView {
    pub version: String,
    pub bases: Vec<BaseFormulation>,
    pub fragrances: Vec<Fragrance>,
    pub additive_menu: Vec<AdditiveCategory>,
    pub axes: Vec<SkinAxisView>,
    pub precautions: Vec<PrecautionSection>,
    pub manual_limit: usize,
}
