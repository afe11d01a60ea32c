//! Reference catalog
//!
//! One versioned JSON asset holds every static table: base formulations,
//! additive recipes per skin type code, ingredient effects, skin type texts,
//! the manual-selection menu and printed precautions. The asset is embedded
//! at build time and can be replaced at startup with `CATALOG_PATH`.
//!
//! Lookups never fail on a missing key; each one has a fallback value.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use shared::error::ErrorCode;
use shared::models::{
    AdditiveCategory, BaseFormulation, CatalogData, CatalogView, Fragrance, PrecautionSection,
    SkinAxis, SkinAxisView, SkinMark, SkinTypeCode,
};

use crate::composer::manual::MANUAL_LIMIT;
use crate::utils::{AppError, AppResult};

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

pub const SUMMARY_FALLBACK: &str = "고객 맞춤 피부 타입";
pub const DETAIL_FALLBACK: &str = "현재 조합에 대한 상세 설명이 없습니다.";
pub const VOLUME_FALLBACK: &str = "N/A";

/// Upper bound on entries in one additive recipe
const MAX_RECIPE_LEN: usize = 11;

#[derive(Debug)]
pub struct Catalog {
    data: CatalogData,
    base_index: HashMap<String, usize>,
    recipes: HashMap<SkinTypeCode, Vec<String>>,
    menu: HashSet<String>,
    fragrance_names: HashSet<String>,
}

impl Catalog {
    /// The asset compiled into the binary
    pub fn embedded() -> AppResult<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load from `path`, or the embedded asset when `None`
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p).map_err(|e| {
                    AppError::with_message(
                        ErrorCode::CatalogLoadFailed,
                        format!("Failed to read catalog {}: {e}", p.display()),
                    )
                })?;
                Self::from_json(&raw)
            }
            None => Self::embedded(),
        }
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        let data: CatalogData = serde_json::from_str(raw).map_err(|e| {
            AppError::with_message(
                ErrorCode::CatalogLoadFailed,
                format!("Failed to parse catalog: {e}"),
            )
        })?;
        Self::from_data(data)
    }

    pub fn from_data(data: CatalogData) -> AppResult<Self> {
        let mut base_index = HashMap::with_capacity(data.bases.len());
        for (i, base) in data.bases.iter().enumerate() {
            if base_index.insert(base.id.clone(), i).is_some() {
                return Err(invalid(format!("duplicate base id {}", base.id)));
            }
        }

        let mut recipes = HashMap::with_capacity(data.recipes.len());
        for (key, ingredients) in &data.recipes {
            let code: SkinTypeCode = key
                .parse()
                .map_err(|_| invalid(format!("recipe key {key} is not a skin type code")))?;
            if ingredients.len() > MAX_RECIPE_LEN {
                return Err(invalid(format!(
                    "recipe {key} has {} entries, max {MAX_RECIPE_LEN}",
                    ingredients.len()
                )));
            }
            recipes.insert(code, ingredients.clone());
        }

        for key in data.skin_type_details.keys() {
            if key.parse::<SkinTypeCode>().is_err() {
                return Err(invalid(format!("detail key {key} is not a skin type code")));
            }
        }
        for key in data.skin_type_summaries.keys() {
            if !is_summary_key(key) {
                return Err(invalid(format!("summary key {key} is not a code prefix")));
            }
        }

        if data.fragrance_sentinel.trim().is_empty() || data.fragrance_declaration.trim().is_empty()
        {
            return Err(invalid("fragrance tokens must not be empty".to_string()));
        }
        let mut fragrance_names = HashSet::with_capacity(data.fragrances.len());
        for fragrance in &data.fragrances {
            if fragrance.name.trim().is_empty() || !fragrance_names.insert(fragrance.name.clone()) {
                return Err(invalid(format!("bad fragrance name {:?}", fragrance.name)));
            }
        }

        let menu = data
            .additive_menu
            .iter()
            .flat_map(|c| c.ingredients.iter().cloned())
            .collect();

        tracing::info!(
            version = %data.version,
            bases = data.bases.len(),
            recipes = recipes.len(),
            "Catalog loaded"
        );

        Ok(Self {
            data,
            base_index,
            recipes,
            menu,
            fragrance_names,
        })
    }

    pub fn version(&self) -> &str {
        &self.data.version
    }

    pub fn bases(&self) -> &[BaseFormulation] {
        &self.data.bases
    }

    pub fn base(&self, id: &str) -> Option<&BaseFormulation> {
        self.base_index.get(id).map(|&i| &self.data.bases[i])
    }

    pub fn recipe(&self, code: &SkinTypeCode) -> Option<&[String]> {
        self.recipes.get(code).map(Vec::as_slice)
    }

    /// Effect text, empty when the ingredient has none
    pub fn effect(&self, ingredient: &str) -> &str {
        self.data
            .ingredient_effects
            .get(ingredient)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn summary(&self, code: &SkinTypeCode) -> &str {
        self.data
            .skin_type_summaries
            .get(code.summary_key())
            .map(String::as_str)
            .unwrap_or(SUMMARY_FALLBACK)
    }

    pub fn detail(&self, code: &SkinTypeCode) -> &str {
        self.data
            .skin_type_details
            .get(code.as_str())
            .map(String::as_str)
            .unwrap_or(DETAIL_FALLBACK)
    }

    /// Nominal volume of a base, `N/A` for unknown ids
    pub fn volume_for(&self, base_id: &str) -> &str {
        self.base(base_id)
            .and_then(|b| b.volume.as_deref())
            .unwrap_or(VOLUME_FALLBACK)
    }

    pub fn fragrances(&self) -> &[Fragrance] {
        &self.data.fragrances
    }

    pub fn fragrance(&self, name: &str) -> Option<&Fragrance> {
        self.data.fragrances.iter().find(|f| f.name == name)
    }

    /// True for a concrete fragrance category name
    pub fn is_fragrance(&self, name: &str) -> bool {
        self.fragrance_names.contains(name)
    }

    /// Placeholder marking the fragrance slot inside recipes
    pub fn fragrance_sentinel(&self) -> &str {
        &self.data.fragrance_sentinel
    }

    /// Single token declared for any fragrance in the full ingredient list
    pub fn fragrance_declaration(&self) -> &str {
        &self.data.fragrance_declaration
    }

    pub fn additive_menu(&self) -> &[AdditiveCategory] {
        &self.data.additive_menu
    }

    pub fn is_menu_ingredient(&self, name: &str) -> bool {
        self.menu.contains(name)
    }

    pub fn precautions(&self) -> &[PrecautionSection] {
        &self.data.precautions
    }

    pub fn view(&self) -> CatalogView {
        CatalogView {
            version: self.data.version.clone(),
            bases: self.data.bases.clone(),
            fragrances: self.data.fragrances.clone(),
            additive_menu: self.data.additive_menu.clone(),
            axes: SkinAxisView::all(),
            precautions: self.data.precautions.clone(),
            manual_limit: MANUAL_LIMIT,
        }
    }
}

fn invalid(message: String) -> AppError {
    AppError::with_message(ErrorCode::CatalogInvalid, format!("Invalid catalog: {message}"))
}

/// Four marks, one per axis, in the first four axis slots
fn is_summary_key(key: &str) -> bool {
    let marks: Vec<Option<SkinMark>> = key.chars().map(SkinMark::from_char).collect();
    marks.len() == 4
        && marks
            .iter()
            .zip(SkinAxis::ALL.iter())
            .all(|(m, axis)| m.is_some_and(|m| m.axis() == *axis))
}
