//! Recipe Resolver
//!
//! Turns a skin type code (or the operator's manual list) into the core
//! additive ingredients, and looks up the descriptive texts for the code.

use shared::models::{CoreIngredient, SkinTypeCode, SkinTypeInfo};

use crate::catalog::Catalog;

/// Where the additives come from
#[derive(Debug, Clone, Copy)]
pub enum AdditiveSource<'a> {
    /// Recipe table keyed by the skin type code
    Automatic,
    /// Operator-curated list
    Manual(&'a [String]),
}

/// Core ingredients annotated with their effect text
///
/// Manual lists are returned verbatim. Automatic lookups drop the fragrance
/// sentinel and append the chosen fragrance; a code with no recipe yields an
/// empty list.
pub fn core_ingredients(
    catalog: &Catalog,
    code: Option<&SkinTypeCode>,
    source: AdditiveSource<'_>,
    fragrance: Option<&str>,
) -> Vec<CoreIngredient> {
    let names: Vec<&str> = match source {
        AdditiveSource::Manual(list) => list.iter().map(String::as_str).collect(),
        AdditiveSource::Automatic => {
            let Some(recipe) = code.and_then(|c| catalog.recipe(c)) else {
                return Vec::new();
            };
            let sentinel = catalog.fragrance_sentinel();
            recipe
                .iter()
                .map(String::as_str)
                .filter(|name| *name != sentinel)
                .chain(fragrance)
                .collect()
        }
    };

    names
        .into_iter()
        .map(|name| CoreIngredient {
            name: name.to_string(),
            effect: catalog.effect(name).to_string(),
        })
        .collect()
}

/// Short summary (first four letters) and long description (full code)
pub fn skin_type_info(catalog: &Catalog, code: &SkinTypeCode) -> SkinTypeInfo {
    SkinTypeInfo {
        code: code.clone(),
        summary: catalog.summary(code).to_string(),
        description: catalog.detail(code).to_string(),
    }
}
