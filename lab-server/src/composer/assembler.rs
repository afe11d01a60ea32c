//! Document Assembler
//!
//! Builds the declared full-ingredient list, the product name and the
//! templated concept paragraph.

use shared::models::{BaseFormulation, CoreIngredient, SkinMark, SkinTypeInfo};

use crate::catalog::Catalog;

const CATEGORY_FALLBACK: &str = "제품";

const FOCUS_INFLAMMATION: &str =
    "특히 현재의 염증 상태를 진정시키고 민감해진 피부 장벽을 강화하는 것을 최우선 목표로, ";
const FOCUS_SENSITIVITY: &str = "특히 민감해진 피부를 보호하고 장벽을 강화하는 것에 중점을 두어, ";
const FOCUS_HYDRATION: &str = "특히 건조한 피부에 깊은 보습을 제공하는 것을 목표로, ";
const FOCUS_GENERIC: &str = "고객님의 피부 고민 해결을 목표로, ";

const CLOSING: &str = "이 고유한 레시피는 고객님의 복합적인 피부 고민을 체계적으로 관리하여, \
피부 본연의 힘을 길러주고 더욱 건강하고 빛나는 피부로 가꾸는 데 도움을 줄 것입니다.";

/// Base ingredients followed by additives not already declared
///
/// Fragrance names and the sentinel are never listed individually; any
/// fragrance collapses into one trailing declaration token.
pub fn full_ingredient_list(
    catalog: &Catalog,
    base: &BaseFormulation,
    core: &[CoreIngredient],
) -> Vec<String> {
    let sentinel = catalog.fragrance_sentinel();
    let declaration = catalog.fragrance_declaration();

    let mut list: Vec<String> = Vec::with_capacity(base.ingredients.len() + core.len() + 1);
    for name in &base.ingredients {
        if !list.contains(name) {
            list.push(name.clone());
        }
    }

    let mut has_fragrance = false;
    for ingredient in core {
        let name = ingredient.name.as_str();
        if catalog.is_fragrance(name) {
            has_fragrance = true;
            continue;
        }
        if name == sentinel || list.iter().any(|n| n == name) {
            continue;
        }
        list.push(name.to_string());
    }

    if has_fragrance && !list.iter().any(|n| n == declaration) {
        list.push(declaration.to_string());
    }
    list
}

/// Display category of a base, `제품` when blank
pub fn base_category(base: Option<&BaseFormulation>) -> &str {
    base.map(|b| b.category.as_str())
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(CATEGORY_FALLBACK)
}

/// `"{customer}님 맞춤 {category}"`, or `"맞춤 {category}"` without a customer
pub fn product_name(customer_name: &str, category: &str) -> String {
    let customer = customer_name.trim();
    if customer.is_empty() {
        format!("맞춤 {category}")
    } else {
        format!("{customer}님 맞춤 {category}")
    }
}

pub struct ConceptInput<'a> {
    pub customer_name: &'a str,
    pub product_name: &'a str,
    pub category: &'a str,
    pub skin_type: Option<&'a SkinTypeInfo>,
    pub core: &'a [CoreIngredient],
    pub manual_mode: bool,
}

/// Concept paragraph; just the product name until there is something to describe
pub fn concept(input: &ConceptInput<'_>) -> String {
    let Some(skin_type) = input.skin_type else {
        return input.product_name.to_string();
    };
    if input.core.is_empty() {
        return input.product_name.to_string();
    }

    let intro = format!(
        "{}님의 '{}' 타입을 위해 특별히 조제된 맞춤 {}입니다.",
        input.customer_name.trim(),
        skin_type.summary,
        input.category
    );

    let code = &skin_type.code;
    let focus = if code.has(SkinMark::A) {
        FOCUS_INFLAMMATION
    } else if code.has(SkinMark::S) {
        FOCUS_SENSITIVITY
    } else if code.has(SkinMark::D) {
        FOCUS_HYDRATION
    } else {
        FOCUS_GENERIC
    };

    let names = input
        .core
        .iter()
        .map(|i| i.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let ingredients = if input.manual_mode {
        format!("조제관리사가 고객님의 피부를 위해 엄선한 핵심 성분인 {names} 등을 추가하여 완성되었습니다.")
    } else {
        format!("엄선된 핵심 성분인 {names} 등을 추가하여 완성되었습니다.")
    };

    format!("{intro} {focus}{ingredients} {CLOSING}")
}
