//! Recipe composition
//!
//! A draft flows through four steps, recomputed on every change:
//!
//! ```text
//! SkinSelection ─► derive_code ─► core_ingredients ─► full list / concept
//!                                                   └► confirmation gate
//! ```
//!
//! [`compose`] is pure with respect to the catalog; only
//! [`confirmation::confirm`] touches session state (the prep counter).

pub mod assembler;
pub mod confirmation;
pub mod deriver;
pub mod manual;
pub mod resolver;

use shared::error::ErrorCode;
use shared::models::{RecipeDraft, RecipePreview};

use crate::catalog::Catalog;
use crate::utils::{AppError, AppResult};

pub use confirmation::{PrepSequence, confirm};
pub use deriver::derive_code;
pub use manual::{MANUAL_LIMIT, ManualSelection};
pub use resolver::AdditiveSource;

/// Derive everything shown for `draft`
///
/// Fails only on input that names something the catalog does not have; an
/// incomplete draft yields a preview with blockers.
pub fn compose(catalog: &Catalog, draft: &RecipeDraft) -> AppResult<RecipePreview> {
    draft.skin.check()?;

    let base = catalog.base(&draft.base_id).ok_or_else(|| {
        AppError::with_message(
            ErrorCode::BaseNotFound,
            format!("Base formulation not found: {}", draft.base_id),
        )
        .with_detail("base_id", draft.base_id.as_str())
    })?;

    let fragrance = draft.fragrance();
    if let Some(name) = fragrance
        && !catalog.is_fragrance(name)
    {
        return Err(AppError::with_message(
            ErrorCode::UnknownFragrance,
            format!("Unknown fragrance: {name}"),
        ));
    }

    let source = if draft.manual_mode {
        let selection = ManualSelection::from_names(catalog, &draft.manual_ingredients)?;
        if selection.len() != draft.manual_ingredients.len() {
            return Err(AppError::validation("Duplicate manual ingredient"));
        }
        AdditiveSource::Manual(&draft.manual_ingredients)
    } else {
        AdditiveSource::Automatic
    };

    let code = derive_code(&draft.skin);
    let has_recipe = code.as_ref().and_then(|c| catalog.recipe(c)).is_some();
    let skin_type = code.as_ref().map(|c| resolver::skin_type_info(catalog, c));

    // Manual lists carry their own fragrance entries, if any
    let chosen_fragrance = if draft.manual_mode { None } else { fragrance };
    let core = resolver::core_ingredients(catalog, code.as_ref(), source, chosen_fragrance);
    let full_ingredients = assembler::full_ingredient_list(catalog, base, &core);

    let category = assembler::base_category(Some(base));
    let product_name = assembler::product_name(&draft.customer_name, category);
    let concept = assembler::concept(&assembler::ConceptInput {
        customer_name: &draft.customer_name,
        product_name: &product_name,
        category,
        skin_type: skin_type.as_ref(),
        core: &core,
        manual_mode: draft.manual_mode,
    });

    let blockers = confirmation::blockers(draft, code.as_ref(), has_recipe);
    let can_confirm = blockers.is_empty();

    Ok(RecipePreview {
        code,
        skin_type,
        base_category: category.to_string(),
        product_name,
        usage: base.usage.clone(),
        core_ingredients: core,
        full_ingredients,
        concept,
        blockers,
        can_confirm,
    })
}
