//! Recipe API Handlers

use axum::{Json, extract::State};
use shared::models::{
    ConfirmResponse, ManualToggleRequest, ManualToggleResponse, RecipeDraft, RecipePreview,
};

use crate::auth::CurrentOperator;
use crate::composer::{self, ManualSelection};
use crate::core::ServerState;
use crate::sheet::{self, SheetParties};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{ApiResponse, AppResult};

fn validate_draft(draft: &RecipeDraft) -> AppResult<()> {
    validate_optional_text(&draft.customer_name, "customer_name", MAX_NAME_LEN)?;
    validate_optional_text(&draft.manager_name, "manager_name", MAX_NAME_LEN)?;
    validate_optional_text(&draft.customer_phone, "customer_phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&draft.price, "price", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&draft.base_id, "base_id", MAX_SHORT_TEXT_LEN)?;
    Ok(())
}

/// POST /api/recipes/preview - derive code, ingredients, concept and guards
///
/// A draft that differs from the confirmed one drops the confirmation.
pub async fn preview(
    State(state): State<ServerState>,
    operator: CurrentOperator,
    Json(draft): Json<RecipeDraft>,
) -> AppResult<ApiResponse<RecipePreview>> {
    validate_draft(&draft)?;
    let preview = composer::compose(&state.catalog, &draft)?;
    state.sessions.invalidate_if_changed(&operator.id, &draft);
    Ok(ApiResponse::success(preview))
}

/// POST /api/recipes/manual/toggle - add or remove one manual ingredient
pub async fn toggle_manual(
    State(state): State<ServerState>,
    Json(req): Json<ManualToggleRequest>,
) -> AppResult<ApiResponse<ManualToggleResponse>> {
    let mut selection = ManualSelection::from_names(&state.catalog, &req.selected)?;
    let added = selection.toggle(&state.catalog, &req.ingredient)?;
    Ok(ApiResponse::success(ManualToggleResponse {
        selected: selection.into_vec(),
        added,
    }))
}

/// POST /api/recipes/confirm - stamp prep metadata and build the info sheet
pub async fn confirm(
    State(state): State<ServerState>,
    operator: CurrentOperator,
    Json(draft): Json<RecipeDraft>,
) -> AppResult<ApiResponse<ConfirmResponse>> {
    validate_draft(&draft)?;
    let recipe = state
        .sessions
        .confirm(&operator.id, &state.catalog, &draft, state.today())?;

    let sheet = sheet::build_sheet(
        &state.catalog,
        &recipe.preview,
        &recipe.product_info,
        SheetParties {
            seller: &state.config.seller,
            manufacturer: &state.config.manufacturer,
        },
        None,
    );

    tracing::info!(
        operator_id = %operator.id,
        prep_number = %recipe.product_info.prep_number,
        "Recipe confirmed for operator"
    );
    Ok(ApiResponse::success(ConfirmResponse { recipe, sheet }))
}
