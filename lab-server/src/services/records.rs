//! Record save and search
//!
//! Store failures surface as one fixed user-facing message per operation;
//! the underlying error is logged, not returned.

use shared::error::ErrorCode;
use shared::models::{ConfirmedRecipe, NewRecipeRecord, RecipeRecord};

use crate::db::repository::{RecordScope, RecordStore, RepoError};
use crate::utils::{AppError, AppResult};

pub const SAVE_SUCCESS: &str = "저장 완료! 고객에게 안내장이 발송되었습니다.";
pub const SAVE_FAILED: &str = "저장 실패: 오류가 발생했습니다.";
pub const STORE_UNAVAILABLE: &str = "오류: 데이터베이스에 연결할 수 없습니다.";
pub const NAME_REQUIRED: &str = "조회할 고객 이름을 입력해주세요.";
pub const NO_RECORDS: &str = "해당 고객의 조제 기록이 없습니다.";
pub const SEARCH_FAILED: &str = "조회 실패: 오류가 발생했습니다.";

/// Search result, kept apart from failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Newest first
    Found(Vec<RecipeRecord>),
    NoRecords,
}

impl SearchOutcome {
    pub fn message(&self) -> String {
        match self {
            SearchOutcome::Found(records) => format!("{}개의 기록을 찾았습니다.", records.len()),
            SearchOutcome::NoRecords => NO_RECORDS.to_string(),
        }
    }

    pub fn into_records(self) -> Vec<RecipeRecord> {
        match self {
            SearchOutcome::Found(records) => records,
            SearchOutcome::NoRecords => Vec::new(),
        }
    }
}

/// Record payload for a confirmed recipe
///
/// Manual ingredients are stored only for manual-mode recipes.
pub fn new_record(confirmed: &ConfirmedRecipe) -> NewRecipeRecord {
    let draft = &confirmed.draft;
    NewRecipeRecord {
        customer_name: draft.customer_name.trim().to_string(),
        customer_phone: draft.customer_phone.trim().to_string(),
        product_name: confirmed.preview.product_name.clone(),
        selected_base: draft.base_id.clone(),
        is_manual_mode: draft.manual_mode,
        selected_skin_chars: draft.skin.clone(),
        manual_ingredients: draft.manual_mode.then(|| draft.manual_ingredients.clone()),
        selected_fragrance: draft.fragrance().map(str::to_string),
        manager_name: draft.manager_name.trim().to_string(),
        price: draft.price.trim().to_string(),
        use_by_date: confirmed.product_info.use_by_date.clone(),
        product_info: confirmed.product_info.clone(),
    }
}

/// Persist a confirmed recipe; returns the new record id
pub async fn save<S: RecordStore>(
    store: Option<&S>,
    scope: &RecordScope,
    confirmed: &ConfirmedRecipe,
) -> AppResult<String> {
    let Some(store) = store else {
        tracing::warn!(collection = %scope.collection_path(), "Save attempted without a store");
        return Err(AppError::with_message(ErrorCode::StoreUnavailable, STORE_UNAVAILABLE));
    };

    match store.save(scope, new_record(confirmed)).await {
        Ok(id) => {
            tracing::info!(
                collection = %scope.collection_path(),
                record_id = %id,
                prep_number = %confirmed.product_info.prep_number,
                "Recipe record saved"
            );
            Ok(id)
        }
        Err(e) => {
            tracing::debug!(collection = %scope.collection_path(), error = %e, "Failed to save recipe record");
            Err(store_error(e, SAVE_FAILED))
        }
    }
}

/// Records whose customer name equals `customer_name` after trimming
pub async fn search<S: RecordStore>(
    store: Option<&S>,
    scope: &RecordScope,
    customer_name: &str,
) -> AppResult<SearchOutcome> {
    let name = customer_name.trim();
    if name.is_empty() {
        return Err(AppError::with_message(ErrorCode::CustomerNameRequired, NAME_REQUIRED));
    }
    let Some(store) = store else {
        return Err(AppError::with_message(ErrorCode::StoreUnavailable, STORE_UNAVAILABLE));
    };

    match store.find_by_customer_name(scope, name).await {
        Ok(mut records) => {
            records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            tracing::info!(
                collection = %scope.collection_path(),
                count = records.len(),
                "Recipe records searched"
            );
            if records.is_empty() {
                Ok(SearchOutcome::NoRecords)
            } else {
                Ok(SearchOutcome::Found(records))
            }
        }
        Err(e) => {
            tracing::debug!(collection = %scope.collection_path(), error = %e, "Failed to search recipe records");
            Err(store_error(e, SEARCH_FAILED))
        }
    }
}

/// One record by id, `RecordNotFound` when absent from the scope
pub async fn load<S: RecordStore>(
    store: Option<&S>,
    scope: &RecordScope,
    id: &str,
) -> AppResult<RecipeRecord> {
    let Some(store) = store else {
        return Err(AppError::with_message(ErrorCode::StoreUnavailable, STORE_UNAVAILABLE));
    };
    match store.find_by_id(scope, id).await {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(AppError::with_message(
            ErrorCode::RecordNotFound,
            format!("Record not found: {id}"),
        )),
        Err(e) => {
            tracing::debug!(collection = %scope.collection_path(), error = %e, "Failed to load recipe record");
            Err(store_error(e, SEARCH_FAILED))
        }
    }
}

/// Keep the repository's error code, replace its text with the operator notice
fn store_error(err: RepoError, message: &str) -> AppError {
    let mut app = AppError::from(err);
    app.message = message.to_string();
    app
}
