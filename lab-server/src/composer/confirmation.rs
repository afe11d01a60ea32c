//! Confirmation
//!
//! Gating rules for the confirm action and the preparation metadata stamped
//! on a confirmed recipe.

use chrono::NaiveDate;
use shared::error::ErrorCode;
use shared::models::{ConfirmBlocker, ConfirmedRecipe, ProductInfo, RecipeDraft, SkinTypeCode};

use super::compose;
use crate::catalog::Catalog;
use crate::session::FormSession;
use crate::utils::{AppError, AppResult};

pub const USE_BY_TEXT: &str = "조제일로부터 6개월";
pub const PRICE_FALLBACK: &str = "별도 문의";

/// Per-session preparation counter
///
/// Starts at zero; every successful confirm takes the next value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrepSequence {
    count: u32,
}

impl PrepSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> u32 {
        self.count += 1;
        self.count
    }

    pub fn current(&self) -> u32 {
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}

/// Everything that keeps the recipe from being confirmed, empty when allowed
pub fn blockers(
    draft: &RecipeDraft,
    code: Option<&SkinTypeCode>,
    has_recipe: bool,
) -> Vec<ConfirmBlocker> {
    let mut blockers = Vec::new();
    if draft.customer_name.trim().is_empty() {
        blockers.push(ConfirmBlocker::MissingCustomerName);
    }
    if draft.manager_name.trim().is_empty() {
        blockers.push(ConfirmBlocker::MissingManagerName);
    }
    match code {
        None => blockers.push(ConfirmBlocker::SelectionIncomplete),
        Some(_) if draft.manual_mode => {
            if draft.manual_ingredients.is_empty() {
                blockers.push(ConfirmBlocker::NoManualIngredients);
            }
        }
        Some(_) if !has_recipe => blockers.push(ConfirmBlocker::NoRecipeForCode),
        Some(_) => {}
    }
    blockers
}

pub fn can_confirm(draft: &RecipeDraft, code: Option<&SkinTypeCode>, has_recipe: bool) -> bool {
    blockers(draft, code, has_recipe).is_empty()
}

/// Saving is allowed only while a confirmed recipe is held
pub fn can_save(session: &FormSession) -> bool {
    session.confirmed.is_some()
}

/// `{base_id}{yyyymmdd}{nn}`
pub fn prep_number(base_id: &str, date: NaiveDate, sequence: u32) -> String {
    format!("{base_id}{}{sequence:02}", date.format("%Y%m%d"))
}

/// Preparation metadata for a confirm on `date` taking sequence value `sequence`
pub fn product_info(
    catalog: &Catalog,
    draft: &RecipeDraft,
    date: NaiveDate,
    sequence: u32,
) -> ProductInfo {
    let price = draft.price.trim();
    ProductInfo {
        prep_date: date.format("%Y.%m.%d").to_string(),
        prep_number: prep_number(&draft.base_id, date, sequence),
        volume: catalog.volume_for(&draft.base_id).to_string(),
        use_by_date: USE_BY_TEXT.to_string(),
        manager_name: draft.manager_name.trim().to_string(),
        price: if price.is_empty() {
            PRICE_FALLBACK.to_string()
        } else {
            price.to_string()
        },
    }
}

/// Confirm `draft`, advancing `sequence` only on success
pub fn confirm(
    catalog: &Catalog,
    sequence: &mut PrepSequence,
    draft: &RecipeDraft,
    date: NaiveDate,
) -> AppResult<ConfirmedRecipe> {
    let preview = compose(catalog, draft)?;
    if !preview.can_confirm {
        let reasons = preview
            .blockers
            .iter()
            .map(|b| serde_json::to_value(b).unwrap_or_default())
            .collect::<Vec<_>>();
        return Err(AppError::with_message(
            ErrorCode::ConfirmBlocked,
            "Recipe cannot be confirmed yet",
        )
        .with_detail("blockers", reasons));
    }

    let info = product_info(catalog, draft, date, sequence.next());
    tracing::info!(
        prep_number = %info.prep_number,
        base = %draft.base_id,
        manual = draft.manual_mode,
        "Recipe confirmed"
    );

    Ok(ConfirmedRecipe {
        draft: draft.clone(),
        preview,
        product_info: info,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::fixture;
    use shared::models::{SkinAxis, SkinMark};

    fn ready_draft() -> RecipeDraft {
        let mut draft = RecipeDraft {
            customer_name: "김민지".into(),
            manager_name: "박조제".into(),
            base_id: "cb1".into(),
            fragrance: Some("Citrus".into()),
            ..Default::default()
        };
        for (axis, mark) in [
            (SkinAxis::ALL[0], SkinMark::D),
            (SkinAxis::ALL[1], SkinMark::S),
            (SkinAxis::ALL[2], SkinMark::P),
            (SkinAxis::ALL[3], SkinMark::W),
            (SkinAxis::ALL[4], SkinMark::C),
        ] {
            draft.skin.select(axis, mark).unwrap();
        }
        draft
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 3).unwrap()
    }

    #[test]
    fn test_prep_number_format() {
        assert_eq!(prep_number("cb1", date(), 1), "cb12024050301");
        assert_eq!(prep_number("sb50", date(), 12), "sb502024050312");
    }

    #[test]
    fn test_confirm_twice_gives_distinct_numbers() {
        let catalog = fixture();
        let mut sequence = PrepSequence::new();
        let draft = ready_draft();

        let first = confirm(&catalog, &mut sequence, &draft, date()).unwrap();
        let second = confirm(&catalog, &mut sequence, &draft, date()).unwrap();

        assert_eq!(first.product_info.prep_number, "cb12024050301");
        assert_eq!(second.product_info.prep_number, "cb12024050302");
        assert_eq!(sequence.current(), 2);
        assert_eq!(first.product_info.prep_date, "2024.05.03");
        assert_eq!(first.product_info.use_by_date, USE_BY_TEXT);
        assert_eq!(first.product_info.volume, "30g");
        assert_eq!(first.product_info.price, PRICE_FALLBACK);
    }

    #[test]
    fn test_blocked_confirm_keeps_counter() {
        let catalog = fixture();
        let mut sequence = PrepSequence::new();
        let mut draft = ready_draft();
        draft.manager_name = " ".into();

        let err = confirm(&catalog, &mut sequence, &draft, date()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfirmBlocked);
        assert_eq!(sequence.current(), 0);
    }

    #[test]
    fn test_blockers() {
        let code: SkinTypeCode = "DSPWC".parse().unwrap();
        let mut draft = ready_draft();
        assert!(can_confirm(&draft, Some(&code), true));
        assert_eq!(
            blockers(&draft, Some(&code), false),
            vec![ConfirmBlocker::NoRecipeForCode]
        );

        draft.customer_name.clear();
        assert_eq!(
            blockers(&draft, None, false),
            vec![
                ConfirmBlocker::MissingCustomerName,
                ConfirmBlocker::SelectionIncomplete
            ]
        );
    }

    #[test]
    fn test_manual_mode_needs_ingredients_not_recipe() {
        let code: SkinTypeCode = "ORNWA".parse().unwrap();
        let mut draft = ready_draft();
        draft.manual_mode = true;
        assert_eq!(
            blockers(&draft, Some(&code), false),
            vec![ConfirmBlocker::NoManualIngredients]
        );

        draft.manual_ingredients = vec!["알부틴".into()];
        assert!(can_confirm(&draft, Some(&code), false));
        assert!(!can_confirm(&draft, None, false));
    }

    #[test]
    fn test_price_kept_when_given() {
        let catalog = fixture();
        let mut draft = ready_draft();
        draft.price = " 35,000원 ".into();
        let info = product_info(&catalog, &draft, date(), 3);
        assert_eq!(info.price, "35,000원");
        assert_eq!(info.manager_name, "박조제");
    }
}
