//! Manual additive selection
//!
//! In manual mode the operator picks additives from the menu instead of the
//! recipe table. The selection is ordered by insertion and capped.

use shared::error::ErrorCode;

use crate::catalog::Catalog;
use crate::utils::{AppError, AppResult};

/// Maximum number of manually selected additives
pub const MANUAL_LIMIT: usize = 10;

pub const LIMIT_MESSAGE: &str = "최대 10개까지만 선택할 수 있습니다.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualSelection {
    items: Vec<String>,
}

impl ManualSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a selection sent back by the client
    ///
    /// Duplicates are dropped; more than [`MANUAL_LIMIT`] entries or a name
    /// outside the menu is rejected.
    pub fn from_names(catalog: &Catalog, names: &[String]) -> AppResult<Self> {
        let mut selection = Self::new();
        for name in names {
            if selection.contains(name) {
                continue;
            }
            selection.add(catalog, name)?;
        }
        Ok(selection)
    }

    /// Remove `name` if selected, otherwise add it
    ///
    /// Returns `true` when the ingredient was added. A rejected add leaves
    /// the selection unchanged.
    pub fn toggle(&mut self, catalog: &Catalog, name: &str) -> AppResult<bool> {
        if let Some(pos) = self.items.iter().position(|n| n == name) {
            self.items.remove(pos);
            return Ok(false);
        }
        self.add(catalog, name)?;
        Ok(true)
    }

    fn add(&mut self, catalog: &Catalog, name: &str) -> AppResult<()> {
        if !catalog.is_menu_ingredient(name) {
            return Err(AppError::with_message(
                ErrorCode::UnknownIngredient,
                format!("Unknown ingredient: {name}"),
            )
            .with_detail("ingredient", name));
        }
        if self.items.len() >= MANUAL_LIMIT {
            return Err(AppError::with_message(
                ErrorCode::ManualLimitExceeded,
                LIMIT_MESSAGE,
            ));
        }
        self.items.push(name.to_string());
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::fixture;

    fn menu_names(catalog: &Catalog) -> Vec<String> {
        catalog
            .additive_menu()
            .iter()
            .flat_map(|c| c.ingredients.iter().cloned())
            .collect()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let catalog = fixture();
        let mut selection = ManualSelection::new();

        assert!(selection.toggle(&catalog, "알부틴").unwrap());
        assert!(selection.toggle(&catalog, "Citrus").unwrap());
        assert_eq!(selection.as_slice(), ["알부틴", "Citrus"]);

        assert!(!selection.toggle(&catalog, "알부틴").unwrap());
        assert_eq!(selection.as_slice(), ["Citrus"]);
    }

    #[test]
    fn test_eleventh_add_is_rejected() {
        let catalog = Catalog::embedded().unwrap();
        let names = menu_names(&catalog);
        assert!(names.len() > MANUAL_LIMIT);

        let mut selection = ManualSelection::new();
        for name in &names[..MANUAL_LIMIT] {
            assert!(selection.toggle(&catalog, name).unwrap());
        }
        let before = selection.clone();

        let err = selection.toggle(&catalog, &names[MANUAL_LIMIT]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ManualLimitExceeded);
        assert_eq!(err.message, LIMIT_MESSAGE);
        assert_eq!(selection, before);

        // removing still works at the limit
        assert!(!selection.toggle(&catalog, &names[0]).unwrap());
        assert_eq!(selection.len(), MANUAL_LIMIT - 1);
    }

    #[test]
    fn test_unknown_ingredient_rejected() {
        let catalog = fixture();
        let mut selection = ManualSelection::new();
        let err = selection.toggle(&catalog, "금가루").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownIngredient);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_from_names_dedups_and_caps() {
        let catalog = Catalog::embedded().unwrap();
        let names = menu_names(&catalog);

        let mut with_dup = names[..3].to_vec();
        with_dup.push(names[0].clone());
        let selection = ManualSelection::from_names(&catalog, &with_dup).unwrap();
        assert_eq!(selection.as_slice(), &names[..3]);

        let err = ManualSelection::from_names(&catalog, &names[..MANUAL_LIMIT + 1]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ManualLimitExceeded);
    }
}
