//! Form sessions
//!
//! One session per operator, held in memory. A session owns the prep
//! counter, the last confirmed recipe and the id of the last saved record.
//! Nothing here survives a restart.

use chrono::NaiveDate;
use dashmap::DashMap;
use shared::error::ErrorCode;
use shared::models::{ConfirmedRecipe, RecipeDraft};

use crate::catalog::Catalog;
use crate::composer::{self, PrepSequence};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Clone, Default)]
pub struct FormSession {
    pub sequence: PrepSequence,
    pub confirmed: Option<ConfirmedRecipe>,
    pub saved_record_id: Option<String>,
    /// Bumped whenever the confirmation is replaced or dropped
    generation: u64,
}

impl FormSession {
    pub fn reset(&mut self) {
        *self = Self {
            generation: self.generation + 1,
            ..Self::default()
        };
    }

    fn set_confirmed(&mut self, confirmed: Option<ConfirmedRecipe>) {
        self.confirmed = confirmed;
        self.saved_record_id = None;
        self.generation += 1;
    }
}

/// A confirmation moved out of its session while a save is in flight
#[derive(Debug, Clone)]
pub struct PendingSave {
    pub recipe: ConfirmedRecipe,
    generation: u64,
}

/// Operator id -> form session
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: DashMap<String, FormSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Confirm `draft` inside the operator's session, replacing any earlier confirmation
    pub fn confirm(
        &self,
        operator_id: &str,
        catalog: &Catalog,
        draft: &RecipeDraft,
        date: NaiveDate,
    ) -> AppResult<ConfirmedRecipe> {
        let mut session = self.sessions.entry(operator_id.to_string()).or_default();
        let confirmed = composer::confirm(catalog, &mut session.sequence, draft, date)?;
        session.set_confirmed(Some(confirmed.clone()));
        Ok(confirmed)
    }

    /// Drop the confirmation after the draft changed
    pub fn invalidate(&self, operator_id: &str) {
        if let Some(mut session) = self.sessions.get_mut(operator_id) {
            session.set_confirmed(None);
        }
    }

    /// Drop the confirmation unless it was made for exactly `draft`
    pub fn invalidate_if_changed(&self, operator_id: &str, draft: &RecipeDraft) {
        if let Some(mut session) = self.sessions.get_mut(operator_id)
            && session
                .confirmed
                .as_ref()
                .is_some_and(|confirmed| confirmed.draft != *draft)
        {
            session.set_confirmed(None);
        }
    }

    /// Move the confirmed recipe out for saving
    ///
    /// A second call before [`restore`](Self::restore) fails, so one
    /// confirmation saves at most once.
    pub fn take_confirmed(&self, operator_id: &str) -> AppResult<PendingSave> {
        self.sessions
            .get_mut(operator_id)
            .and_then(|mut session| {
                let generation = session.generation;
                session
                    .confirmed
                    .take()
                    .map(|recipe| PendingSave { recipe, generation })
            })
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::RecipeNotConfirmed,
                    "Confirm the recipe before saving",
                )
            })
    }

    /// Put a recipe back after a failed save
    ///
    /// Skipped when the session was reset, re-confirmed or invalidated
    /// while the save was running.
    pub fn restore(&self, operator_id: &str, pending: PendingSave) {
        if let Some(mut session) = self.sessions.get_mut(operator_id)
            && session.generation == pending.generation
            && session.confirmed.is_none()
        {
            session.confirmed = Some(pending.recipe);
        }
    }

    pub fn mark_saved(&self, operator_id: &str, record_id: &str) {
        let mut session = self.sessions.entry(operator_id.to_string()).or_default();
        session.saved_record_id = Some(record_id.to_string());
    }

    pub fn can_save(&self, operator_id: &str) -> bool {
        self.sessions
            .get(operator_id)
            .is_some_and(|session| composer::confirmation::can_save(&session))
    }

    pub fn saved_record_id(&self, operator_id: &str) -> Option<String> {
        self.sessions
            .get(operator_id)
            .and_then(|session| session.saved_record_id.clone())
    }

    pub fn prep_count(&self, operator_id: &str) -> u32 {
        self.sessions
            .get(operator_id)
            .map(|session| session.sequence.current())
            .unwrap_or(0)
    }

    /// Full reset: counter, confirmation and saved id
    pub fn reset(&self, operator_id: &str) {
        if let Some(mut session) = self.sessions.get_mut(operator_id) {
            session.reset();
        }
        tracing::debug!(operator_id, "Session reset");
    }
}
