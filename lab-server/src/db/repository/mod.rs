//! Repository Module
//!
//! Append-only record storage. Records are namespaced per deployment and
//! per operator; nothing is ever updated or deleted.

pub mod recipe_record;

pub use recipe_record::RecipeRecordRepository;

use shared::models::{NewRecipeRecord, RecipeRecord};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Unavailable(msg) => AppError::store_unavailable(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Namespace a record lives in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordScope {
    pub app_id: String,
    pub operator_id: String,
}

impl RecordScope {
    pub fn new(app_id: impl Into<String>, operator_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            operator_id: operator_id.into(),
        }
    }

    /// `artifacts/{app_id}/users/{operator_id}/recipes`
    pub fn collection_path(&self) -> String {
        format!("artifacts/{}/users/{}/recipes", self.app_id, self.operator_id)
    }
}

/// Append-only store of prepared recipes
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    /// Persist a new record and return its id
    async fn save(&self, scope: &RecordScope, record: NewRecipeRecord) -> RepoResult<String>;

    /// Exact match on customer name, any order
    async fn find_by_customer_name(
        &self,
        scope: &RecordScope,
        customer_name: &str,
    ) -> RepoResult<Vec<RecipeRecord>>;

    async fn find_by_id(&self, scope: &RecordScope, id: &str) -> RepoResult<Option<RecipeRecord>>;
}

/// Base repository with database reference
#[derive(Clone, Debug)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
