//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine). One namespace for the service, one
//! database per deployment (`APP_ID`).

pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::{AppError, AppResult};

pub const NAMESPACE: &str = "cosmo_lab";

/// Table definitions, safe to run on every start
const SCHEMA: &str = "
DEFINE TABLE IF NOT EXISTS recipe_record SCHEMALESS;
DEFINE INDEX IF NOT EXISTS recipe_record_customer ON recipe_record FIELDS collection, customer_name;
";

/// Database service, owns the SurrealDB handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the store at `path` and select the deployment database
    pub async fn open(path: &Path, app_id: &str) -> AppResult<Self> {
        let db = Surreal::new::<RocksDb>(path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        Self::with_db(db, app_id).await
    }

    /// Use an already opened handle
    pub async fn with_db(db: Surreal<Db>, app_id: &str) -> AppResult<Self> {
        db.use_ns(NAMESPACE)
            .use_db(app_id)
            .await
            .map_err(|e| AppError::database(format!("Failed to select database: {e}")))?;
        db.query(SCHEMA)
            .await
            .and_then(|response| response.check())
            .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;

        tracing::info!(namespace = NAMESPACE, database = app_id, "Database ready");
        Ok(Self { db })
    }
}
