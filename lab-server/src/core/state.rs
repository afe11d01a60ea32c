use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::auth::{CurrentOperator, JwtService};
use crate::catalog::Catalog;
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{RecipeRecordRepository, RecordScope};
use crate::services::{QrClient, ShareLinks};
use crate::session::SessionRegistry;
use crate::utils::time::today;
use crate::utils::{AppError, AppResult};

/// Server state - shared references to every service
///
/// Cloning is cheap; heavy members sit behind `Arc`.
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | configuration (immutable) |
/// | catalog | reference tables |
/// | records | record store, `None` when the database failed to open |
/// | jwt_service | operator token validation |
/// | sessions | per-operator form sessions |
/// | share / qr | share links and QR proxy |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    pub records: Option<RecipeRecordRepository>,
    pub jwt_service: Arc<JwtService>,
    pub sessions: Arc<SessionRegistry>,
    pub share: ShareLinks,
    pub qr: QrClient,
    timezone: Tz,
}

impl ServerState {
    /// Initialize server state
    ///
    /// In order:
    /// 1. validate configuration, create `{work_dir}/database` and `/logs`
    /// 2. load the catalog (fatal on error)
    /// 3. open the database; on failure the server still starts and only
    ///    save/search report the store as unavailable
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        config.validate()?;
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::config(format!("Failed to create work directory: {e}")))?;

        let catalog = Catalog::load(config.catalog_path.as_deref().map(Path::new))?;

        let db_path = config.database_dir().join("lab.db");
        let records = match DbService::open(&db_path, &config.app_id).await {
            Ok(service) => Some(RecipeRecordRepository::new(service.db)),
            Err(e) => {
                tracing::error!(path = %db_path.display(), error = %e, "Record store unavailable");
                None
            }
        };

        Self::new(config, catalog, records)
    }

    /// Assemble state from already opened parts
    pub fn new(
        config: &Config,
        catalog: Catalog,
        records: Option<RecipeRecordRepository>,
    ) -> AppResult<Self> {
        let timezone = config.timezone()?;
        let qr = QrClient::new(Duration::from_millis(config.qr_timeout_ms))?;

        Ok(Self {
            config: config.clone(),
            catalog: Arc::new(catalog),
            records,
            jwt_service: Arc::new(JwtService::with_config(config.jwt.clone())),
            sessions: Arc::new(SessionRegistry::new()),
            share: ShareLinks::from_config(config),
            qr,
            timezone,
        })
    }

    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    pub fn records(&self) -> Option<&RecipeRecordRepository> {
        self.records.as_ref()
    }

    /// Record namespace of `operator` in this deployment
    pub fn scope(&self, operator: &CurrentOperator) -> RecordScope {
        RecordScope::new(&self.config.app_id, &operator.id)
    }

    /// Today in the business timezone
    pub fn today(&self) -> NaiveDate {
        today(self.timezone)
    }
}
