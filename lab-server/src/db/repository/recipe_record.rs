//! Recipe Record Repository

use serde::{Deserialize, Serialize};
use shared::models::{NewRecipeRecord, ProductInfo, RecipeRecord, SkinSelection};
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RecordScope, RecordStore, RepoError, RepoResult};
use crate::utils::time::now_millis;

const TABLE: &str = "recipe_record";

/// Row as written; `collection` carries the scope
#[derive(Debug, Serialize)]
struct RecordContent {
    collection: String,
    operator_id: String,
    customer_name: String,
    customer_phone: String,
    product_name: String,
    selected_base: String,
    is_manual_mode: bool,
    selected_skin_chars: SkinSelection,
    manual_ingredients: Option<Vec<String>>,
    selected_fragrance: Option<String>,
    manager_name: String,
    price: String,
    use_by_date: String,
    product_info: ProductInfo,
    created_at: i64,
}

/// Row as read back, with the SurrealDB record id
#[derive(Debug, Deserialize)]
struct StoredRecord {
    id: RecordId,
    customer_name: String,
    #[serde(default)]
    customer_phone: String,
    product_name: String,
    selected_base: String,
    is_manual_mode: bool,
    selected_skin_chars: SkinSelection,
    #[serde(default)]
    manual_ingredients: Option<Vec<String>>,
    #[serde(default)]
    selected_fragrance: Option<String>,
    manager_name: String,
    price: String,
    use_by_date: String,
    product_info: ProductInfo,
    created_at: i64,
}

impl From<StoredRecord> for RecipeRecord {
    fn from(r: StoredRecord) -> Self {
        RecipeRecord {
            id: r.id.key().to_string(),
            customer_name: r.customer_name,
            customer_phone: r.customer_phone,
            product_name: r.product_name,
            selected_base: r.selected_base,
            is_manual_mode: r.is_manual_mode,
            selected_skin_chars: r.selected_skin_chars,
            manual_ingredients: r.manual_ingredients,
            selected_fragrance: r.selected_fragrance,
            manager_name: r.manager_name,
            price: r.price,
            use_by_date: r.use_by_date,
            product_info: r.product_info,
            created_at: r.created_at,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RecipeRecordRepository {
    base: BaseRepository,
}

impl RecipeRecordRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn content(scope: &RecordScope, data: NewRecipeRecord, created_at: i64) -> RecordContent {
        RecordContent {
            collection: scope.collection_path(),
            operator_id: scope.operator_id.clone(),
            customer_name: data.customer_name,
            customer_phone: data.customer_phone,
            product_name: data.product_name,
            selected_base: data.selected_base,
            is_manual_mode: data.is_manual_mode,
            selected_skin_chars: data.selected_skin_chars,
            manual_ingredients: data.manual_ingredients,
            selected_fragrance: data.selected_fragrance,
            manager_name: data.manager_name,
            price: data.price,
            use_by_date: data.use_by_date,
            product_info: data.product_info,
            created_at,
        }
    }
}

impl RecordStore for RecipeRecordRepository {
    async fn save(&self, scope: &RecordScope, record: NewRecipeRecord) -> RepoResult<String> {
        if record.customer_name.trim().is_empty() {
            return Err(RepoError::Validation("customer_name is empty".into()));
        }

        let key = uuid::Uuid::new_v4().simple().to_string();
        let content = Self::content(scope, record, now_millis());
        let created: Option<StoredRecord> = self
            .base
            .db()
            .create((TABLE, key.clone()))
            .content(content)
            .await?;

        created
            .map(|_| key)
            .ok_or_else(|| RepoError::Database("Failed to create recipe record".into()))
    }

    async fn find_by_customer_name(
        &self,
        scope: &RecordScope,
        customer_name: &str,
    ) -> RepoResult<Vec<RecipeRecord>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM recipe_record \
                 WHERE collection = $collection AND customer_name = $name \
                 ORDER BY created_at DESC",
            )
            .bind(("collection", scope.collection_path()))
            .bind(("name", customer_name.to_string()))
            .await?;
        let rows: Vec<StoredRecord> = result.take(0)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, scope: &RecordScope, id: &str) -> RepoResult<Option<RecipeRecord>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM type::thing($table, $key) WHERE collection = $collection")
            .bind(("table", TABLE))
            .bind(("key", id.to_string()))
            .bind(("collection", scope.collection_path()))
            .await?;
        let rows: Vec<StoredRecord> = result.take(0)?;
        Ok(rows.into_iter().next().map(Into::into))
    }
}
