//! Record store against a real embedded SurrealDB

use std::time::Duration;

use lab_server::db::DbService;
use lab_server::db::repository::{RecipeRecordRepository, RecordScope, RecordStore};
use lab_server::services::records::{self, SearchOutcome};
use shared::models::{NewRecipeRecord, ProductInfo, SkinMark, SkinSelection};

async fn open_store(tmp: &tempfile::TempDir) -> RecipeRecordRepository {
    let service = DbService::open(&tmp.path().join("lab.db"), "test-app")
        .await
        .unwrap();
    RecipeRecordRepository::new(service.db)
}

fn new_record(customer: &str, prep_number: &str) -> NewRecipeRecord {
    NewRecipeRecord {
        customer_name: customer.into(),
        customer_phone: "010-1234-5678".into(),
        product_name: format!("{customer}님 맞춤 크림"),
        selected_base: "cb1".into(),
        is_manual_mode: false,
        selected_skin_chars: SkinSelection {
            hydration: Some(SkinMark::D),
            sensitivity: Some(SkinMark::S),
            pigmentation: Some(SkinMark::P),
            wrinkle: Some(SkinMark::W),
            inflammation: Some(SkinMark::C),
        },
        manual_ingredients: None,
        selected_fragrance: Some("Citrus".into()),
        manager_name: "박조제".into(),
        price: "별도 문의".into(),
        use_by_date: "조제일로부터 6개월".into(),
        product_info: ProductInfo {
            prep_date: "2024.05.03".into(),
            prep_number: prep_number.into(),
            volume: "30g".into(),
            use_by_date: "조제일로부터 6개월".into(),
            manager_name: "박조제".into(),
            price: "별도 문의".into(),
        },
    }
}

#[tokio::test]
async fn test_save_and_load_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let store = open_store(&tmp).await;
    let scope = RecordScope::new("test-app", "op-1");

    let id = store
        .save(&scope, new_record("김민지", "cb12024050301"))
        .await
        .unwrap();
    let loaded = store.find_by_id(&scope, &id).await.unwrap().unwrap();

    assert_eq!(loaded.id, id);
    assert_eq!(loaded.customer_name, "김민지");
    assert_eq!(loaded.product_info.prep_number, "cb12024050301");
    assert_eq!(loaded.selected_skin_chars.inflammation, Some(SkinMark::C));
    assert_eq!(loaded.selected_fragrance.as_deref(), Some("Citrus"));
    assert!(loaded.manual_ingredients.is_none());
    assert!(loaded.created_at > 0);
}

#[tokio::test]
async fn test_search_is_exact_and_newest_first() {
    let tmp = tempfile::tempdir().unwrap();
    let store = open_store(&tmp).await;
    let scope = RecordScope::new("test-app", "op-1");

    for (customer, number) in [
        ("김민지", "cb12024050301"),
        ("김민", "cb12024050302"),
        ("김민지", "cb12024050303"),
    ] {
        store.save(&scope, new_record(customer, number)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let outcome = records::search(Some(&store), &scope, " 김민지 ").await.unwrap();
    let numbers: Vec<String> = outcome
        .into_records()
        .into_iter()
        .map(|r| r.product_info.prep_number)
        .collect();
    assert_eq!(numbers, ["cb12024050303", "cb12024050301"]);
}

#[tokio::test]
async fn test_operators_do_not_see_each_other() {
    let tmp = tempfile::tempdir().unwrap();
    let store = open_store(&tmp).await;
    let mine = RecordScope::new("test-app", "op-1");
    let theirs = RecordScope::new("test-app", "op-2");

    let id = store
        .save(&mine, new_record("김민지", "cb12024050301"))
        .await
        .unwrap();

    let outcome = records::search(Some(&store), &theirs, "김민지").await.unwrap();
    assert_eq!(outcome, SearchOutcome::NoRecords);
    assert!(store.find_by_id(&theirs, &id).await.unwrap().is_none());
    assert!(store.find_by_id(&mine, "missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_manual_record_keeps_list() {
    let tmp = tempfile::tempdir().unwrap();
    let store = open_store(&tmp).await;
    let scope = RecordScope::new("test-app", "op-1");

    let mut record = new_record("이서준", "sb2024050301");
    record.is_manual_mode = true;
    record.manual_ingredients = Some(vec!["알부틴".into(), "Green".into()]);
    let id = store.save(&scope, record).await.unwrap();

    let loaded = store.find_by_id(&scope, &id).await.unwrap().unwrap();
    assert!(loaded.is_manual_mode);
    assert_eq!(
        loaded.manual_ingredients,
        Some(vec!["알부틴".to_string(), "Green".to_string()])
    );
}
