//! HTTP flow tests driving the router with `oneshot`

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use lab_server::api::build_router;
use lab_server::{Catalog, Config, ServerState};
use serde_json::{Value, json};
use tower::ServiceExt;

struct TestApp {
    _tmp: tempfile::TempDir,
    app: Router,
    token: String,
}

fn test_config(tmp: &tempfile::TempDir) -> Config {
    let mut config = Config::with_overrides(tmp.path().to_string_lossy(), 0);
    config.environment = "development".into();
    config.catalog_path = None;
    config.business_tz = "Asia/Seoul".into();
    config.public_base_url = "https://your-app.com".into();
    config.qr_service_url = "https://api.qrserver.com/v1/create-qr-code/".into();
    config
}

impl TestApp {
    async fn new() -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let state = ServerState::initialize(&test_config(&tmp)).await.unwrap();
        assert!(state.records().is_some());
        Self::with_state(tmp, state)
    }

    /// Server whose record store never opened
    fn without_store() -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let state =
            ServerState::new(&test_config(&tmp), Catalog::embedded().unwrap(), None).unwrap();
        Self::with_state(tmp, state)
    }

    fn with_state(tmp: tempfile::TempDir, state: ServerState) -> Self {
        let token = state.jwt_service().generate_token("op-1", "박조제").unwrap();
        Self {
            _tmp: tmp,
            app: build_router(state),
            token,
        }
    }

    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token));
        let body = match body {
            Some(v) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let response = self
            .app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    /// GET returning the raw text body and its content type
    async fn get_text(&self, uri: &str) -> (StatusCode, String, String) {
        let request = Request::get(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .body(Body::empty())
            .unwrap();
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }
}

fn draft() -> Value {
    json!({
        "customer_name": "김민지",
        "customer_phone": "010-1234-5678",
        "manager_name": "박조제",
        "price": "",
        "base_id": "cb1",
        "skin": {
            "hydration": "D",
            "sensitivity": "S",
            "pigmentation": "P",
            "wrinkle": "W",
            "inflammation": "C"
        },
        "fragrance": "Citrus"
    })
}

#[tokio::test]
async fn test_health_is_public_and_api_requires_token() {
    let app = TestApp::new().await;

    let response = app
        .app
        .clone()
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["store_ready"], true);

    let response = app
        .app
        .clone()
        .oneshot(Request::get("/api/catalog").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_catalog_view() {
    let app = TestApp::new().await;
    let (status, body) = app.send("GET", "/api/catalog", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["bases"].as_array().unwrap().len(), 10);
    assert_eq!(body["data"]["manual_limit"], 10);
}

#[tokio::test]
async fn test_preview_example() {
    let app = TestApp::new().await;
    let (status, body) = app.send("POST", "/api/recipes/preview", Some(draft())).await;
    assert_eq!(status, StatusCode::OK);

    let data = &body["data"];
    assert_eq!(data["code"], "DSPWC");
    assert_eq!(data["product_name"], "김민지님 맞춤 크림");
    assert_eq!(data["can_confirm"], true);
    let full: Vec<&str> = data["full_ingredients"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(full.iter().filter(|n| **n == "향료").count(), 1);
    assert!(!full.contains(&"Citrus"));
}

#[tokio::test]
async fn test_confirm_twice_increments_prep_number() {
    let app = TestApp::new().await;

    let (status, first) = app.send("POST", "/api/recipes/confirm", Some(draft())).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = app.send("POST", "/api/recipes/confirm", Some(draft())).await;

    let first = first["data"]["recipe"]["product_info"]["prep_number"]
        .as_str()
        .unwrap()
        .to_string();
    let second = second["data"]["recipe"]["product_info"]["prep_number"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(first.starts_with("cb1") && first.ends_with("01"));
    assert!(second.ends_with("02"));
    assert_eq!(first.len(), second.len());
    assert_ne!(first, second);
}

#[tokio::test]
async fn test_confirm_blocked_without_manager() {
    let app = TestApp::new().await;
    let mut body = draft();
    body["manager_name"] = json!("");

    let (status, response) = app.send("POST", "/api/recipes/confirm", Some(body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response["code"], 4006);
}

#[tokio::test]
async fn test_save_requires_confirmation() {
    let app = TestApp::new().await;
    let (status, body) = app.send("POST", "/api/records", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 4007);
}

#[tokio::test]
async fn test_confirm_save_search_load() {
    let app = TestApp::new().await;
    app.send("POST", "/api/recipes/confirm", Some(draft())).await;

    let (status, saved) = app.send("POST", "/api/records", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["message"], "저장 완료! 고객에게 안내장이 발송되었습니다.");
    let id = saved["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(
        saved["data"]["share_url"],
        format!("https://your-app.com/recipe/{id}")
    );

    // one confirmation, one record
    let (status, _) = app.send("POST", "/api/records", None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let uri = format!(
        "/api/records?customer_name={}",
        "%20%EA%B9%80%EB%AF%BC%EC%A7%80"
    );
    let (status, found) = app.send("GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["message"], "1개의 기록을 찾았습니다.");
    assert_eq!(found["data"]["records"][0]["id"], id.as_str());

    let (status, detail) = app.send("GET", &format!("/api/records/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["data"]["draft"]["base_id"], "cb1");
    assert_eq!(detail["data"]["draft"]["fragrance"], "Citrus");
    assert_eq!(detail["data"]["draft"]["manual_ingredients"], json!([]));

    let (status, sheet) = app
        .send("GET", &format!("/api/records/{id}/sheet"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sheet["data"]["title"], "맞춤형화장품 정보");
    assert_eq!(sheet["data"]["product_info"]["price"], "별도 문의");

    let (status, content_type, text) = app
        .get_text(&format!("/api/records/{id}/sheet?format=text"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(text.lines().next(), Some("======= 맞춤형 화장품 정보 ======="));
    assert!(text.contains("제품명: 김민지님 맞춤 크림"));

    let (status, content_type, doc) = app
        .get_text(&format!("/api/records/{id}/sheet?format=document"))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(doc.lines().next(), Some("맞춤형화장품 정보"));
    let headers = [
        "1. 피부 타입 및 설명",
        "2. 제품 컨셉",
        "3. 핵심 성분 및 효능",
        "4. 사용 방법",
        "5. 전성분",
        "6. 사용 시의 주의사항",
    ];
    let positions: Vec<usize> = headers.iter().map(|h| doc.find(h).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_save_without_store_keeps_confirmation() {
    let app = TestApp::without_store();

    let (status, body) = app.send("GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["status"], "degraded");
    assert_eq!(body["data"]["store_ready"], false);

    let (status, _) = app.send("POST", "/api/recipes/confirm", Some(draft())).await;
    assert_eq!(status, StatusCode::OK);

    // failed saves hand the confirmation back, so the retry fails the same way
    for _ in 0..2 {
        let (status, body) = app.send("POST", "/api/records", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], 9003);
        assert_eq!(body["message"], "오류: 데이터베이스에 연결할 수 없습니다.");
    }

    let (status, body) = app
        .send("GET", "/api/records?customer_name=nobody", None)
        .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["message"], "오류: 데이터베이스에 연결할 수 없습니다.");
}

#[tokio::test]
async fn test_search_messages() {
    let app = TestApp::new().await;

    let (status, body) = app.send("GET", "/api/records?customer_name=%20", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "조회할 고객 이름을 입력해주세요.");

    let (status, body) = app
        .send("GET", "/api/records?customer_name=nobody", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "해당 고객의 조제 기록이 없습니다.");
}

#[tokio::test]
async fn test_manual_toggle_limit() {
    let app = TestApp::new().await;
    let (_, catalog) = app.send("GET", "/api/catalog", None).await;
    let names: Vec<String> = catalog["data"]["additive_menu"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|c| c["ingredients"].as_array().unwrap().clone())
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect();

    let mut selected: Vec<String> = Vec::new();
    for name in &names[..10] {
        let (status, body) = app
            .send(
                "POST",
                "/api/recipes/manual/toggle",
                Some(json!({ "selected": selected, "ingredient": name })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["added"], true);
        selected = serde_json::from_value(body["data"]["selected"].clone()).unwrap();
    }

    let (status, body) = app
        .send(
            "POST",
            "/api/recipes/manual/toggle",
            Some(json!({ "selected": selected, "ingredient": names[10] })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "최대 10개까지만 선택할 수 있습니다.");
}

#[tokio::test]
async fn test_reset_restarts_counter() {
    let app = TestApp::new().await;
    app.send("POST", "/api/recipes/confirm", Some(draft())).await;
    let (status, _) = app.send("POST", "/api/session/reset", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.send("POST", "/api/records", None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, again) = app.send("POST", "/api/recipes/confirm", Some(draft())).await;
    let number = again["data"]["recipe"]["product_info"]["prep_number"]
        .as_str()
        .unwrap();
    assert!(number.ends_with("01"));
}
