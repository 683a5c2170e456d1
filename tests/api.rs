//! End-to-end tests over the full router with an embedded database in a temp dir.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use worldbook::{app_router, validate, AppConfig, AppState, Storage, ALL_DEFS};

struct TestApp {
    router: Router,
    _dir: tempfile::TempDir,
}

async fn test_app_with(configure: impl FnOnce(&mut AppConfig)) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AppConfig::default();
    config.db.local.path = dir.path().join("app.db").to_string_lossy().into_owned();
    configure(&mut config);
    let target = validate(&config).unwrap();
    let storage = Storage::connect(&target).await.unwrap();
    storage.ensure_tables(ALL_DEFS).await.unwrap();
    TestApp {
        router: app_router(AppState::new(storage, config)),
        _dir: dir,
    }
}

async fn test_app() -> TestApp {
    test_app_with(|_| {}).await
}

impl TestApp {
    async fn send(&self, req: Request<Body>) -> Value {
        let res = self.router.clone().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK, "transport status is always 200");
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn get(&self, uri: &str) -> Value {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn json(&self, method: Method, uri: &str, body: Value) -> Value {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(req).await
    }

    async fn delete(&self, uri: &str) -> Value {
        self.send(Request::delete(uri).body(Body::empty()).unwrap()).await
    }

    async fn create_project(&self, name: &str) -> i64 {
        let env = self.json(Method::POST, "/projects", json!({ "prjNm": name })).await;
        env["data"]["prjNo"].as_i64().unwrap()
    }

    async fn create_trait(&self, name: &str) -> i64 {
        let env = self.json(Method::POST, "/traits", json!({ "traitNm": name })).await;
        assert_eq!(env["code"], "CREATED");
        env["data"]["traitNo"].as_i64().unwrap()
    }
}

#[tokio::test]
async fn create_returns_created_with_generated_key() {
    let app = test_app().await;
    let env = app
        .json(Method::POST, "/traits", json!({ "traitNm": "Brave", "aplyTrgt": "CHAR" }))
        .await;
    assert_eq!(env["error"], false);
    assert_eq!(env["code"], "CREATED");
    assert!(env["data"]["traitNo"].as_i64().unwrap() > 0);
    assert_eq!(env["data"]["traitNm"], "Brave");
    assert_eq!(env["data"]["delYn"], "N");
}

#[tokio::test]
async fn list_pages_through_rows() {
    let app = test_app().await;
    for i in 0..25 {
        app.create_trait(&format!("trait {i}")).await;
    }

    let env = app.get("/traits?page=2&pageSize=10").await;
    assert_eq!(env["code"], "OK");
    let page = &env["data"];
    assert_eq!(page["totalCnt"], 25);
    assert_eq!(page["totalPage"], 3);
    assert_eq!(page["list"].as_array().unwrap().len(), 10);
    assert_eq!(page["isFirst"], false);
    assert_eq!(page["isLast"], false);

    let page = app.get("/traits?page=3").await["data"].clone();
    assert_eq!(page["list"].as_array().unwrap().len(), 5);
    assert_eq!(page["isLast"], true);

    let page = app.get("/traits?page=9").await["data"].clone();
    assert!(page["list"].as_array().unwrap().is_empty());
    assert_eq!(page["page"], 9);
    assert_eq!(page["isLast"], true);
}

#[tokio::test]
async fn list_is_newest_first() {
    let app = test_app().await;
    let first = app.create_trait("first").await;
    let second = app.create_trait("second").await;
    let list = app.get("/traits").await["data"]["list"].clone();
    assert_eq!(list[0]["traitNo"], second);
    assert_eq!(list[1]["traitNo"], first);
}

#[tokio::test]
async fn keyword_search_narrows_the_list() {
    let app = test_app().await;
    app.create_trait("Fire Walker").await;
    app.create_trait("Ice Queen").await;
    let page = app.get("/traits?searchKeyword=fire&searchType=traitNm").await["data"].clone();
    assert_eq!(page["totalCnt"], 1);
    assert_eq!(page["list"][0]["traitNm"], "Fire Walker");
}

#[tokio::test]
async fn keyword_search_folds_accented_capitals() {
    let app = test_app().await;
    app.create_trait("Élan Vital").await;
    app.create_trait("Elan Plain").await;
    for keyword in ["%C3%A9lan", "%C3%89LAN", "%C3%89lan%20vital"] {
        let page = app.get(&format!("/traits?searchKeyword={keyword}")).await["data"].clone();
        assert_eq!(page["totalCnt"], 1, "{keyword}");
        assert_eq!(page["list"][0]["traitNm"], "Élan Vital");
    }
    assert_eq!(app.get("/traits?searchKeyword=ELAN").await["data"]["totalCnt"], 1);
}

#[tokio::test]
async fn read_is_idempotent() {
    let app = test_app().await;
    let key = app.create_trait("Calm").await;
    let a = app.get(&format!("/traits/{key}")).await;
    let b = app.get(&format!("/traits/{key}")).await;
    assert_eq!(a["code"], "OK");
    assert_eq!(a, b);
}

#[tokio::test]
async fn update_changes_only_sent_fields() {
    let app = test_app().await;
    let env = app
        .json(Method::POST, "/traits", json!({ "traitNm": "Calm", "traitExpln": "steady" }))
        .await;
    let key = env["data"]["traitNo"].as_i64().unwrap();
    let env = app
        .json(Method::PATCH, &format!("/traits/{key}"), json!({ "traitLcls": "MIND" }))
        .await;
    assert_eq!(env["code"], "OK");
    assert_eq!(env["data"]["traitExpln"], "steady");
    assert_eq!(env["data"]["traitLcls"], "MIND");
}

#[tokio::test]
async fn update_of_missing_key_is_entity_not_found() {
    let app = test_app().await;
    let env = app
        .json(Method::PATCH, "/traits/999", json!({ "traitNm": "x" }))
        .await;
    assert_eq!(env["error"], true);
    assert_eq!(env["code"], "TRAIT_NOT_FOUND");
    assert!(env["data"].is_null());
}

#[tokio::test]
async fn delete_twice_reports_not_deleted() {
    let app = test_app().await;
    let key = app.create_trait("Doomed").await;
    let env = app.delete(&format!("/traits/{key}")).await;
    assert_eq!(env["code"], "OK");
    assert_eq!(env["data"], json!({ "deleted": true }));

    let env = app.delete(&format!("/traits/{key}")).await;
    assert_eq!(env["error"], true);
    assert_eq!(env["code"], "TRAIT_NOT_FOUND");
    assert_eq!(env["data"], json!({ "deleted": false }));

    let env = app.get(&format!("/traits/{key}")).await;
    assert_eq!(env["code"], "TRAIT_NOT_FOUND");
}

#[tokio::test]
async fn missing_required_field_is_validation_error() {
    let app = test_app().await;
    let env = app.json(Method::POST, "/traits", json!({ "traitExpln": "nameless" })).await;
    assert_eq!(env["code"], "VALIDATION_ERROR");
    assert!(env["message"].as_str().unwrap().contains("traitNm"));

    let long = "x".repeat(201);
    let env = app.json(Method::POST, "/traits", json!({ "traitNm": long })).await;
    assert_eq!(env["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn wrong_field_type_is_validation_error() {
    let app = test_app().await;
    let env = app
        .json(Method::POST, "/traits", json!({ "traitNm": "x", "cnflTraitNo": "seven" }))
        .await;
    assert_eq!(env["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = test_app().await;
    let req = Request::post("/traits")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"traitNm\": "))
        .unwrap();
    let env = app.send(req).await;
    assert_eq!(env["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn missing_content_type_is_unsupported_media_type() {
    let app = test_app().await;
    let req = Request::post("/traits")
        .body(Body::from(json!({ "traitNm": "x" }).to_string()))
        .unwrap();
    let env = app.send(req).await;
    assert_eq!(env["code"], "UNSUPPORTED_MEDIA_TYPE");
}

#[tokio::test]
async fn non_numeric_key_is_bad_request() {
    let app = test_app().await;
    let env = app.get("/traits/abc").await;
    assert_eq!(env["code"], "BAD_REQUEST");
    assert!(env["data"].is_null());
}

#[tokio::test]
async fn bad_paging_parameters() {
    let app = test_app().await;
    assert_eq!(app.get("/traits?page=abc").await["code"], "BAD_REQUEST");
    assert_eq!(app.get("/traits?page=0").await["code"], "VALIDATION_ERROR");
    assert_eq!(app.get("/traits?pageSize=0").await["code"], "VALIDATION_ERROR");
    assert_eq!(app.get("/traits?pageSize=5000").await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn unknown_route_is_not_found_envelope() {
    let app = test_app().await;
    let env = app.get("/no-such-thing").await;
    assert_eq!(env["error"], true);
    assert_eq!(env["code"], "NOT_FOUND");
}

#[tokio::test]
async fn wrong_method_is_method_not_allowed_envelope() {
    let app = test_app().await;
    let req = Request::put("/traits/1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let env = app.send(req).await;
    assert_eq!(env["code"], "METHOD_NOT_ALLOWED");
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    let app = test_app_with(|c| c.server.body_limit_bytes = 64).await;
    let body = json!({ "traitNm": "x".repeat(200) }).to_string();
    let req = Request::post("/traits")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap();
    let env = app.send(req).await;
    assert_eq!(env["code"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn configured_body_limit_above_two_mebibytes_is_honored() {
    let app = test_app_with(|c| c.server.body_limit_bytes = 8 * 1024 * 1024).await;
    let body = json!({ "traitNm": "x".repeat(3 * 1024 * 1024) }).to_string();
    let req = Request::post("/traits")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap();
    let env = app.send(req).await;
    assert_eq!(env["code"], "VALIDATION_ERROR");
    assert!(env["message"].as_str().unwrap().contains("traitNm"));
}

#[tokio::test]
async fn scoped_entities_require_a_project() {
    let app = test_app().await;
    assert_eq!(app.get("/characters").await["code"], "BAD_REQUEST");
    assert_eq!(app.get("/characters?prjNo=abc").await["code"], "BAD_REQUEST");

    let env = app.json(Method::POST, "/characters", json!({ "charNm": "Ilse" })).await;
    assert_eq!(env["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn scoped_lists_only_show_their_project() {
    let app = test_app().await;
    let prj = app.json(Method::POST, "/projects", json!({ "prjNm": "North" })).await;
    let prj_no = prj["data"]["prjNo"].as_i64().unwrap();
    let env = app
        .json(Method::POST, "/characters", json!({ "prjNo": prj_no, "charNm": "Ilse" }))
        .await;
    assert_eq!(env["code"], "CREATED");
    app.json(Method::POST, "/characters", json!({ "prjNo": prj_no + 1, "charNm": "Other" }))
        .await;

    let page = app.get(&format!("/characters?prjNo={prj_no}")).await["data"].clone();
    assert_eq!(page["totalCnt"], 1);
    assert_eq!(page["list"][0]["charNm"], "Ilse");
}

#[tokio::test]
async fn scoped_key_routes_stay_inside_their_project() {
    let app = test_app().await;
    let env = app
        .json(Method::POST, "/characters", json!({ "prjNo": 1, "charNm": "Ilse" }))
        .await;
    let key = env["data"]["charNo"].as_i64().unwrap();

    assert_eq!(app.get(&format!("/characters/{key}")).await["code"], "BAD_REQUEST");
    assert_eq!(app.delete(&format!("/characters/{key}")).await["code"], "BAD_REQUEST");
    let env = app
        .json(Method::PATCH, &format!("/characters/{key}"), json!({ "logline": "x" }))
        .await;
    assert_eq!(env["code"], "BAD_REQUEST");

    assert_eq!(app.get(&format!("/characters/{key}?prjNo=2")).await["code"], "CHARACTER_NOT_FOUND");
    let env = app
        .json(Method::PATCH, &format!("/characters/{key}?prjNo=2"), json!({ "logline": "x" }))
        .await;
    assert_eq!(env["code"], "CHARACTER_NOT_FOUND");
    let env = app.delete(&format!("/characters/{key}?prjNo=2")).await;
    assert_eq!(env["code"], "CHARACTER_NOT_FOUND");
    assert_eq!(env["data"], json!({ "deleted": false }));

    let env = app.get(&format!("/characters/{key}?prjNo=1")).await;
    assert_eq!(env["code"], "OK");
    assert_eq!(env["data"]["charNm"], "Ilse");
    assert_eq!(app.delete(&format!("/characters/{key}?prjNo=1")).await["code"], "OK");
}

#[tokio::test]
async fn unscoped_key_routes_ignore_a_project() {
    let app = test_app().await;
    let key = app.create_trait("Calm").await;
    assert_eq!(app.get(&format!("/traits/{key}?prjNo=99")).await["code"], "OK");
}

#[tokio::test]
async fn every_entity_has_its_own_not_found_code() {
    let app = test_app().await;
    let cases = [
        ("/projects", "PROJECT_NOT_FOUND"),
        ("/traits", "TRAIT_NOT_FOUND"),
        ("/abilities", "ABILITY_NOT_FOUND"),
        ("/project-traits", "PROJECT_TRAIT_NOT_FOUND"),
        ("/project-abilities", "PROJECT_ABILITY_NOT_FOUND"),
        ("/core-rules", "CORE_RULE_NOT_FOUND"),
        ("/creatures", "CREATURE_NOT_FOUND"),
        ("/characters", "CHARACTER_NOT_FOUND"),
        ("/items", "ITEM_NOT_FOUND"),
        ("/regions", "REGION_NOT_FOUND"),
        ("/nations", "NATION_NOT_FOUND"),
        ("/organizations", "ORGANIZATION_NOT_FOUND"),
        ("/events", "EVENT_NOT_FOUND"),
        ("/lores", "LORE_NOT_FOUND"),
    ];
    for (path, code) in cases {
        assert_eq!(app.get(&format!("{path}/424242?prjNo=1")).await["code"], code, "{path}");
    }
}

#[tokio::test]
async fn project_owned_entities_round_trip() {
    let app = test_app().await;
    let prj_no = app.create_project("South").await;
    let cases = [
        ("/items", "itemNm", "itemNo"),
        ("/regions", "regionNm", "regionNo"),
        ("/nations", "ntnNm", "ntnNo"),
        ("/lores", "loreNm", "loreNo"),
        ("/project-traits", "traitNm", "traitNo"),
        ("/project-abilities", "abilityNm", "abilityNo"),
    ];
    for (path, name_field, key_field) in cases {
        let env = app
            .json(Method::POST, path, json!({ "prjNo": prj_no, name_field: "Ember" }))
            .await;
        assert_eq!(env["code"], "CREATED", "{path}");
        let key = env["data"][key_field].as_i64().unwrap();

        let page = app.get(&format!("{path}?prjNo={prj_no}&searchKeyword=EMB")).await["data"].clone();
        assert_eq!(page["totalCnt"], 1, "{path}");

        let env = app
            .json(Method::PATCH, &format!("{path}/{key}?prjNo={prj_no}"), json!({ name_field: "Ash" }))
            .await;
        assert_eq!(env["data"][name_field], "Ash", "{path}");
        assert_eq!(app.delete(&format!("{path}/{key}?prjNo={prj_no}")).await["code"], "OK", "{path}");
        assert_eq!(app.get(path).await["code"], "BAD_REQUEST", "{path}");
    }
}

#[tokio::test]
async fn pool_search_merges_global_and_project_entries() {
    let app = test_app().await;
    let prj_no = app.create_project("East").await;
    app.create_trait("Brave").await;
    app.create_trait("Sly").await;
    app.json(Method::POST, "/project-traits", json!({ "prjNo": prj_no, "traitNm": "Agile" }))
        .await;
    app.json(Method::POST, "/project-traits", json!({ "prjNo": prj_no + 1, "traitNm": "Bold" }))
        .await;

    let page = app.get(&format!("/search/traits?prjNo={prj_no}")).await["data"].clone();
    assert_eq!(page["totalCnt"], 3);
    assert_eq!(page["list"][0]["traitNm"], "Agile");
    assert_eq!(page["list"][0]["type"], "PROJECT");
    assert_eq!(page["list"][1]["traitNm"], "Brave");
    assert_eq!(page["list"][1]["type"], "GLOBAL");

    let page = app.get(&format!("/search/traits?prjNo={prj_no}&type=GLOBAL&searchKeyword=sl")).await["data"].clone();
    assert_eq!(page["totalCnt"], 1);
    assert_eq!(page["list"][0]["traitNm"], "Sly");

    let page = app.get(&format!("/search/traits?prjNo={prj_no}&pageSize=2&page=2")).await["data"].clone();
    assert_eq!(page["list"].as_array().unwrap().len(), 1);
    assert_eq!(page["isLast"], true);
}

#[tokio::test]
async fn pool_search_validates_its_query() {
    let app = test_app().await;
    assert_eq!(app.get("/search/abilities").await["code"], "BAD_REQUEST");
    assert_eq!(app.get("/search/abilities?prjNo=1&type=SOME").await["code"], "BAD_REQUEST");
    assert_eq!(app.get("/search/abilities?prjNo=1&pageSize=0").await["code"], "VALIDATION_ERROR");
    let env = app.get("/search/abilities?prjNo=1&type=PROJECT").await;
    assert_eq!(env["code"], "OK");
    assert_eq!(env["data"]["totalCnt"], 0);
}

#[tokio::test]
async fn service_routes() {
    let app = test_app().await;
    let home = app.get("/").await;
    assert_eq!(home["code"], "OK");
    assert_eq!(home["data"]["name"], "worldbook");
    assert_eq!(home["data"]["storage"], "embedded");

    let health = app.get("/health").await;
    assert_eq!(health["data"]["status"], "healthy");
    assert!(health["data"]["timestamp"].as_i64().unwrap() > 0);

    let ready = app.get("/ready").await;
    assert_eq!(ready["code"], "OK");
}

#[tokio::test]
async fn session_header_is_accepted() {
    let app = test_app().await;
    let req = Request::get("/traits")
        .header("X-Session-Id", "abc-123")
        .body(Body::empty())
        .unwrap();
    assert_eq!(app.send(req).await["code"], "OK");
}
