#![allow(dead_code)]

use fmk_config::ExportConfig;
use fmk_db::create_memory_pool;
use fmk_ipc::Router;

use serde_json::Value;

/// Router over a fresh in-memory database
pub async fn create_test_router() -> Router {
    let pool = create_memory_pool()
        .await
        .expect("Failed to create test pool");
    Router::new(pool, ExportConfig::default())
}

/// Send one raw request line and parse the response line
pub async fn call(router: &Router, request: Value) -> Value {
    let line = router.handle_raw(&request.to_string()).await;
    serde_json::from_str(&line).expect("Response is not valid JSON")
}

/// Save a project and return its id
pub async fn save_project(router: &Router, name: &str, started: &str) -> i64 {
    let response = call(
        router,
        serde_json::json!({
            "operation": "saveRow",
            "payload": { "dateStarted": started, "projectName": name }
        }),
    )
    .await;
    response["id"].as_i64().expect("saveRow returned no id")
}

/// Ids of a list response, in order
pub fn ids(rows: &Value) -> Vec<i64> {
    rows.as_array()
        .expect("Expected a JSON array")
        .iter()
        .filter_map(|row| row["id"].as_i64())
        .collect()
}
