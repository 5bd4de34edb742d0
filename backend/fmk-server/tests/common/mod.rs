#![allow(dead_code)]

//! Test infrastructure for fmk-server tests

use fmk_config::ExportConfig;
use fmk_db::create_memory_pool;
use fmk_ipc::Router;

use serde_json::Value;

/// Router over an in-memory database
pub async fn create_test_router() -> Router {
    let pool = create_memory_pool()
        .await
        .expect("Failed to create test database");
    Router::new(pool, ExportConfig::default())
}

/// Split loop output into parsed response lines
pub fn parse_lines(output: &[u8]) -> Vec<Value> {
    String::from_utf8(output.to_vec())
        .expect("Output is not UTF-8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("Line is not JSON"))
        .collect()
}
