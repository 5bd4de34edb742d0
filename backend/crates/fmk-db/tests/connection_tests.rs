mod common;

use common::create_test_draft;

use fmk_db::{ProjectRepository, create_pool};

use googletest::prelude::*;
use tempfile::TempDir;

#[tokio::test]
async fn given_missing_parent_directory_when_creating_pool_then_file_is_created() {
    // Given: A path whose parent does not exist yet
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("fmk.db");

    // When
    let pool = create_pool(&path).await.unwrap();

    // Then
    assert_that!(path.exists(), eq(true));
    pool.close().await;
}

#[tokio::test]
async fn given_saved_project_when_reopening_database_then_project_is_still_there() {
    // Given: A project saved through one pool
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("fmk.db");
    let pool = create_pool(&path).await.unwrap();
    let id = ProjectRepository::new(pool.clone())
        .save(&create_test_draft("Quilt A"))
        .await
        .unwrap();
    pool.close().await;

    // When: Opening the same file again (migrations run a second time)
    let reopened = create_pool(&path).await.unwrap();
    let found = ProjectRepository::new(reopened.clone())
        .find_by_id(id)
        .await
        .unwrap();

    // Then
    assert_that!(found.map(|p| p.project_name), some(eq("Quilt A")));
    reopened.close().await;
}
