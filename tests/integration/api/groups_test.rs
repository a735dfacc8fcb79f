//! Groups API integration tests

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::{assert_error, create_test_group, create_test_server, create_test_user, TestDatabase};

#[tokio::test]
async fn test_list_and_get_groups() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let cats = create_test_group(db.pool(), "Cats").await;
    create_test_group(db.pool(), "Dogs").await;

    let response = server.get("/api/v1/groups/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["slug"], "cats");
    assert_eq!(body[1]["title"], "Dogs");

    let response = server.get(&format!("/api/v1/groups/{}/", cats.id)).await;
    assert_eq!(
        response.json::<Value>(),
        json!({
            "id": cats.id,
            "title": "Cats",
            "slug": "cats",
            "description": "About Cats"
        })
    );

    let response = server.get("/api/v1/groups/999/").await;
    assert_error(&response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_groups_are_read_only() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let user = create_test_user(db.pool(), "admin").await;
    let group = create_test_group(db.pool(), "Cats").await;

    let response = server
        .post("/api/v1/groups/")
        .authorization_bearer(&user.token)
        .json(&json!({ "title": "New", "slug": "new", "description": "d" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);

    let response = server
        .delete(&format!("/api/v1/groups/{}/", group.id))
        .authorization_bearer(&user.token)
        .await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);

    assert_eq!(db.count("post_groups").await, 1);
}
