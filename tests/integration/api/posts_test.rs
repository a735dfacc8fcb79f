//! Posts API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{
    assert_error, assert_validation_error, create_test_group, create_test_post,
    create_test_server, create_test_user, TestDatabase,
};

fn texts(posts: &Value) -> Vec<&str> {
    posts
        .as_array()
        .expect("expected an array of posts")
        .iter()
        .map(|post| post["text"].as_str().unwrap_or_default())
        .collect()
}

#[tokio::test]
async fn test_list_posts_anonymous() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let user = create_test_user(db.pool(), "writer").await;
    create_test_post(db.pool(), user.id, "first").await;
    create_test_post(db.pool(), user.id, "second").await;

    let response = server.get("/api/v1/posts/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(texts(&body), ["first", "second"]);
    assert_eq!(body[0]["author"], "writer");
    assert_eq!(body[0]["group"], Value::Null);
    assert_eq!(body[0]["image"], Value::Null);
    assert!(body[0]["pub_date"].is_string());
}

#[tokio::test]
async fn test_create_post_requires_auth() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);

    let response = server
        .post("/api/v1/posts/")
        .json(&json!({ "text": "hello" }))
        .await;

    assert_error(&response, StatusCode::UNAUTHORIZED);
    assert_eq!(db.count("posts").await, 0);
}

#[tokio::test]
async fn test_create_post_author_is_requester() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let user = create_test_user(db.pool(), "writer").await;
    create_test_user(db.pool(), "someone").await;

    let response = server
        .post("/api/v1/posts/")
        .authorization_bearer(&user.token)
        .json(&json!({
            "text": "  hello  ",
            "author": "someone",
            "pub_date": "2000-01-01T00:00:00Z"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["author"], "writer");
    assert_eq!(body["text"], "hello");
    assert_ne!(body["pub_date"], "2000-01-01T00:00:00Z");
}

#[tokio::test]
async fn test_create_post_validation() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let user = create_test_user(db.pool(), "writer").await;

    let response = server
        .post("/api/v1/posts/")
        .authorization_bearer(&user.token)
        .json(&json!({ "text": "   " }))
        .await;
    assert_validation_error(&response, "text", "This field may not be blank.");

    let response = server
        .post("/api/v1/posts/")
        .authorization_bearer(&user.token)
        .json(&json!({ "text": "hi", "group": 42 }))
        .await;
    assert_validation_error(&response, "group", "Invalid pk \"42\" - object does not exist.");

    assert_eq!(db.count("posts").await, 0);
}

#[tokio::test]
async fn test_create_post_in_group_with_image() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let user = create_test_user(db.pool(), "writer").await;
    let group = create_test_group(db.pool(), "Cats").await;

    let response = server
        .post("/api/v1/posts/")
        .authorization_bearer(&user.token)
        .json(&json!({ "text": "meow", "group": group.id, "image": "posts/cat.png" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["group"], group.id);
    assert_eq!(body["image"], "posts/cat.png");
}

#[tokio::test]
async fn test_get_post() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let user = create_test_user(db.pool(), "writer").await;
    let post = create_test_post(db.pool(), user.id, "readable").await;

    let response = server.get(&format!("/api/v1/posts/{}/", post.id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["text"], "readable");

    let response = server.get(&format!("/api/v1/posts/{}/", post.id + 100)).await;
    assert_error(&response, StatusCode::NOT_FOUND);

    let response = server.get("/api/v1/posts/abc/").await;
    assert_error(&response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_post_by_author() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let user = create_test_user(db.pool(), "writer").await;
    let group = create_test_group(db.pool(), "Dogs").await;
    let post = create_test_post(db.pool(), user.id, "draft").await;
    let url = format!("/api/v1/posts/{}/", post.id);

    let response = server
        .patch(&url)
        .authorization_bearer(&user.token)
        .json(&json!({ "group": group.id }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["text"], "draft");
    assert_eq!(body["group"], group.id);

    let response = server
        .patch(&url)
        .authorization_bearer(&user.token)
        .json(&json!({ "text": "final", "group": null }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["text"], "final");
    assert_eq!(body["group"], Value::Null);
}

#[tokio::test]
async fn test_put_post_requires_text() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let user = create_test_user(db.pool(), "writer").await;
    let post = create_test_post(db.pool(), user.id, "draft").await;
    let url = format!("/api/v1/posts/{}/", post.id);

    let response = server
        .put(&url)
        .authorization_bearer(&user.token)
        .json(&json!({ "image": "x.png" }))
        .await;
    assert_validation_error(&response, "text", "This field is required.");

    let response = server
        .put(&url)
        .authorization_bearer(&user.token)
        .json(&json!({ "text": "replaced" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["text"], "replaced");
}

#[tokio::test]
async fn test_update_post_permissions() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let author = create_test_user(db.pool(), "author").await;
    let stranger = create_test_user(db.pool(), "stranger").await;
    let post = create_test_post(db.pool(), author.id, "mine").await;
    let url = format!("/api/v1/posts/{}/", post.id);

    let response = server.patch(&url).json(&json!({ "text": "x" })).await;
    assert_error(&response, StatusCode::UNAUTHORIZED);

    let response = server
        .patch(&url)
        .authorization_bearer(&stranger.token)
        .json(&json!({ "text": "hijacked" }))
        .await;
    let body = assert_error(&response, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "You do not have permission to perform this action.");

    // permission is checked before the body
    let response = server
        .patch(&url)
        .authorization_bearer(&stranger.token)
        .json(&json!({ "text": "" }))
        .await;
    assert_error(&response, StatusCode::FORBIDDEN);

    let response = server
        .patch(&format!("/api/v1/posts/{}/", post.id + 1))
        .authorization_bearer(&stranger.token)
        .json(&json!({ "text": "x" }))
        .await;
    assert_error(&response, StatusCode::NOT_FOUND);

    let response = server.get(&url).await;
    assert_eq!(response.json::<Value>()["text"], "mine");
}

#[tokio::test]
async fn test_delete_post() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let author = create_test_user(db.pool(), "author").await;
    let stranger = create_test_user(db.pool(), "stranger").await;
    let post = create_test_post(db.pool(), author.id, "short lived").await;
    let url = format!("/api/v1/posts/{}/", post.id);

    let response = server.delete(&url).authorization_bearer(&stranger.token).await;
    assert_error(&response, StatusCode::FORBIDDEN);

    let response = server.delete(&url).authorization_bearer(&author.token).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let response = server.get(&url).await;
    assert_error(&response, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_posts_pagination() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let user = create_test_user(db.pool(), "writer").await;
    for text in ["p1", "p2", "p3", "p4", "p5"] {
        create_test_post(db.pool(), user.id, text).await;
    }

    let response = server.get("/api/v1/posts/").add_query_param("limit", 2).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["count"], 5);
    assert_eq!(texts(&body["results"]), ["p1", "p2"]);
    assert_eq!(body["previous"], Value::Null);
    let next = body["next"].as_str().unwrap();
    assert!(next.ends_with("/api/v1/posts/?limit=2&offset=2"), "next: {next}");

    let response = server
        .get("/api/v1/posts/")
        .add_query_param("limit", 2)
        .add_query_param("offset", 4)
        .await;
    let body: Value = response.json();
    assert_eq!(texts(&body["results"]), ["p5"]);
    assert_eq!(body["next"], Value::Null);
    let previous = body["previous"].as_str().unwrap();
    assert!(previous.ends_with("/api/v1/posts/?limit=2&offset=2"), "previous: {previous}");

    let response = server
        .get("/api/v1/posts/")
        .add_query_param("limit", 2)
        .add_query_param("offset", 1)
        .await;
    let body: Value = response.json();
    assert_eq!(texts(&body["results"]), ["p2", "p3"]);
    let previous = body["previous"].as_str().unwrap();
    assert!(previous.ends_with("/api/v1/posts/?limit=2"), "previous: {previous}");
}

#[tokio::test]
async fn test_invalid_limit_returns_plain_list() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let user = create_test_user(db.pool(), "writer").await;
    create_test_post(db.pool(), user.id, "only").await;

    for limit in ["abc", "0", "-1"] {
        let response = server.get("/api/v1/posts/").add_query_param("limit", limit).await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(texts(&response.json::<Value>()), ["only"]);
    }
}

#[tokio::test]
async fn test_posts_follow_pub_date_order() {
    use chrono::{TimeZone, Utc};

    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let user = create_test_user(db.pool(), "writer").await;
    for (text, day) in [("march", 3), ("january", 1), ("april", 4), ("february", 2)] {
        let post = create_test_post(db.pool(), user.id, text).await;
        sqlx::query("UPDATE posts SET pub_date = ? WHERE id = ?")
            .bind(Utc.with_ymd_and_hms(2021, day, 1, 0, 0, 0).unwrap())
            .bind(post.id)
            .execute(db.pool())
            .await
            .expect("Failed to backdate post");
    }

    let response = server.get("/api/v1/posts/").await;
    assert_eq!(
        texts(&response.json::<Value>()),
        ["january", "february", "march", "april"]
    );

    let response = server
        .get("/api/v1/posts/")
        .add_query_param("limit", 2)
        .add_query_param("offset", 1)
        .await;
    let body: Value = response.json();
    assert_eq!(body["count"], 4);
    assert_eq!(texts(&body["results"]), ["february", "march"]);
}

#[tokio::test]
async fn test_huge_limit_is_single_page() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let user = create_test_user(db.pool(), "writer").await;
    for text in ["p1", "p2", "p3"] {
        create_test_post(db.pool(), user.id, text).await;
    }

    let response = server
        .get("/api/v1/posts/?limit=9223372036854775807&offset=1")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["count"], 3);
    assert_eq!(texts(&body["results"]), ["p2", "p3"]);
    assert_eq!(body["next"], Value::Null);
    assert!(body["previous"].is_string());
}

#[tokio::test]
async fn test_percent_encoded_limit_paginates() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db);
    let user = create_test_user(db.pool(), "writer").await;
    for text in ["p1", "p2"] {
        create_test_post(db.pool(), user.id, text).await;
    }

    let response = server.get("/api/v1/posts/?limit=%31").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["count"], 2);
    assert_eq!(texts(&body["results"]), ["p1"]);
    let next = body["next"].as_str().unwrap();
    assert!(next.ends_with("/api/v1/posts/?limit=1&offset=1"), "next: {next}");
}
