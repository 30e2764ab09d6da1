mod common;

use axum::http::StatusCode;
use axum::{Extension, Router};
use axum_test::TestServer;
use serde_json::{Value, json};
use skyfeed::api::routes::protected_routes;
use skyfeed::domain::entities::Principal;
use sqlx::PgPool;

/// Locations API as the fixed test principal, on a pool with no database behind it.
async fn server() -> (TestServer, common::TestContext) {
    let ctx = common::create_test_state(common::lazy_pool(), "http://127.0.0.1:1").await;
    let app = common::with_principal(Router::new().nest("/api", protected_routes(4096)))
        .with_state(ctx.state.clone());
    (TestServer::new(app).unwrap(), ctx)
}

#[tokio::test]
async fn test_search_rejects_long_query() {
    let (server, _ctx) = server().await;

    let response = server
        .get("/api/locations/search")
        .add_query_param("q", "b".repeat(101))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["details"]["field"], "q");
}

#[tokio::test]
async fn test_search_blank_query_is_empty() {
    let (server, _ctx) = server().await;

    for query in ["", "   "] {
        let response = server
            .get("/api/locations/search")
            .add_query_param("q", query)
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({ "items": [] }));
    }

    let response = server.get("/api/locations/search").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "items": [] }));
}

#[tokio::test]
async fn test_save_rejects_empty_location() {
    let (server, _ctx) = server().await;

    let response = server
        .post("/api/locations/saved")
        .json(&json!({ "location": "" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["message"], "Invalid input");
}

#[tokio::test]
async fn test_save_rejects_overlong_location() {
    let (server, _ctx) = server().await;

    let response = server
        .post("/api/locations/saved")
        .json(&json!({ "location": "x".repeat(121) }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_save_requires_both_coordinates() {
    let (server, _ctx) = server().await;

    let response = server
        .post("/api/locations/saved")
        .json(&json!({ "location": "Boulder, CO", "latitude": 40.015 }))
        .await;

    response.assert_status_bad_request();
    let body = response.json::<Value>();
    assert_eq!(body["error"], "longitude is required");
    assert_eq!(body["details"]["field"], "longitude");
}

#[tokio::test]
async fn test_save_rejects_out_of_range_longitude() {
    let (server, _ctx) = server().await;

    let response = server
        .post("/api/locations/saved")
        .json(&json!({ "location": "Nowhere", "latitude": 10.0, "longitude": 181.0 }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["details"]["field"], "longitude");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_save_list_and_delete_saved(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner").await;
    let other = common::create_test_user(&pool, "other").await;

    let ctx = common::create_test_state(pool, "http://127.0.0.1:1").await;
    let as_user = |user_id: i64, username: &str| {
        let app = Router::new()
            .nest("/api", protected_routes(4096))
            .layer(Extension(Principal {
                user_id,
                username: username.to_string(),
            }))
            .with_state(ctx.state.clone());
        TestServer::new(app).unwrap()
    };
    let as_owner = as_user(owner, "owner");
    let as_other = as_user(other, "other");

    let created = as_owner
        .post("/api/locations/saved")
        .json(&json!({ "location": "Boulder, CO", "latitude": 40.015, "longitude": -105.2705 }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let id = created.json::<Value>()["id"].as_i64().unwrap();

    as_owner
        .post("/api/locations/saved")
        .json(&json!({ "location": "Boulder, CO" }))
        .await
        .assert_status(StatusCode::CONFLICT);

    let listed = as_owner.get("/api/locations/saved").await.json::<Value>();
    assert_eq!(listed["items"][0]["location_text"], "Boulder, CO");

    let found = as_owner
        .get("/api/locations/search")
        .add_query_param("q", "boul")
        .await
        .json::<Value>();
    assert_eq!(found["items"][0]["name"], "Boulder, CO");

    as_other
        .delete(&format!("/api/locations/saved/{id}"))
        .await
        .assert_status_not_found();
    as_owner
        .delete(&format!("/api/locations/saved/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    as_owner
        .delete(&format!("/api/locations/saved/{id}"))
        .await
        .assert_status_not_found();
}
