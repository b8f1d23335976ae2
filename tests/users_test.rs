#![allow(clippy::indexing_slicing)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{get, send, test_app, user_names};
use http::header::CONTENT_TYPE;
use http::{Method, StatusCode};
use serde_json::json;

// Listing

#[tokio::test]
async fn test_list_defaults() {
    let app = test_app();
    let res = get(&app, "/users").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        user_names(&res.body),
        vec!["Alice Johnson", "Bob Smith", "Carol White"]
    );
    assert_eq!(res.body["total"], 3);
    assert_eq!(res.body["page"], 1);
    assert_eq!(res.body["limit"], 20);
    assert_eq!(res.body["totalPages"], 1);
}

#[tokio::test]
async fn test_list_second_page() {
    let app = test_app();
    let res = get(&app, "/users?limit=2&page=2").await;

    assert_eq!(user_names(&res.body), vec!["Carol White"]);
    assert_eq!(res.body["totalPages"], 2);
    assert_eq!(res.body["page"], 2);
}

#[tokio::test]
async fn test_list_role_filter() {
    let app = test_app();
    let res = get(&app, "/users?role=admin").await;

    assert_eq!(user_names(&res.body), vec!["Alice Johnson"]);
    assert_eq!(res.body["total"], 1);
}

#[tokio::test]
async fn test_list_search_any_case() {
    let app = test_app();
    for query in ["bob", "BOB", "bOb"] {
        let res = get(&app, &format!("/users?search={query}")).await;
        assert_eq!(user_names(&res.body), vec!["Bob Smith"], "search={query}");
    }
}

#[tokio::test]
async fn test_list_malformed_numbers_use_defaults() {
    let app = test_app();
    let res = get(&app, "/users?page=abc&limit=xyz").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["page"], 1);
    assert_eq!(res.body["limit"], 20);
}

#[tokio::test]
async fn test_list_repeated_key_keeps_filters() {
    let app = test_app();
    let res = get(&app, "/users?role=admin&limit=1&limit=2").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(user_names(&res.body), vec!["Alice Johnson"]);
    assert_eq!(res.body["total"], 1);
    assert_eq!(res.body["limit"], 1);
}

#[tokio::test]
async fn test_list_unknown_keys_ignored() {
    let app = test_app();
    let res = get(&app, "/users?search=CAROL&sort=desc").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(user_names(&res.body), vec!["Carol White"]);
}

#[tokio::test]
async fn test_list_limit_clamped() {
    let app = test_app();
    let res = get(&app, "/users?limit=1000").await;
    assert_eq!(res.body["limit"], 100);

    let res = get(&app, "/users?limit=0").await;
    assert_eq!(res.body["limit"], 1);
    assert_eq!(res.body["totalPages"], 3);
}

#[tokio::test]
async fn test_list_page_clamped_to_total_pages() {
    let app = test_app();
    let res = get(&app, "/users?page=50").await;

    assert_eq!(res.body["page"], 1);
    assert_eq!(user_names(&res.body).len(), 3);
}

// Get

#[tokio::test]
async fn test_get_user() {
    let app = test_app();
    let res = get(&app, "/users/1").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body,
        json!({"id": 1, "name": "Alice Johnson", "email": "alice@example.com", "role": "admin"})
    );
}

#[tokio::test]
async fn test_get_user_not_found() {
    let app = test_app();
    let res = get(&app, "/users/99").await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["error"], "User with id 99 not found");
}

#[tokio::test]
async fn test_invalid_ids_rejected_before_lookup() {
    let app = test_app();
    for id in ["abc", "0", "-1", "1.5"] {
        let uri = format!("/users/{id}");
        for method in [Method::GET, Method::PUT, Method::DELETE] {
            let res = send(&app, method.clone(), &uri, Some(json!({}))).await;
            assert_eq!(res.status, StatusCode::BAD_REQUEST, "{method} {uri}");
            assert_eq!(res.body["error"], "Invalid user ID");
        }
    }
}

#[tokio::test]
async fn test_invalid_id_wins_over_malformed_body() {
    let app = test_app();
    let request = http::Request::put("/users/abc")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "Invalid user ID");
}

#[tokio::test]
async fn test_undecodable_id_is_json_bad_request() {
    let app = test_app();
    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let res = send(&app, method.clone(), "/users/%FF", None).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{method}");
        assert_eq!(
            res.headers.get(CONTENT_TYPE).map(|v| v.to_str().unwrap()),
            Some("application/json")
        );
        assert_eq!(res.body["error"], "Invalid user ID");
    }
}

#[tokio::test]
async fn test_unsupported_method_is_json_405() {
    let app = test_app();
    for (method, uri) in [
        (Method::PATCH, "/users/1"),
        (Method::DELETE, "/users"),
        (Method::POST, "/health"),
    ] {
        let res = send(&app, method.clone(), uri, None).await;
        assert_eq!(res.status, StatusCode::METHOD_NOT_ALLOWED, "{method} {uri}");
        assert_eq!(res.body["error"], "Method not allowed");
    }
}

#[tokio::test]
async fn test_missing_ids_not_found_for_all_methods() {
    let app = test_app();
    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let res = send(&app, method.clone(), "/users/1234", Some(json!({"name": "X"}))).await;
        assert_eq!(res.status, StatusCode::NOT_FOUND, "{method}");
    }
}

// Create

#[tokio::test]
async fn test_create_then_delete_scenario() {
    let app = test_app();

    let res = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"name": "Dan", "email": "dan@example.com"})),
    )
    .await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(
        res.body,
        json!({"id": 4, "name": "Dan", "email": "dan@example.com", "role": "user"})
    );

    let res = send(&app, Method::DELETE, "/users/2", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["message"], "User Bob Smith deleted successfully");
    assert_eq!(res.body["user"]["id"], 2);
    assert_eq!(res.body["user"]["email"], "bob@example.com");

    let res = get(&app, "/users/2").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = get(&app, "/users").await;
    assert_eq!(
        user_names(&res.body),
        vec!["Alice Johnson", "Carol White", "Dan"]
    );
}

#[tokio::test]
async fn test_create_with_role() {
    let app = test_app();
    let res = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"name": "Eve", "email": "eve@example.com", "role": "admin"})),
    )
    .await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body["role"], "admin");

    let res = get(&app, "/users?role=admin").await;
    assert_eq!(user_names(&res.body), vec!["Alice Johnson", "Eve"]);
}

#[tokio::test]
async fn test_create_requires_name_and_email() {
    let app = test_app();
    let bodies = [
        Some(json!({"email": "x@example.com"})),
        Some(json!({"name": "X"})),
        Some(json!({"name": "", "email": "x@example.com"})),
        Some(json!({"name": "X", "email": null})),
        None,
    ];
    for body in bodies {
        let res = send(&app, Method::POST, "/users", body.clone()).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{body:?}");
        assert_eq!(res.body["error"], "Name and email are required");
    }
}

#[tokio::test]
async fn test_create_malformed_json_is_bad_request() {
    let app = test_app();
    let request = http::Request::post("/users")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{\"name\": "))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_duplicate_email_conflict() {
    let app = test_app();
    let res = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"name": "ALICE JOHNSON", "email": "alice@example.com", "role": "ADMIN"})),
    )
    .await;
    assert_eq!(res.status, StatusCode::CONFLICT);
    assert_eq!(res.body["error"], "A user with this email already exists");
}

#[tokio::test]
async fn test_created_ids_increase_and_are_never_reused() {
    let app = test_app();
    let res = send(&app, Method::DELETE, "/users/3", None).await;
    assert_eq!(res.status, StatusCode::OK);

    let mut last_id = 3;
    for i in 0..3 {
        let res = send(
            &app,
            Method::POST,
            "/users",
            Some(json!({"name": format!("User {i}"), "email": format!("u{i}@example.com")})),
        )
        .await;
        let id = res.body["id"].as_u64().unwrap();
        assert!(id > last_id, "id {id} should exceed {last_id}");
        last_id = id;
    }
    assert_eq!(last_id, 6);
}

// Update

#[tokio::test]
async fn test_update_partial_merge() {
    let app = test_app();
    let res = send(&app, Method::PUT, "/users/2", Some(json!({"role": "admin"}))).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body,
        json!({"id": 2, "name": "Bob Smith", "email": "bob@example.com", "role": "admin"})
    );
    let res = get(&app, "/users/2").await;
    assert_eq!(res.body["role"], "admin");
}

#[tokio::test]
async fn test_update_empty_name_keeps_existing() {
    let app = test_app();
    let res = send(&app, Method::PUT, "/users/1", Some(json!({"name": ""}))).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["name"], "Alice Johnson");
}

#[tokio::test]
async fn test_update_without_body_is_noop() {
    let app = test_app();
    let res = send(&app, Method::PUT, "/users/3", None).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["name"], "Carol White");
}

#[tokio::test]
async fn test_update_email_conflict() {
    let app = test_app();
    let res = send(
        &app,
        Method::PUT,
        "/users/2",
        Some(json!({"email": "alice@example.com"})),
    )
    .await;
    assert_eq!(res.status, StatusCode::CONFLICT);

    // Keeping one's own email is not a conflict
    let res = send(
        &app,
        Method::PUT,
        "/users/2",
        Some(json!({"email": "bob@example.com", "name": "Robert"})),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["name"], "Robert");
}

#[tokio::test]
async fn test_update_changes_email() {
    let app = test_app();
    let res = send(
        &app,
        Method::PUT,
        "/users/3",
        Some(json!({"email": "carol.white@example.com"})),
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);

    // The old address is free again
    let res = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"name": "Carol Two", "email": "carol@example.com"})),
    )
    .await;
    assert_eq!(res.status, StatusCode::CREATED);
}

// Delete

#[tokio::test]
async fn test_delete_twice() {
    let app = test_app();
    let res = send(&app, Method::DELETE, "/users/1", None).await;
    assert_eq!(res.status, StatusCode::OK);

    let res = send(&app, Method::DELETE, "/users/1", None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["error"], "User with id 1 not found");
}

#[tokio::test]
async fn test_apps_do_not_share_state() {
    let first = test_app();
    send(&first, Method::DELETE, "/users/1", None).await;

    let second = test_app();
    let res = get(&second, "/users/1").await;
    assert_eq!(res.status, StatusCode::OK);
}
