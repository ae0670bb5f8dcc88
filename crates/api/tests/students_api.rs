mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use sqlx::SqlitePool;

use common::{body_json, build_test_app, send};

#[sqlx::test(migrations = "../db/migrations")]
async fn create_fetch_update_delete_student(pool: SqlitePool) {
    let app = build_test_app(pool);

    let response = send(
        app.clone(),
        Method::POST,
        "/api/v1/students",
        Some(json!({
            "roll_no": "CS-001",
            "name": "Asha Verma",
            "email": "asha@example.edu",
            "year": "2"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["data"]["roll_no"], "CS-001");
    // "2" coerces to a number at the boundary.
    assert_eq!(body["data"]["year"], 2);
    assert_eq!(body["data"]["profile_pic"], "default.png");
    let id = body["data"]["id"].as_i64().unwrap();

    let response = send(
        app.clone(),
        Method::GET,
        &format!("/api/v1/students/{id}"),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "Asha Verma");

    // Full-overwrite edit: omitted fields are cleared.
    let response = send(
        app.clone(),
        Method::PUT,
        &format!("/api/v1/students/{id}"),
        Some(json!({ "roll_no": "CS-001", "name": "Asha V." })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "Asha V.");
    assert_eq!(body["data"]["email"], serde_json::Value::Null);
    assert_eq!(body["data"]["year"], serde_json::Value::Null);

    let response = send(
        app.clone(),
        Method::DELETE,
        &format!("/api/v1/students/{id}"),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(app, Method::GET, &format!("/api/v1/students/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_required_field_rejected_and_store_unchanged(pool: SqlitePool) {
    let app = build_test_app(pool);

    let response = send(
        app.clone(),
        Method::POST,
        "/api/v1/students",
        Some(json!({ "roll_no": "CS-001", "name": "   " })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let response = send(app, Method::GET, "/api/v1/students", None).await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_roll_no_conflicts(pool: SqlitePool) {
    let app = build_test_app(pool);

    let response = send(
        app.clone(),
        Method::POST,
        "/api/v1/students",
        Some(json!({ "roll_no": "CS-001", "name": "Asha Verma" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(
        app,
        Method::POST,
        "/api/v1/students",
        Some(json!({ "roll_no": "CS-001", "name": "Someone Else" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_filters_by_search_term(pool: SqlitePool) {
    let app = build_test_app(pool);

    for (roll_no, name) in [("CS-001", "Asha Verma"), ("EE-104", "Bimal Rao")] {
        let response = send(
            app.clone(),
            Method::POST,
            "/api/v1/students",
            Some(json!({ "roll_no": roll_no, "name": name })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = send(app.clone(), Method::GET, "/api/v1/students?q=ASHA", None).await;
    let body = body_json(response).await;
    let hits = body["data"].as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["roll_no"], "CS-001");

    let response = send(app, Method::GET, "/api/v1/students", None).await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}
