mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use sqlx::SqlitePool;

use common::{body_json, build_test_app, send};

#[sqlx::test(migrations = "../db/migrations")]
async fn linked_enrollment_copies_student_fields(pool: SqlitePool) {
    let app = build_test_app(pool);

    let response = send(
        app.clone(),
        Method::POST,
        "/api/v1/students",
        Some(json!({
            "roll_no": "CS-001",
            "name": "Asha Verma",
            "programme": "BSc Computer Science",
            "year": 2024
        })),
    )
    .await;
    let student_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    // Submitted programme/year/mode are overridden by the student link.
    let response = send(
        app,
        Method::POST,
        "/api/v1/enrollments",
        Some(json!({
            "student_id": student_id,
            "programme": "Something Else",
            "year": 1999,
            "mode": "Private",
            "general_female": 1
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["data"]["student_id"], student_id);
    assert_eq!(body["data"]["programme"], "BSc Computer Science");
    assert_eq!(body["data"]["year"], 2024);
    assert_eq!(body["data"]["mode"], "Regular");
    assert_eq!(body["data"]["general_female"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn linking_unknown_student_is_rejected(pool: SqlitePool) {
    let app = build_test_app(pool);

    let response = send(
        app.clone(),
        Method::POST,
        "/api/v1/enrollments",
        Some(json!({ "student_id": 42, "general_male": 1 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(app, Method::GET, "/api/v1/enrollments", None).await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unlinked_enrollment_keeps_submitted_fields(pool: SqlitePool) {
    let app = build_test_app(pool);

    let response = send(
        app,
        Method::POST,
        "/api/v1/enrollments",
        Some(json!({
            "programme": "BA History",
            "year": 2023,
            "mode": "Distance",
            "sc_female": "3"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["data"]["student_id"], serde_json::Value::Null);
    assert_eq!(body["data"]["programme"], "BA History");
    assert_eq!(body["data"]["mode"], "Distance");
    assert_eq!(body["data"]["sc_female"], 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_student_keeps_enrollment_unlinked(pool: SqlitePool) {
    let app = build_test_app(pool);

    let response = send(
        app.clone(),
        Method::POST,
        "/api/v1/students",
        Some(json!({ "roll_no": "CS-001", "name": "Asha Verma", "programme": "BSc CS" })),
    )
    .await;
    let student_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = send(
        app.clone(),
        Method::POST,
        "/api/v1/enrollments",
        Some(json!({ "student_id": student_id, "general_male": 2 })),
    )
    .await;
    let enrollment_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = send(
        app.clone(),
        Method::DELETE,
        &format!("/api/v1/students/{student_id}"),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(
        app,
        Method::GET,
        &format!("/api/v1/enrollments/{enrollment_id}"),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["student_id"], serde_json::Value::Null);
    assert_eq!(body["data"]["programme"], "BSc CS");
}
