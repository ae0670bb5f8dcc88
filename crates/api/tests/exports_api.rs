mod common;

use axum::http::{header, Method, StatusCode};
use serde_json::json;
use sqlx::SqlitePool;

use common::{body_bytes, body_json, build_test_app, send};

#[sqlx::test(migrations = "../db/migrations")]
async fn student_detail_sheet_downloads_as_pdf(pool: SqlitePool) {
    let app = build_test_app(pool);

    let response = send(
        app.clone(),
        Method::POST,
        "/api/v1/students",
        Some(json!({ "roll_no": "CS-001", "name": "Asha Verma" })),
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = send(
        app,
        Method::GET,
        &format!("/api/v1/students/{id}/pdf"),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        &format!("attachment; filename=student_{id}.pdf")
    );
    let bytes = body_bytes(response).await;
    assert!(bytes.starts_with(b"%PDF"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_record_yields_404_not_a_pdf(pool: SqlitePool) {
    let app = build_test_app(pool);

    let response = send(app, Method::GET, "/api/v1/hostels/42/pdf", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn bulk_exam_results_export(pool: SqlitePool) {
    let app = build_test_app(pool);

    for programme in ["BSc Zoology", "BA English"] {
        let response = send(
            app.clone(),
            Method::POST,
            "/api/v1/exam-results",
            Some(json!({ "programme": programme, "general_male": 5, "sc_female": 2 })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = send(app, Method::GET, "/api/v1/exam-results/pdf", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=exam_results.pdf"
    );
    let bytes = body_bytes(response).await;
    assert!(bytes.starts_with(b"%PDF"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn department_sheet_includes_programme_table(pool: SqlitePool) {
    let app = build_test_app(pool);

    let response = send(
        app.clone(),
        Method::POST,
        "/api/v1/departments",
        Some(json!({ "name": "Physics", "code": "PHY" })),
    )
    .await;
    let dept_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = send(
        app.clone(),
        Method::POST,
        &format!("/api/v1/departments/{dept_id}/programmes"),
        Some(json!({ "programme": "BSc Physics", "seats_general": 30 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(
        app,
        Method::GET,
        &format!("/api/v1/departments/{dept_id}/pdf"),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = body_bytes(response).await;
    assert!(bytes.starts_with(b"%PDF"));
}
