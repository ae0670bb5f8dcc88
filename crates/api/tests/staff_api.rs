mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use sqlx::SqlitePool;

use common::{body_json, build_test_app, send};

#[sqlx::test(migrations = "../db/migrations")]
async fn summary_derives_roster_totals(pool: SqlitePool) {
    let app = build_test_app(pool);

    let response = send(
        app.clone(),
        Method::POST,
        "/api/v1/staff",
        Some(json!({
            "name": "Teaching",
            "group": "A",
            "sanctioned_strength": 40,
            "general_male": 12,
            "general_female": "10",
            "obc_female": 3
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["data"]["group"], "A");
    assert_eq!(body["data"]["general_female"], 10);

    let response = send(
        app.clone(),
        Method::POST,
        "/api/v1/staff",
        Some(json!({ "name": "Non-Teaching", "sanctioned_strength": 15, "sc_male": 4 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(app, Method::GET, "/api/v1/staff/summary", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["sanctioned_total"], 55);
    assert_eq!(body["data"]["strength_total"], 29);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_name_is_rejected(pool: SqlitePool) {
    let app = build_test_app(pool);

    let response = send(
        app,
        Method::POST,
        "/api/v1/staff",
        Some(json!({ "sanctioned_strength": 10 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}
