mod common;

use axum::http::{Method, StatusCode};
use sqlx::SqlitePool;

use common::{body_json, build_test_app, send};

#[sqlx::test(migrations = "../db/migrations")]
async fn health_reports_ok_with_reachable_db(pool: SqlitePool) {
    let app = build_test_app(pool);

    let response = send(app, Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db_healthy"], true);
}
