mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use sqlx::SqlitePool;

use common::{body_json, build_test_app, send};

#[sqlx::test(migrations = "../db/migrations")]
async fn dashboard_limits_recents_and_groups_years(pool: SqlitePool) {
    let app = build_test_app(pool);

    for i in 0..6 {
        let response = send(
            app.clone(),
            Method::POST,
            "/api/v1/students",
            Some(json!({ "roll_no": format!("CS-{i:03}"), "name": format!("Student {i}") })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // Two years plus one enrollment with no year at all.
    for (year, count) in [
        (Some(2023), 3),
        (Some(2022), 2),
        (Some(2023), 2),
        (None, 9),
    ] {
        let mut payload = json!({ "general_male": count });
        if let Some(year) = year {
            payload["year"] = json!(year);
        }
        let response = send(app.clone(), Method::POST, "/api/v1/enrollments", Some(payload)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = send(app, Method::GET, "/api/v1/dashboard", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["data"]["recent_students"].as_array().unwrap().len(), 5);
    assert_eq!(
        body["data"]["recent_enrollments"].as_array().unwrap().len(),
        4
    );

    // Ascending by year; the year-less enrollment is absent.
    let years = body["data"]["enrollment_years"].as_array().unwrap();
    assert_eq!(years.len(), 2);
    assert_eq!(years[0]["year"], 2022);
    assert_eq!(years[0]["total"], 2);
    assert_eq!(years[1]["year"], 2023);
    assert_eq!(years[1]["total"], 5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn dashboard_is_empty_on_fresh_database(pool: SqlitePool) {
    let app = build_test_app(pool);

    let response = send(app, Method::GET, "/api/v1/dashboard", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["recent_students"].as_array().unwrap().len(), 0);
    assert_eq!(body["data"]["enrollment_years"].as_array().unwrap().len(), 0);
}
