//! Enrollment creation.
//!
//! Everything except create comes from the generic CRUD layer. Creation is
//! special: when the payload links a student, the programme and year are
//! copied from that student's record and the mode is forced to `"Regular"`,
//! whatever was submitted. The link is fixed at creation; later edits never
//! touch it.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use campusreg_core::error::CoreError;
use campusreg_db::models::enrollment::EnrollmentInput;
use campusreg_db::repositories::{EnrollmentRepo, RecordRepo, StudentRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /enrollments
pub async fn create(
    State(state): State<AppState>,
    Json(mut input): Json<EnrollmentInput>,
) -> AppResult<impl IntoResponse> {
    if let Some(student_id) = input.student_id {
        let student = StudentRepo::find(&state.pool, student_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: StudentRepo::ENTITY,
                id: student_id,
            })?;
        input.programme = student.programme.clone();
        input.year = student.year;
        input.mode = Some("Regular".to_string());
    }

    let row = EnrollmentRepo::insert(&state.pool, &input).await?;
    tracing::info!(
        enrollment_id = row.id,
        student_id = row.student_id,
        "Enrollment created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}
