//! Dashboard overview: the most recent records plus the yearly enrollment
//! totals for the intake chart.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use campusreg_core::tally::{yearly_totals, YearlyTotal};
use campusreg_db::models::enrollment::Enrollment;
use campusreg_db::models::student::Student;
use campusreg_db::repositories::{EnrollmentRepo, RecordRepo, StudentRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

const RECENT_LIMIT: i64 = 5;

#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub recent_students: Vec<Student>,
    pub recent_enrollments: Vec<Enrollment>,
    /// Enrollment totals grouped by year, ascending. Enrollments without a
    /// year are left out.
    pub enrollment_years: Vec<YearlyTotal>,
}

/// GET /dashboard
pub async fn overview(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let recent_students = StudentRepo::list_recent(&state.pool, RECENT_LIMIT).await?;
    let recent_enrollments = EnrollmentRepo::list_recent(&state.pool, RECENT_LIMIT).await?;

    let all = EnrollmentRepo::list(&state.pool, None).await?;
    let enrollment_years = yearly_totals(
        all.iter()
            .filter_map(|e| e.year.map(|year| (year, e.counts.total()))),
    );

    Ok(Json(DataResponse {
        data: DashboardData {
            recent_students,
            recent_enrollments,
            enrollment_years,
        },
    }))
}
