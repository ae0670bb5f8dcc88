//! Staff roster summary.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use campusreg_db::repositories::StaffRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /staff/summary -- roster-wide sanctioned vs actual strength totals.
pub async fn summary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let summary = StaffRepo::summary(&state.pool).await?;
    Ok(Json(DataResponse { data: summary }))
}
