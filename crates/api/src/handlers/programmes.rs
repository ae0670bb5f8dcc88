//! Programme handlers.
//!
//! Programmes live under their owning department for listing and creation
//! (`/departments/{id}/programmes`), and are addressed directly for
//! everything else (`/programmes/{id}`).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use campusreg_core::error::CoreError;
use campusreg_core::types::DbId;
use campusreg_db::models::programme::ProgrammeInput;
use campusreg_db::repositories::{DepartmentRepo, ProgrammeRepo, RecordRepo};

use crate::error::AppResult;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /departments/{id}/programmes
pub async fn list_by_department(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    DepartmentRepo::find(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: DepartmentRepo::ENTITY,
            id,
        })?;

    let rows = ProgrammeRepo::list_by_department(&state.pool, id, params.q.as_deref()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// POST /departments/{id}/programmes
pub async fn create(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ProgrammeInput>,
) -> AppResult<impl IntoResponse> {
    ProgrammeRepo::validate(&input).map_err(CoreError::Validation)?;
    DepartmentRepo::find(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: DepartmentRepo::ENTITY,
            id,
        })?;

    let row = ProgrammeRepo::insert(&state.pool, id, &input).await?;
    tracing::info!(programme_id = row.id, department_id = id, "Programme created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// GET /programmes/{id}
pub async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = ProgrammeRepo::find(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: ProgrammeRepo::ENTITY,
            id,
        })?;
    Ok(Json(DataResponse { data: row }))
}

/// PUT /programmes/{id} -- the owning department never changes.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ProgrammeInput>,
) -> AppResult<impl IntoResponse> {
    ProgrammeRepo::validate(&input).map_err(CoreError::Validation)?;
    let row = ProgrammeRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: ProgrammeRepo::ENTITY,
            id,
        })?;
    Ok(Json(DataResponse { data: row }))
}

/// DELETE /programmes/{id}
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ProgrammeRepo::remove(&state.pool, id).await? {
        return Err(CoreError::NotFound {
            entity: ProgrammeRepo::ENTITY,
            id,
        }
        .into());
    }
    Ok(StatusCode::NO_CONTENT)
}
