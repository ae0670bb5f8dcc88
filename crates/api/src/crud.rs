//! Generic CRUD handlers instantiated per entity.
//!
//! Every plain record type gets the same five routes from [`crud_routes`];
//! entities with extra behaviour (enrollment student linking, nested
//! programmes) override the relevant handler in their route module and keep
//! the rest.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use campusreg_core::error::CoreError;
use campusreg_core::types::DbId;
use campusreg_db::repositories::RecordRepo;

use crate::error::AppResult;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET / -- list rows, optionally filtered by `?q=`.
pub async fn list<R: RecordRepo>(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let rows = R::list(&state.pool, params.q.as_deref()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// POST / -- validate and create.
pub async fn create<R: RecordRepo>(
    State(state): State<AppState>,
    Json(input): Json<R::Input>,
) -> AppResult<impl IntoResponse> {
    R::validate(&input).map_err(CoreError::Validation)?;
    let row = R::insert(&state.pool, &input).await?;
    tracing::info!(entity = R::ENTITY, "Record created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// GET /{id} -- fetch one row.
pub async fn fetch<R: RecordRepo>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = R::find(&state.pool, id).await?.ok_or(CoreError::NotFound {
        entity: R::ENTITY,
        id,
    })?;
    Ok(Json(DataResponse { data: row }))
}

/// PUT /{id} -- validate and overwrite every editable field.
pub async fn update<R: RecordRepo>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<R::Input>,
) -> AppResult<impl IntoResponse> {
    R::validate(&input).map_err(CoreError::Validation)?;
    let row = R::replace(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: R::ENTITY,
            id,
        })?;
    Ok(Json(DataResponse { data: row }))
}

/// DELETE /{id} -- delete, 204 on success.
pub async fn remove<R: RecordRepo>(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !R::remove(&state.pool, id).await? {
        return Err(CoreError::NotFound {
            entity: R::ENTITY,
            id,
        }
        .into());
    }
    tracing::info!(entity = R::ENTITY, id, "Record deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// The standard route set for one record type:
///
/// ```text
/// GET    /      -> list (?q=)
/// POST   /      -> create
/// GET    /{id}  -> fetch
/// PUT    /{id}  -> update
/// DELETE /{id}  -> remove
/// ```
pub fn crud_routes<R>() -> Router<AppState>
where
    R: RecordRepo + 'static,
{
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route(
            "/{id}",
            get(fetch::<R>).put(update::<R>).delete(remove::<R>),
        )
}
