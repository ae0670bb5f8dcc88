//! Programme record, owned by a department.
//!
//! `seats_total` is never persisted; it is recomputed from the seat matrix
//! wherever it is shown.

use campusreg_core::forms;
use campusreg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::breakdown::SeatMatrix;

/// A row from the `programmes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Programme {
    pub id: DbId,
    pub department_id: DbId,
    pub programme: String,
    pub level: Option<String>,
    pub year_of_start: Option<String>,
    pub admission_criteria: Option<String>,
    pub duration_years: Option<i64>,
    pub duration_months: Option<i64>,
    pub exam_system: Option<String>,
    pub approved_by: Option<String>,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub seats: SeatMatrix,
    pub created_at: Timestamp,
}

/// Submitted programme fields (create and full-overwrite edit). The owning
/// department comes from the URL, not the payload.
#[derive(Debug, Deserialize)]
pub struct ProgrammeInput {
    #[serde(default)]
    pub programme: String,
    #[serde(default, deserialize_with = "forms::optional")]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "forms::optional")]
    pub year_of_start: Option<String>,
    #[serde(default, deserialize_with = "forms::optional")]
    pub admission_criteria: Option<String>,
    #[serde(default, deserialize_with = "forms::opt_count")]
    pub duration_years: Option<i64>,
    #[serde(default, deserialize_with = "forms::opt_count")]
    pub duration_months: Option<i64>,
    #[serde(default, deserialize_with = "forms::optional")]
    pub exam_system: Option<String>,
    #[serde(default, deserialize_with = "forms::optional")]
    pub approved_by: Option<String>,
    #[serde(flatten)]
    pub seats: SeatMatrix,
}
