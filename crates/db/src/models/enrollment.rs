//! Enrollment record: a category/gender intake tally for one programme and
//! year, optionally linked to a student.

use campusreg_core::forms;
use campusreg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::breakdown::EnrollmentCount;

/// A row from the `enrollments` table.
///
/// `student_id` is nullable: an enrollment without a linked student is the
/// manual/irregular entry path. Deleting the student nulls the reference but
/// keeps the row.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Enrollment {
    pub id: DbId,
    pub student_id: Option<DbId>,
    pub programme: Option<String>,
    pub year: Option<i64>,
    pub mode: Option<String>,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub counts: EnrollmentCount,
    pub created_at: Timestamp,
}

/// Submitted enrollment fields.
///
/// On create, when `student_id` is set, programme/year are copied from the
/// linked student and `mode` is forced to `"Regular"`, whatever was
/// submitted. Without a link, all three come from the payload.
#[derive(Debug, Deserialize)]
pub struct EnrollmentInput {
    #[serde(default, deserialize_with = "forms::opt_count")]
    pub student_id: Option<DbId>,
    #[serde(default, deserialize_with = "forms::optional")]
    pub programme: Option<String>,
    #[serde(default, deserialize_with = "forms::opt_count")]
    pub year: Option<i64>,
    #[serde(default, deserialize_with = "forms::optional")]
    pub mode: Option<String>,
    #[serde(flatten)]
    pub counts: EnrollmentCount,
}
