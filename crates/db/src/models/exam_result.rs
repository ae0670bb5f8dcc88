//! Examination result record: pass counts per category and gender for one
//! programme.

use campusreg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::breakdown::CategoryGenderCount;

/// A row from the `exam_results` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ExamResult {
    pub id: DbId,
    pub programme: String,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub counts: CategoryGenderCount,
    pub created_at: Timestamp,
}

impl ExamResult {
    /// Sum of the 15 category/gender counters. Always derived, never stored.
    pub fn total(&self) -> i64 {
        self.counts.total()
    }
}

/// Submitted exam result fields (create and full-overwrite edit).
#[derive(Debug, Deserialize)]
pub struct ExamResultInput {
    #[serde(default)]
    pub programme: String,
    #[serde(flatten)]
    pub counts: CategoryGenderCount,
}
