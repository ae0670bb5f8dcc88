//! NSS (National Service Scheme) activity enrollment record.

use campusreg_core::forms;
use campusreg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `nss_enrollments` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct NssEnrollment {
    pub id: DbId,
    pub activity: String,
    pub date: Option<String>,
    pub male: i64,
    pub female: i64,
    pub remarks: Option<String>,
    pub created_at: Timestamp,
}

impl NssEnrollment {
    /// Total participants, derived from the two gender counters.
    pub fn total(&self) -> i64 {
        self.male + self.female
    }
}

/// Submitted NSS fields (create and full-overwrite edit).
#[derive(Debug, Deserialize)]
pub struct NssEnrollmentInput {
    #[serde(default)]
    pub activity: String,
    #[serde(default, deserialize_with = "forms::optional")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "forms::count")]
    pub male: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub female: i64,
    #[serde(default, deserialize_with = "forms::optional")]
    pub remarks: Option<String>,
}
