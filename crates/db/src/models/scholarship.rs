//! Scholarship record.

use campusreg_core::forms;
use campusreg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `scholarships` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Scholarship {
    pub id: DbId,
    pub title: String,
    pub amount: Option<String>,
    pub criteria: Option<String>,
    pub created_at: Timestamp,
}

/// Submitted scholarship fields (create and full-overwrite edit).
#[derive(Debug, Deserialize)]
pub struct ScholarshipInput {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "forms::optional")]
    pub amount: Option<String>,
    #[serde(default, deserialize_with = "forms::optional")]
    pub criteria: Option<String>,
}
