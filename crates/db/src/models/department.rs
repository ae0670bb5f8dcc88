//! Department record. Owns programmes; deletion cascades to them.

use campusreg_core::forms;
use campusreg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `departments` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Department {
    pub id: DbId,
    pub name: String,
    pub code: Option<String>,
    pub hod: Option<String>,
    pub created_at: Timestamp,
}

/// Submitted department fields (create and full-overwrite edit).
#[derive(Debug, Deserialize)]
pub struct DepartmentInput {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "forms::optional")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "forms::optional")]
    pub hod: Option<String>,
}
