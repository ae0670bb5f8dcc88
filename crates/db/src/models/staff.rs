//! Staff roster record with sanctioned vs actual category/gender strength.

use campusreg_core::forms;
use campusreg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::breakdown::CategoryGenderCount;

/// A row from the `staff` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Staff {
    pub id: DbId,
    pub name: String,
    pub staff_type: Option<String>,
    pub group: Option<String>,
    pub sanctioned_strength: i64,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub strength: CategoryGenderCount,
    pub created_at: Timestamp,
}

impl Staff {
    /// Actual strength: sum of the 15 category/gender counters. Always
    /// derived, never stored.
    pub fn total_strength(&self) -> i64 {
        self.strength.total()
    }
}

/// Submitted staff fields (create and full-overwrite edit).
#[derive(Debug, Deserialize)]
pub struct StaffInput {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "forms::optional")]
    pub staff_type: Option<String>,
    #[serde(default, deserialize_with = "forms::optional")]
    pub group: Option<String>,
    #[serde(default, deserialize_with = "forms::count")]
    pub sanctioned_strength: i64,
    #[serde(flatten)]
    pub strength: CategoryGenderCount,
}

/// Roster-wide totals for the staff summary endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StaffSummary {
    pub sanctioned_total: i64,
    pub strength_total: i64,
}
