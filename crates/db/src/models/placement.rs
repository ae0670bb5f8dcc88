//! Placement drive record.

use campusreg_core::forms;
use campusreg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `placements` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Placement {
    pub id: DbId,
    pub company: String,
    pub role: Option<String>,
    pub date: Option<String>,
    pub details: Option<String>,
    pub created_at: Timestamp,
}

/// Submitted placement fields (create and full-overwrite edit).
#[derive(Debug, Deserialize)]
pub struct PlacementInput {
    #[serde(default)]
    pub company: String,
    #[serde(default, deserialize_with = "forms::optional")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "forms::optional")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "forms::optional")]
    pub details: Option<String>,
}
