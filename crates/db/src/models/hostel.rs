//! Hostel record.
//!
//! `warden` is a declared nullable column like any other; there is no
//! schema-drift probing.

use campusreg_core::forms;
use campusreg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `hostels` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Hostel {
    pub id: DbId,
    pub name: String,
    pub warden: Option<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub capacity: i64,
    pub students_residing: i64,
    pub created_at: Timestamp,
}

/// Submitted hostel fields (create and full-overwrite edit).
#[derive(Debug, Deserialize)]
pub struct HostelInput {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "forms::optional")]
    pub warden: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "forms::optional")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "forms::count")]
    pub capacity: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub students_residing: i64,
}
