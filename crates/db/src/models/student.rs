//! Student master record.

use campusreg_core::forms;
use campusreg_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `students` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Student {
    pub id: DbId,
    pub roll_no: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub department: Option<String>,
    pub programme: Option<String>,
    pub year: Option<i64>,
    pub profile_pic: String,
    pub created_at: Timestamp,
}

/// Submitted student fields.
///
/// Used for create and edit alike; an edit overwrites every editable field
/// with the submitted values. Required fields (`roll_no`, `name`) default to
/// empty when absent so validation can report them instead of a decode error.
#[derive(Debug, Deserialize)]
pub struct StudentInput {
    #[serde(default)]
    pub roll_no: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "forms::optional")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "forms::optional")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "forms::optional")]
    pub dob: Option<String>,
    #[serde(default, deserialize_with = "forms::optional")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "forms::optional")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "forms::optional")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "forms::optional")]
    pub programme: Option<String>,
    #[serde(default, deserialize_with = "forms::opt_count")]
    pub year: Option<i64>,
    #[serde(default, deserialize_with = "forms::optional")]
    pub profile_pic: Option<String>,
}
