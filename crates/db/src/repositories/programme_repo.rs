//! Repository for the `programmes` table.
//!
//! Programmes are always scoped to their owning department: listing and
//! creation take the department id, while edit/delete/detail address the
//! programme directly.

use campusreg_core::forms;
use campusreg_core::types::DbId;

use crate::models::programme::{Programme, ProgrammeInput};
use crate::DbPool;

const COLUMNS: &str = "id, department_id, programme, level, year_of_start, \
                       admission_criteria, duration_years, duration_months, \
                       exam_system, approved_by, seats_general, seats_sc, seats_st, \
                       seats_obc, seats_ews, seats_supernumerary, created_at";

pub struct ProgrammeRepo;

impl ProgrammeRepo {
    pub const ENTITY: &'static str = "Programme";

    pub fn validate(input: &ProgrammeInput) -> Result<(), String> {
        forms::require("programme", &input.programme)
    }

    pub async fn list_by_department(
        pool: &DbPool,
        department_id: DbId,
        search: Option<&str>,
    ) -> Result<Vec<Programme>, sqlx::Error> {
        match search {
            Some(term) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM programmes
                     WHERE department_id = ?
                       AND LOWER(programme) LIKE '%' || LOWER(?) || '%'
                     ORDER BY programme ASC"
                );
                sqlx::query_as::<_, Programme>(&query)
                    .bind(department_id)
                    .bind(term)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM programmes
                     WHERE department_id = ?
                     ORDER BY programme ASC"
                );
                sqlx::query_as::<_, Programme>(&query)
                    .bind(department_id)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    pub async fn find(pool: &DbPool, id: DbId) -> Result<Option<Programme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM programmes WHERE id = ?");
        sqlx::query_as::<_, Programme>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn insert(
        pool: &DbPool,
        department_id: DbId,
        input: &ProgrammeInput,
    ) -> Result<Programme, sqlx::Error> {
        let query = format!(
            "INSERT INTO programmes
                (department_id, programme, level, year_of_start, admission_criteria,
                 duration_years, duration_months, exam_system, approved_by,
                 seats_general, seats_sc, seats_st, seats_obc, seats_ews,
                 seats_supernumerary)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Programme>(&query)
            .bind(department_id)
            .bind(&input.programme)
            .bind(&input.level)
            .bind(&input.year_of_start)
            .bind(&input.admission_criteria)
            .bind(input.duration_years)
            .bind(input.duration_months)
            .bind(&input.exam_system)
            .bind(&input.approved_by)
            .bind(input.seats.seats_general)
            .bind(input.seats.seats_sc)
            .bind(input.seats.seats_st)
            .bind(input.seats.seats_obc)
            .bind(input.seats.seats_ews)
            .bind(input.seats.seats_supernumerary)
            .fetch_one(pool)
            .await
    }

    /// Overwrite all editable fields; the owning department never changes.
    pub async fn replace(
        pool: &DbPool,
        id: DbId,
        input: &ProgrammeInput,
    ) -> Result<Option<Programme>, sqlx::Error> {
        let query = format!(
            "UPDATE programmes SET
                programme = ?, level = ?, year_of_start = ?, admission_criteria = ?,
                duration_years = ?, duration_months = ?, exam_system = ?,
                approved_by = ?, seats_general = ?, seats_sc = ?, seats_st = ?,
                seats_obc = ?, seats_ews = ?, seats_supernumerary = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Programme>(&query)
            .bind(&input.programme)
            .bind(&input.level)
            .bind(&input.year_of_start)
            .bind(&input.admission_criteria)
            .bind(input.duration_years)
            .bind(input.duration_months)
            .bind(&input.exam_system)
            .bind(&input.approved_by)
            .bind(input.seats.seats_general)
            .bind(input.seats.seats_sc)
            .bind(input.seats.seats_st)
            .bind(input.seats.seats_obc)
            .bind(input.seats.seats_ews)
            .bind(input.seats.seats_supernumerary)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn remove(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM programmes WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
