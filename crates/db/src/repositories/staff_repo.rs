//! Repository for the `staff` table.

use async_trait::async_trait;
use campusreg_core::forms;
use campusreg_core::types::DbId;

use crate::models::staff::{Staff, StaffInput, StaffSummary};
use crate::repositories::RecordRepo;
use crate::DbPool;

// "group" needs quoting; it is an SQL keyword.
const COLUMNS: &str = "id, name, staff_type, \"group\", sanctioned_strength, \
                       general_male, general_female, general_transgender, \
                       ews_male, ews_female, ews_transgender, \
                       sc_male, sc_female, sc_transgender, \
                       st_male, st_female, st_transgender, \
                       obc_male, obc_female, obc_transgender, created_at";

pub struct StaffRepo;

#[async_trait]
impl RecordRepo for StaffRepo {
    const ENTITY: &'static str = "Staff";
    type Row = Staff;
    type Input = StaffInput;

    fn validate(input: &StaffInput) -> Result<(), String> {
        forms::require("name", &input.name)
    }

    async fn list(pool: &DbPool, search: Option<&str>) -> Result<Vec<Staff>, sqlx::Error> {
        match search {
            Some(term) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM staff
                     WHERE LOWER(name) LIKE '%' || LOWER(?) || '%'
                     ORDER BY name ASC"
                );
                sqlx::query_as::<_, Staff>(&query)
                    .bind(term)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM staff ORDER BY name ASC");
                sqlx::query_as::<_, Staff>(&query).fetch_all(pool).await
            }
        }
    }

    async fn find(pool: &DbPool, id: DbId) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff WHERE id = ?");
        sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn insert(pool: &DbPool, input: &StaffInput) -> Result<Staff, sqlx::Error> {
        let query = format!(
            "INSERT INTO staff
                (name, staff_type, \"group\", sanctioned_strength,
                 general_male, general_female, general_transgender,
                 ews_male, ews_female, ews_transgender,
                 sc_male, sc_female, sc_transgender,
                 st_male, st_female, st_transgender,
                 obc_male, obc_female, obc_transgender)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        let s = &input.strength;
        sqlx::query_as::<_, Staff>(&query)
            .bind(&input.name)
            .bind(&input.staff_type)
            .bind(&input.group)
            .bind(input.sanctioned_strength)
            .bind(s.general_male)
            .bind(s.general_female)
            .bind(s.general_transgender)
            .bind(s.ews_male)
            .bind(s.ews_female)
            .bind(s.ews_transgender)
            .bind(s.sc_male)
            .bind(s.sc_female)
            .bind(s.sc_transgender)
            .bind(s.st_male)
            .bind(s.st_female)
            .bind(s.st_transgender)
            .bind(s.obc_male)
            .bind(s.obc_female)
            .bind(s.obc_transgender)
            .fetch_one(pool)
            .await
    }

    async fn replace(
        pool: &DbPool,
        id: DbId,
        input: &StaffInput,
    ) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!(
            "UPDATE staff SET
                name = ?, staff_type = ?, \"group\" = ?, sanctioned_strength = ?,
                general_male = ?, general_female = ?, general_transgender = ?,
                ews_male = ?, ews_female = ?, ews_transgender = ?,
                sc_male = ?, sc_female = ?, sc_transgender = ?,
                st_male = ?, st_female = ?, st_transgender = ?,
                obc_male = ?, obc_female = ?, obc_transgender = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        let s = &input.strength;
        sqlx::query_as::<_, Staff>(&query)
            .bind(&input.name)
            .bind(&input.staff_type)
            .bind(&input.group)
            .bind(input.sanctioned_strength)
            .bind(s.general_male)
            .bind(s.general_female)
            .bind(s.general_transgender)
            .bind(s.ews_male)
            .bind(s.ews_female)
            .bind(s.ews_transgender)
            .bind(s.sc_male)
            .bind(s.sc_female)
            .bind(s.sc_transgender)
            .bind(s.st_male)
            .bind(s.st_female)
            .bind(s.st_transgender)
            .bind(s.obc_male)
            .bind(s.obc_female)
            .bind(s.obc_transgender)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn remove(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM staff WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

impl StaffRepo {
    /// Roster-wide sanctioned and actual strength totals, derived from the
    /// counters of every row at call time.
    pub async fn summary(pool: &DbPool) -> Result<StaffSummary, sqlx::Error> {
        let rows = Self::list(pool, None).await?;
        Ok(StaffSummary {
            sanctioned_total: rows.iter().map(|s| s.sanctioned_strength).sum(),
            strength_total: rows.iter().map(Staff::total_strength).sum(),
        })
    }
}
