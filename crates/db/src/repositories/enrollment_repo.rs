//! Repository for the `enrollments` table.
//!
//! The student-link resolution (copying programme/year, forcing mode) is an
//! orchestration concern and happens in the API layer before `insert`.

use async_trait::async_trait;
use campusreg_core::types::DbId;

use crate::models::enrollment::{Enrollment, EnrollmentInput};
use crate::repositories::RecordRepo;
use crate::DbPool;

const COLUMNS: &str = "id, student_id, programme, year, mode, general_male, \
                       general_female, ews_male, ews_female, sc_male, sc_female, \
                       st_male, st_female, obc_male, obc_female, trans_gender, \
                       created_at";

pub struct EnrollmentRepo;

#[async_trait]
impl RecordRepo for EnrollmentRepo {
    const ENTITY: &'static str = "Enrollment";
    type Row = Enrollment;
    type Input = EnrollmentInput;

    async fn list(pool: &DbPool, search: Option<&str>) -> Result<Vec<Enrollment>, sqlx::Error> {
        match search {
            Some(term) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM enrollments
                     WHERE LOWER(programme) LIKE '%' || LOWER(?) || '%'
                     ORDER BY created_at DESC, id DESC"
                );
                sqlx::query_as::<_, Enrollment>(&query)
                    .bind(term)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM enrollments ORDER BY created_at DESC, id DESC"
                );
                sqlx::query_as::<_, Enrollment>(&query).fetch_all(pool).await
            }
        }
    }

    async fn find(pool: &DbPool, id: DbId) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enrollments WHERE id = ?");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn insert(pool: &DbPool, input: &EnrollmentInput) -> Result<Enrollment, sqlx::Error> {
        let query = format!(
            "INSERT INTO enrollments
                (student_id, programme, year, mode, general_male, general_female,
                 ews_male, ews_female, sc_male, sc_female, st_male, st_female,
                 obc_male, obc_female, trans_gender)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(input.student_id)
            .bind(&input.programme)
            .bind(input.year)
            .bind(&input.mode)
            .bind(input.counts.general_male)
            .bind(input.counts.general_female)
            .bind(input.counts.ews_male)
            .bind(input.counts.ews_female)
            .bind(input.counts.sc_male)
            .bind(input.counts.sc_female)
            .bind(input.counts.st_male)
            .bind(input.counts.st_female)
            .bind(input.counts.obc_male)
            .bind(input.counts.obc_female)
            .bind(input.counts.trans_gender)
            .fetch_one(pool)
            .await
    }

    /// Overwrite the tally fields. The student link is set at creation and
    /// not editable afterwards, matching the entry-form behaviour.
    async fn replace(
        pool: &DbPool,
        id: DbId,
        input: &EnrollmentInput,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!(
            "UPDATE enrollments SET
                programme = ?, year = ?, mode = ?, general_male = ?,
                general_female = ?, ews_male = ?, ews_female = ?, sc_male = ?,
                sc_female = ?, st_male = ?, st_female = ?, obc_male = ?,
                obc_female = ?, trans_gender = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(&input.programme)
            .bind(input.year)
            .bind(&input.mode)
            .bind(input.counts.general_male)
            .bind(input.counts.general_female)
            .bind(input.counts.ews_male)
            .bind(input.counts.ews_female)
            .bind(input.counts.sc_male)
            .bind(input.counts.sc_female)
            .bind(input.counts.st_male)
            .bind(input.counts.st_female)
            .bind(input.counts.obc_male)
            .bind(input.counts.obc_female)
            .bind(input.counts.trans_gender)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn remove(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM enrollments WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

impl EnrollmentRepo {
    /// The most recently recorded enrollments, newest first.
    pub async fn list_recent(pool: &DbPool, limit: i64) -> Result<Vec<Enrollment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM enrollments ORDER BY created_at DESC, id DESC LIMIT ?"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
