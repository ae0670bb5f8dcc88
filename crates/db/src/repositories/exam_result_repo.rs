//! Repository for the `exam_results` table.

use async_trait::async_trait;
use campusreg_core::forms;
use campusreg_core::types::DbId;

use crate::models::exam_result::{ExamResult, ExamResultInput};
use crate::repositories::RecordRepo;
use crate::DbPool;

const COLUMNS: &str = "id, programme, general_male, general_female, \
                       general_transgender, ews_male, ews_female, ews_transgender, \
                       sc_male, sc_female, sc_transgender, st_male, st_female, \
                       st_transgender, obc_male, obc_female, obc_transgender, \
                       created_at";

pub struct ExamResultRepo;

#[async_trait]
impl RecordRepo for ExamResultRepo {
    const ENTITY: &'static str = "ExamResult";
    type Row = ExamResult;
    type Input = ExamResultInput;

    fn validate(input: &ExamResultInput) -> Result<(), String> {
        forms::require("programme", &input.programme)
    }

    async fn list(pool: &DbPool, search: Option<&str>) -> Result<Vec<ExamResult>, sqlx::Error> {
        match search {
            Some(term) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM exam_results
                     WHERE LOWER(programme) LIKE '%' || LOWER(?) || '%'
                     ORDER BY id DESC"
                );
                sqlx::query_as::<_, ExamResult>(&query)
                    .bind(term)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM exam_results ORDER BY id DESC");
                sqlx::query_as::<_, ExamResult>(&query).fetch_all(pool).await
            }
        }
    }

    async fn find(pool: &DbPool, id: DbId) -> Result<Option<ExamResult>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exam_results WHERE id = ?");
        sqlx::query_as::<_, ExamResult>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn insert(pool: &DbPool, input: &ExamResultInput) -> Result<ExamResult, sqlx::Error> {
        let query = format!(
            "INSERT INTO exam_results
                (programme, general_male, general_female, general_transgender,
                 ews_male, ews_female, ews_transgender,
                 sc_male, sc_female, sc_transgender,
                 st_male, st_female, st_transgender,
                 obc_male, obc_female, obc_transgender)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        let c = &input.counts;
        sqlx::query_as::<_, ExamResult>(&query)
            .bind(&input.programme)
            .bind(c.general_male)
            .bind(c.general_female)
            .bind(c.general_transgender)
            .bind(c.ews_male)
            .bind(c.ews_female)
            .bind(c.ews_transgender)
            .bind(c.sc_male)
            .bind(c.sc_female)
            .bind(c.sc_transgender)
            .bind(c.st_male)
            .bind(c.st_female)
            .bind(c.st_transgender)
            .bind(c.obc_male)
            .bind(c.obc_female)
            .bind(c.obc_transgender)
            .fetch_one(pool)
            .await
    }

    async fn replace(
        pool: &DbPool,
        id: DbId,
        input: &ExamResultInput,
    ) -> Result<Option<ExamResult>, sqlx::Error> {
        let query = format!(
            "UPDATE exam_results SET
                programme = ?, general_male = ?, general_female = ?,
                general_transgender = ?, ews_male = ?, ews_female = ?,
                ews_transgender = ?, sc_male = ?, sc_female = ?,
                sc_transgender = ?, st_male = ?, st_female = ?,
                st_transgender = ?, obc_male = ?, obc_female = ?,
                obc_transgender = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        let c = &input.counts;
        sqlx::query_as::<_, ExamResult>(&query)
            .bind(&input.programme)
            .bind(c.general_male)
            .bind(c.general_female)
            .bind(c.general_transgender)
            .bind(c.ews_male)
            .bind(c.ews_female)
            .bind(c.ews_transgender)
            .bind(c.sc_male)
            .bind(c.sc_female)
            .bind(c.sc_transgender)
            .bind(c.st_male)
            .bind(c.st_female)
            .bind(c.st_transgender)
            .bind(c.obc_male)
            .bind(c.obc_female)
            .bind(c.obc_transgender)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn remove(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM exam_results WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

impl ExamResultRepo {
    /// All exam results ordered by programme name, the order used by the
    /// bulk PDF export.
    pub async fn list_by_programme(pool: &DbPool) -> Result<Vec<ExamResult>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exam_results ORDER BY programme ASC");
        sqlx::query_as::<_, ExamResult>(&query).fetch_all(pool).await
    }
}
