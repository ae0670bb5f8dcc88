//! Repository for the `nss_enrollments` table.

use async_trait::async_trait;
use campusreg_core::forms;
use campusreg_core::types::DbId;

use crate::models::nss::{NssEnrollment, NssEnrollmentInput};
use crate::repositories::RecordRepo;
use crate::DbPool;

const COLUMNS: &str = "id, activity, date, male, female, remarks, created_at";

pub struct NssRepo;

#[async_trait]
impl RecordRepo for NssRepo {
    const ENTITY: &'static str = "NSSEnrollment";
    type Row = NssEnrollment;
    type Input = NssEnrollmentInput;

    fn validate(input: &NssEnrollmentInput) -> Result<(), String> {
        forms::require("activity", &input.activity)
    }

    async fn list(pool: &DbPool, search: Option<&str>) -> Result<Vec<NssEnrollment>, sqlx::Error> {
        match search {
            Some(term) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM nss_enrollments
                     WHERE LOWER(activity) LIKE '%' || LOWER(?) || '%'
                     ORDER BY id DESC"
                );
                sqlx::query_as::<_, NssEnrollment>(&query)
                    .bind(term)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM nss_enrollments ORDER BY id DESC");
                sqlx::query_as::<_, NssEnrollment>(&query).fetch_all(pool).await
            }
        }
    }

    async fn find(pool: &DbPool, id: DbId) -> Result<Option<NssEnrollment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM nss_enrollments WHERE id = ?");
        sqlx::query_as::<_, NssEnrollment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn insert(
        pool: &DbPool,
        input: &NssEnrollmentInput,
    ) -> Result<NssEnrollment, sqlx::Error> {
        let query = format!(
            "INSERT INTO nss_enrollments (activity, date, male, female, remarks)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NssEnrollment>(&query)
            .bind(&input.activity)
            .bind(&input.date)
            .bind(input.male)
            .bind(input.female)
            .bind(&input.remarks)
            .fetch_one(pool)
            .await
    }

    async fn replace(
        pool: &DbPool,
        id: DbId,
        input: &NssEnrollmentInput,
    ) -> Result<Option<NssEnrollment>, sqlx::Error> {
        let query = format!(
            "UPDATE nss_enrollments SET activity = ?, date = ?, male = ?, female = ?, remarks = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NssEnrollment>(&query)
            .bind(&input.activity)
            .bind(&input.date)
            .bind(input.male)
            .bind(input.female)
            .bind(&input.remarks)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn remove(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM nss_enrollments WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
