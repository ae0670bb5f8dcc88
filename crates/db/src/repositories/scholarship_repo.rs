//! Repository for the `scholarships` table.

use async_trait::async_trait;
use campusreg_core::forms;
use campusreg_core::types::DbId;

use crate::models::scholarship::{Scholarship, ScholarshipInput};
use crate::repositories::RecordRepo;
use crate::DbPool;

const COLUMNS: &str = "id, title, amount, criteria, created_at";

pub struct ScholarshipRepo;

#[async_trait]
impl RecordRepo for ScholarshipRepo {
    const ENTITY: &'static str = "Scholarship";
    type Row = Scholarship;
    type Input = ScholarshipInput;

    fn validate(input: &ScholarshipInput) -> Result<(), String> {
        forms::require("title", &input.title)
    }

    async fn list(pool: &DbPool, search: Option<&str>) -> Result<Vec<Scholarship>, sqlx::Error> {
        match search {
            Some(term) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM scholarships
                     WHERE LOWER(title) LIKE '%' || LOWER(?) || '%'
                     ORDER BY id DESC"
                );
                sqlx::query_as::<_, Scholarship>(&query)
                    .bind(term)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM scholarships ORDER BY id DESC");
                sqlx::query_as::<_, Scholarship>(&query).fetch_all(pool).await
            }
        }
    }

    async fn find(pool: &DbPool, id: DbId) -> Result<Option<Scholarship>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scholarships WHERE id = ?");
        sqlx::query_as::<_, Scholarship>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn insert(pool: &DbPool, input: &ScholarshipInput) -> Result<Scholarship, sqlx::Error> {
        let query = format!(
            "INSERT INTO scholarships (title, amount, criteria)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scholarship>(&query)
            .bind(&input.title)
            .bind(&input.amount)
            .bind(&input.criteria)
            .fetch_one(pool)
            .await
    }

    async fn replace(
        pool: &DbPool,
        id: DbId,
        input: &ScholarshipInput,
    ) -> Result<Option<Scholarship>, sqlx::Error> {
        let query = format!(
            "UPDATE scholarships SET title = ?, amount = ?, criteria = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scholarship>(&query)
            .bind(&input.title)
            .bind(&input.amount)
            .bind(&input.criteria)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn remove(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM scholarships WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
