//! Repository for the `placements` table.

use async_trait::async_trait;
use campusreg_core::forms;
use campusreg_core::types::DbId;

use crate::models::placement::{Placement, PlacementInput};
use crate::repositories::RecordRepo;
use crate::DbPool;

const COLUMNS: &str = "id, company, role, date, details, created_at";

pub struct PlacementRepo;

#[async_trait]
impl RecordRepo for PlacementRepo {
    const ENTITY: &'static str = "Placement";
    type Row = Placement;
    type Input = PlacementInput;

    fn validate(input: &PlacementInput) -> Result<(), String> {
        forms::require("company", &input.company)
    }

    async fn list(pool: &DbPool, search: Option<&str>) -> Result<Vec<Placement>, sqlx::Error> {
        match search {
            Some(term) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM placements
                     WHERE LOWER(company) LIKE '%' || LOWER(?) || '%'
                     ORDER BY id DESC"
                );
                sqlx::query_as::<_, Placement>(&query)
                    .bind(term)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM placements ORDER BY id DESC");
                sqlx::query_as::<_, Placement>(&query).fetch_all(pool).await
            }
        }
    }

    async fn find(pool: &DbPool, id: DbId) -> Result<Option<Placement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM placements WHERE id = ?");
        sqlx::query_as::<_, Placement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn insert(pool: &DbPool, input: &PlacementInput) -> Result<Placement, sqlx::Error> {
        let query = format!(
            "INSERT INTO placements (company, role, date, details)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Placement>(&query)
            .bind(&input.company)
            .bind(&input.role)
            .bind(&input.date)
            .bind(&input.details)
            .fetch_one(pool)
            .await
    }

    async fn replace(
        pool: &DbPool,
        id: DbId,
        input: &PlacementInput,
    ) -> Result<Option<Placement>, sqlx::Error> {
        let query = format!(
            "UPDATE placements SET company = ?, role = ?, date = ?, details = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Placement>(&query)
            .bind(&input.company)
            .bind(&input.role)
            .bind(&input.date)
            .bind(&input.details)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn remove(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM placements WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
