//! Repository for the `hostels` table.

use async_trait::async_trait;
use campusreg_core::forms;
use campusreg_core::types::DbId;

use crate::models::hostel::{Hostel, HostelInput};
use crate::repositories::RecordRepo;
use crate::DbPool;

const COLUMNS: &str = "id, name, warden, type, capacity, students_residing, created_at";

pub struct HostelRepo;

#[async_trait]
impl RecordRepo for HostelRepo {
    const ENTITY: &'static str = "Hostel";
    type Row = Hostel;
    type Input = HostelInput;

    fn validate(input: &HostelInput) -> Result<(), String> {
        forms::require("name", &input.name)
    }

    async fn list(pool: &DbPool, search: Option<&str>) -> Result<Vec<Hostel>, sqlx::Error> {
        match search {
            Some(term) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM hostels
                     WHERE LOWER(name) LIKE '%' || LOWER(?) || '%'
                     ORDER BY id DESC"
                );
                sqlx::query_as::<_, Hostel>(&query)
                    .bind(term)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM hostels ORDER BY id DESC");
                sqlx::query_as::<_, Hostel>(&query).fetch_all(pool).await
            }
        }
    }

    async fn find(pool: &DbPool, id: DbId) -> Result<Option<Hostel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hostels WHERE id = ?");
        sqlx::query_as::<_, Hostel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn insert(pool: &DbPool, input: &HostelInput) -> Result<Hostel, sqlx::Error> {
        let query = format!(
            "INSERT INTO hostels (name, warden, type, capacity, students_residing)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hostel>(&query)
            .bind(&input.name)
            .bind(&input.warden)
            .bind(&input.kind)
            .bind(input.capacity)
            .bind(input.students_residing)
            .fetch_one(pool)
            .await
    }

    async fn replace(
        pool: &DbPool,
        id: DbId,
        input: &HostelInput,
    ) -> Result<Option<Hostel>, sqlx::Error> {
        let query = format!(
            "UPDATE hostels SET
                name = ?, warden = ?, type = ?, capacity = ?, students_residing = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hostel>(&query)
            .bind(&input.name)
            .bind(&input.warden)
            .bind(&input.kind)
            .bind(input.capacity)
            .bind(input.students_residing)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn remove(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hostels WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
