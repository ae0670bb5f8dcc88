//! Repository for the `departments` table.
//!
//! Deleting a department cascades to its programmes at the schema level
//! (`ON DELETE CASCADE`).

use async_trait::async_trait;
use campusreg_core::forms;
use campusreg_core::types::DbId;

use crate::models::department::{Department, DepartmentInput};
use crate::repositories::RecordRepo;
use crate::DbPool;

const COLUMNS: &str = "id, name, code, hod, created_at";

pub struct DepartmentRepo;

#[async_trait]
impl RecordRepo for DepartmentRepo {
    const ENTITY: &'static str = "Department";
    type Row = Department;
    type Input = DepartmentInput;

    fn validate(input: &DepartmentInput) -> Result<(), String> {
        forms::require("name", &input.name)
    }

    async fn list(pool: &DbPool, search: Option<&str>) -> Result<Vec<Department>, sqlx::Error> {
        match search {
            Some(term) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM departments
                     WHERE LOWER(name) LIKE '%' || LOWER(?) || '%'
                     ORDER BY name ASC"
                );
                sqlx::query_as::<_, Department>(&query)
                    .bind(term)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM departments ORDER BY name ASC");
                sqlx::query_as::<_, Department>(&query).fetch_all(pool).await
            }
        }
    }

    async fn find(pool: &DbPool, id: DbId) -> Result<Option<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments WHERE id = ?");
        sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn insert(pool: &DbPool, input: &DepartmentInput) -> Result<Department, sqlx::Error> {
        let query = format!(
            "INSERT INTO departments (name, code, hod)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(&input.name)
            .bind(&input.code)
            .bind(&input.hod)
            .fetch_one(pool)
            .await
    }

    async fn replace(
        pool: &DbPool,
        id: DbId,
        input: &DepartmentInput,
    ) -> Result<Option<Department>, sqlx::Error> {
        let query = format!(
            "UPDATE departments SET name = ?, code = ?, hod = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(&input.name)
            .bind(&input.code)
            .bind(&input.hod)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn remove(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM departments WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
