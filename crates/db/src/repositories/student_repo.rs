//! Repository for the `students` table.

use async_trait::async_trait;
use campusreg_core::forms;
use campusreg_core::types::DbId;

use crate::models::student::{Student, StudentInput};
use crate::repositories::RecordRepo;
use crate::DbPool;

/// Column list for students queries.
const COLUMNS: &str = "id, roll_no, name, email, phone, dob, gender, address, \
                       department, programme, year, profile_pic, created_at";

pub struct StudentRepo;

#[async_trait]
impl RecordRepo for StudentRepo {
    const ENTITY: &'static str = "Student";
    type Row = Student;
    type Input = StudentInput;

    fn validate(input: &StudentInput) -> Result<(), String> {
        forms::require("roll_no", &input.roll_no)?;
        forms::require("name", &input.name)
    }

    async fn list(pool: &DbPool, search: Option<&str>) -> Result<Vec<Student>, sqlx::Error> {
        match search {
            Some(term) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM students
                     WHERE LOWER(roll_no) LIKE '%' || LOWER(?1) || '%'
                        OR LOWER(name) LIKE '%' || LOWER(?1) || '%'
                     ORDER BY id ASC"
                );
                sqlx::query_as::<_, Student>(&query)
                    .bind(term)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM students ORDER BY id ASC");
                sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
            }
        }
    }

    async fn find(pool: &DbPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = ?");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn insert(pool: &DbPool, input: &StudentInput) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (roll_no, name, email, phone, dob, gender, address,
                                   department, programme, year, profile_pic)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, COALESCE(?, 'default.png'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.roll_no)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.dob)
            .bind(&input.gender)
            .bind(&input.address)
            .bind(&input.department)
            .bind(&input.programme)
            .bind(input.year)
            .bind(&input.profile_pic)
            .fetch_one(pool)
            .await
    }

    async fn replace(
        pool: &DbPool,
        id: DbId,
        input: &StudentInput,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                roll_no = ?, name = ?, email = ?, phone = ?, dob = ?, gender = ?,
                address = ?, department = ?, programme = ?, year = ?,
                profile_pic = COALESCE(?, 'default.png')
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.roll_no)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.dob)
            .bind(&input.gender)
            .bind(&input.address)
            .bind(&input.department)
            .bind(&input.programme)
            .bind(input.year)
            .bind(&input.profile_pic)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn remove(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

impl StudentRepo {
    /// The most recently added students, newest first.
    pub async fn list_recent(pool: &DbPool, limit: i64) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM students ORDER BY created_at DESC, id DESC LIMIT ?"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
