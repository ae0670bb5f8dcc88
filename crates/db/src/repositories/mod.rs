//! Repository layer.
//!
//! Each repository is a zero-sized struct whose async methods take the pool
//! handle as their first argument. The shared [`RecordRepo`] trait is what
//! the generic CRUD routes in the API crate are instantiated over; entities
//! with extra behaviour (nested programmes, enrollment student linking,
//! staff summary) add inherent methods alongside.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use campusreg_core::types::DbId;

use crate::DbPool;

pub mod department_repo;
pub mod enrollment_repo;
pub mod exam_result_repo;
pub mod hostel_repo;
pub mod nss_repo;
pub mod placement_repo;
pub mod programme_repo;
pub mod scholarship_repo;
pub mod staff_repo;
pub mod student_repo;

pub use department_repo::DepartmentRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use exam_result_repo::ExamResultRepo;
pub use hostel_repo::HostelRepo;
pub use nss_repo::NssRepo;
pub use placement_repo::PlacementRepo;
pub use programme_repo::ProgrammeRepo;
pub use scholarship_repo::ScholarshipRepo;
pub use staff_repo::StaffRepo;
pub use student_repo::StudentRepo;

/// Uniform CRUD contract over one record table.
///
/// `Input` doubles as the create payload and the full-overwrite edit payload;
/// there is no partial-patch variant. `validate` runs before any write and
/// returns a user-facing guidance message when a required field is blank.
#[async_trait]
pub trait RecordRepo {
    /// Entity name used in not-found errors and logs.
    const ENTITY: &'static str;

    type Row: Serialize + Send + Sync + Unpin + 'static;
    type Input: DeserializeOwned + Send + Sync + 'static;

    /// Check required-field presence. Default: nothing is required.
    fn validate(_input: &Self::Input) -> Result<(), String> {
        Ok(())
    }

    /// List rows, optionally filtered by a case-insensitive substring match
    /// on the entity's identity field(s).
    async fn list(pool: &DbPool, search: Option<&str>) -> Result<Vec<Self::Row>, sqlx::Error>;

    async fn find(pool: &DbPool, id: DbId) -> Result<Option<Self::Row>, sqlx::Error>;

    async fn insert(pool: &DbPool, input: &Self::Input) -> Result<Self::Row, sqlx::Error>;

    /// Overwrite all editable fields of an existing row. Returns the updated
    /// row, or `None` when the id is unknown.
    async fn replace(
        pool: &DbPool,
        id: DbId,
        input: &Self::Input,
    ) -> Result<Option<Self::Row>, sqlx::Error>;

    /// Delete a row. Returns `true` if a row was deleted.
    async fn remove(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error>;
}
