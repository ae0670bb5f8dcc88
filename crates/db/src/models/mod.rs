//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` input struct used for create and full-overwrite edit
//!
//! Category/gender counter blocks shared by several entities live in
//! [`breakdown`] and are embedded via `flatten`.

pub mod breakdown;
pub mod department;
pub mod enrollment;
pub mod exam_result;
pub mod hostel;
pub mod nss;
pub mod placement;
pub mod programme;
pub mod scholarship;
pub mod staff;
pub mod student;
