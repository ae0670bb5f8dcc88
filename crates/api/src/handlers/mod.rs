//! Entity-specific handlers. Plain CRUD lives in `crate::crud`; only the
//! entities with behaviour beyond it get a module here.

pub mod dashboard;
pub mod enrollments;
pub mod exports;
pub mod programmes;
pub mod staff;
