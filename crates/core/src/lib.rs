//! Pure domain logic for the campus records service.
//!
//! No I/O lives here: shared ID/timestamp types, the domain error enum,
//! request-boundary form coercion, and the aggregation layer that derives
//! totals from category/gender counter fields.

pub mod error;
pub mod forms;
pub mod tally;
pub mod types;
