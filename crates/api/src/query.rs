//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Generic search parameter (`?q=`).
///
/// Every list endpoint accepts it; the match is a case-insensitive substring
/// test on the entity's identity field(s), done in the repository layer.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}
