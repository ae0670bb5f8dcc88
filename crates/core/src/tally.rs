//! Aggregation over category/gender counter records.
//!
//! Totals are always derived from the counters at the moment they are
//! requested; nothing here is stored. All functions are pure.

use std::collections::BTreeMap;

use serde::Serialize;

/// Total enrolled strength for one admission year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearlyTotal {
    pub year: i64,
    pub total: i64,
}

/// Group `(year, record_total)` pairs by year and sum per group.
///
/// Output is sorted ascending by year. Years with no records simply do not
/// appear; there is no zero-filling.
pub fn yearly_totals<I>(records: I) -> Vec<YearlyTotal>
where
    I: IntoIterator<Item = (i64, i64)>,
{
    let mut by_year: BTreeMap<i64, i64> = BTreeMap::new();
    for (year, total) in records {
        *by_year.entry(year).or_insert(0) += total;
    }
    by_year
        .into_iter()
        .map(|(year, total)| YearlyTotal { year, total })
        .collect()
}
