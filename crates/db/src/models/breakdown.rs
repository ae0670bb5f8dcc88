//! Category/gender counter blocks shared across entities.
//!
//! These structs are embedded in row and input types via `#[sqlx(flatten)]`
//! and `#[serde(flatten)]`. Totals are computed on demand and never stored;
//! a stored total could silently diverge from its components.

use campusreg_core::forms;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The full 15-counter matrix: General/EWS/SC/ST/OBC crossed with
/// Male/Female/Transgender. Used by staff and exam result records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CategoryGenderCount {
    #[serde(default, deserialize_with = "forms::count")]
    pub general_male: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub general_female: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub general_transgender: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub ews_male: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub ews_female: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub ews_transgender: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub sc_male: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub sc_female: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub sc_transgender: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub st_male: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub st_female: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub st_transgender: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub obc_male: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub obc_female: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub obc_transgender: i64,
}

impl CategoryGenderCount {
    /// Sum of all 15 counters.
    pub fn total(&self) -> i64 {
        self.general_male
            + self.general_female
            + self.general_transgender
            + self.ews_male
            + self.ews_female
            + self.ews_transgender
            + self.sc_male
            + self.sc_female
            + self.sc_transgender
            + self.st_male
            + self.st_female
            + self.st_transgender
            + self.obc_male
            + self.obc_female
            + self.obc_transgender
    }
}

/// The 11-counter enrollment matrix: five categories crossed with
/// Male/Female, plus a single transgender counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct EnrollmentCount {
    #[serde(default, deserialize_with = "forms::count")]
    pub general_male: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub general_female: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub ews_male: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub ews_female: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub sc_male: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub sc_female: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub st_male: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub st_female: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub obc_male: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub obc_female: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub trans_gender: i64,
}

impl EnrollmentCount {
    /// Sum of all 11 counters.
    pub fn total(&self) -> i64 {
        self.general_male
            + self.general_female
            + self.ews_male
            + self.ews_female
            + self.sc_male
            + self.sc_female
            + self.st_male
            + self.st_female
            + self.obc_male
            + self.obc_female
            + self.trans_gender
    }
}

/// Approved intake seats per reservation category (no gender split).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct SeatMatrix {
    #[serde(default, deserialize_with = "forms::count")]
    pub seats_general: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub seats_sc: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub seats_st: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub seats_obc: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub seats_ews: i64,
    #[serde(default, deserialize_with = "forms::count")]
    pub seats_supernumerary: i64,
}

impl SeatMatrix {
    /// Sum of all six seat counters.
    pub fn total(&self) -> i64 {
        self.seats_general
            + self.seats_sc
            + self.seats_st
            + self.seats_obc
            + self.seats_ews
            + self.seats_supernumerary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_gender_total_sums_all_fifteen() {
        let counts = CategoryGenderCount {
            general_male: 3,
            sc_female: 2,
            ..Default::default()
        };
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn category_gender_total_is_zero_by_default() {
        assert_eq!(CategoryGenderCount::default().total(), 0);
    }

    #[test]
    fn seat_total_sums_all_six() {
        let seats = SeatMatrix {
            seats_general: 10,
            seats_sc: 2,
            seats_st: 1,
            seats_obc: 3,
            seats_ews: 1,
            seats_supernumerary: 0,
        };
        assert_eq!(seats.total(), 17);
    }

    #[test]
    fn enrollment_total_includes_transgender_counter() {
        let counts = EnrollmentCount {
            general_male: 1,
            obc_female: 2,
            trans_gender: 1,
            ..Default::default()
        };
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn blank_counters_deserialize_to_zero() {
        let counts: EnrollmentCount =
            serde_json::from_str(r#"{"general_male": "4", "sc_female": "", "obc_male": null}"#)
                .unwrap();
        assert_eq!(counts.general_male, 4);
        assert_eq!(counts.sc_female, 0);
        assert_eq!(counts.obc_male, 0);
        assert_eq!(counts.total(), 4);
    }
}
