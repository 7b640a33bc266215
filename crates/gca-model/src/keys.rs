//! Identity types for the schedule tree
//!
//! Identities are structural value types with derived equality and hashing,
//! making the key contract explicit and testable:
//! - [`Trimestre`]: academic term code with trimester arithmetic
//! - [`CourseId`]: (sigle, trimestre) pair
//! - [`ActivityKey`]: the 7-field schedule tuple that *is* an activity's
//!   identity

use crate::enums::{ActivityMode, ActivityType, Jour};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Academic term code, encoded as `year * 10 + term`
///
/// Term 1 covers January-June, term 2 July-September, term 3 the rest of the
/// year (e.g. `20261` is winter 2026).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Trimestre(u32);

impl Trimestre {
    /// Create from a raw code (e.g. `20262`)
    #[inline]
    #[must_use]
    pub fn new(code: u32) -> Self {
        Self(code)
    }

    /// Create from year and term number (1-3)
    #[inline]
    #[must_use]
    pub fn from_parts(year: u32, term: u32) -> Self {
        Self(year * 10 + term)
    }

    /// Raw code
    #[inline]
    #[must_use]
    pub fn code(self) -> u32 {
        self.0
    }

    /// The trimester containing `today`
    #[must_use]
    pub fn current(today: NaiveDate) -> Self {
        let term = match today.month() {
            1..=6 => 1,
            7..=9 => 2,
            _ => 3,
        };
        Self::from_parts(today.year_ce().1, term)
    }

    /// Linear index over trimesters, so distances can be compared across
    /// year boundaries
    #[inline]
    #[must_use]
    pub fn index(self) -> i64 {
        i64::from(self.0 / 10) * 3 + i64::from(self.0 % 10)
    }

    /// How many trimesters `self` lies after `other` (negative if before)
    #[inline]
    #[must_use]
    pub fn trimestres_after(self, other: Self) -> i64 {
        self.index() - other.index()
    }
}

impl fmt::Display for Trimestre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Course identity: course code plus the trimester it is offered in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId {
    /// Course code (e.g. `INF1573`)
    pub sigle: String,
    /// Academic term
    pub trimestre: Trimestre,
}

impl CourseId {
    /// Create a course identity
    #[inline]
    #[must_use]
    pub fn new(sigle: impl Into<String>, trimestre: Trimestre) -> Self {
        Self {
            sigle: sigle.into(),
            trimestre,
        }
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.sigle, self.trimestre)
    }
}

/// Structural identity of an activity
///
/// Two activities with the same schedule tuple are the same activity as far
/// as reconciliation is concerned, whatever their other stored fields say.
/// Shifting a start hour therefore produces a different key, reported as
/// a removal plus an addition rather than a modification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityKey {
    /// Activity kind (TD, TP, ...)
    pub kind: ActivityType,
    /// Delivery mode
    pub mode: ActivityMode,
    /// Day of week
    pub jour: Jour,
    /// Start hour
    pub hr_debut: u16,
    /// End hour
    pub hr_fin: u16,
    /// First occurrence
    pub date_debut: NaiveDateTime,
    /// Last occurrence
    pub date_fin: NaiveDateTime,
}

impl fmt::Display for ActivityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}/{:?}/{:?} {}h-{}h",
            self.kind, self.mode, self.jour, self.hr_debut, self.hr_fin
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimestre_index_crosses_year_boundary() {
        let fall = Trimestre::new(20253);
        let winter = Trimestre::new(20261);
        assert_eq!(winter.trimestres_after(fall), 1);
    }

    #[test]
    fn trimestre_current_by_month() {
        let jan = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let aug = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        let nov = NaiveDate::from_ymd_opt(2026, 11, 15).unwrap();
        assert_eq!(Trimestre::current(jan), Trimestre::new(20261));
        assert_eq!(Trimestre::current(aug), Trimestre::new(20262));
        assert_eq!(Trimestre::current(nov), Trimestre::new(20263));
    }

    #[test]
    fn activity_key_equality_is_structural() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 12)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let a = ActivityKey {
            kind: ActivityType::Td,
            mode: ActivityMode::Presentiel,
            jour: Jour::Lundi,
            hr_debut: 8,
            hr_fin: 10,
            date_debut: date,
            date_fin: date,
        };
        let mut b = a.clone();
        assert_eq!(a, b);
        b.hr_debut = 9;
        assert_ne!(a, b);
    }
}
