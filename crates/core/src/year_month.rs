//! Calendar year-month value without a day component.
//!
//! Serialized as `YYYY-MM` so it round-trips exactly through JSON and the
//! JSONB documents kept by the PostgreSQL store.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// Smallest year with a four-digit `YYYY` form.
pub const MIN_YEAR: i32 = 0;

/// Largest year with a four-digit `YYYY` form.
pub const MAX_YEAR: i32 = 9999;

/// A year and a month (1-12). The year stays within
/// [`MIN_YEAR`]..=[`MAX_YEAR`] so every value parses back from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Build a year-month, rejecting months outside 1-12 and years outside
    /// [`MIN_YEAR`]..=[`MAX_YEAR`].
    pub fn new(year: i32, month: u32) -> Result<Self, CoreError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CoreError::Validation(format!(
                "year must be between {MIN_YEAR} and {MAX_YEAR}, got {year}"
            )));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self::from_date)
            .ok_or_else(|| {
                CoreError::Validation(format!("invalid year-month: {year}-{month}"))
            })
    }

    fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The year-month `months` months after this one (negative goes back).
    pub fn plus_months(&self, months: i32) -> Result<Self, CoreError> {
        let index = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(months);
        let year = i32::try_from(index.div_euclid(12)).map_err(|_| {
            CoreError::Validation(format!("{self} plus {months} months is out of range"))
        })?;
        Self::new(year, index.rem_euclid(12) as u32 + 1)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let well_formed = s.len() == 7
            && s.char_indices()
                .all(|(i, c)| if i == 4 { c == '-' } else { c.is_ascii_digit() });
        if !well_formed {
            return Err(CoreError::Validation(format!(
                "month must have the form YYYY-MM, got '{s}'"
            )));
        }

        let date = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
            .map_err(|e| CoreError::Validation(format!("invalid month '{s}': {e}")))?;
        Ok(Self::from_date(date))
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
