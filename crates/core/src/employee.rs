//! Employee and project-day rules.
//!
//! Project days are embedded in the employee document; they have no
//! lifecycle of their own and are validated before they reach the store.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::year_month::YearMonth;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length of an employee name, in characters.
pub const MAX_EMPLOYEE_NAME_LEN: usize = 255;

/// Smallest allowed `daysCount`.
pub const MIN_DAYS_COUNT: i32 = 0;

/// Largest allowed `daysCount`. Static bound, not calendar-aware.
pub const MAX_DAYS_COUNT: i32 = 31;

// ---------------------------------------------------------------------------
// Project days
// ---------------------------------------------------------------------------

/// How many days an employee worked on a project in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDays {
    pub month: YearMonth,
    #[validate(range(min = 0, max = 31))]
    pub days_count: i32,
}

impl ProjectDays {
    /// Build a validated record.
    pub fn new(month: YearMonth, days_count: i32) -> Result<Self, CoreError> {
        let days = Self { month, days_count };
        days.validate()?;
        Ok(days)
    }
}

/// Validate every record of an employee's project-day collection.
pub fn validate_project_days(days: &[ProjectDays]) -> Result<(), CoreError> {
    for entry in days {
        entry.validate()?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

/// Validate an employee name. Empty names are allowed; overlong ones are not.
pub fn validate_employee_name(name: &str) -> Result<(), CoreError> {
    let len = name.chars().count();
    if len > MAX_EMPLOYEE_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "name must be at most {MAX_EMPLOYEE_NAME_LEN} characters, got {len}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn month() -> YearMonth {
        YearMonth::new(2014, 1).unwrap()
    }

    // -- days_count bounds ----------------------------------------------------

    #[test]
    fn days_count_bounds_are_accepted() {
        assert!(ProjectDays::new(month(), MIN_DAYS_COUNT).is_ok());
        assert!(ProjectDays::new(month(), MAX_DAYS_COUNT).is_ok());
    }

    #[test]
    fn days_count_below_zero_is_rejected() {
        assert_matches!(ProjectDays::new(month(), -1), Err(CoreError::Validation(_)));
    }

    #[test]
    fn days_count_above_31_is_rejected() {
        assert_matches!(ProjectDays::new(month(), 32), Err(CoreError::Validation(_)));
    }

    #[test]
    fn collection_validation_reports_first_bad_entry() {
        let days = vec![
            ProjectDays { month: month(), days_count: 4 },
            ProjectDays { month: month(), days_count: 40 },
        ];
        assert_matches!(validate_project_days(&days), Err(CoreError::Validation(_)));
        assert!(validate_project_days(&days[..1]).is_ok());
    }

    // -- serde shape ----------------------------------------------------------

    #[test]
    fn serializes_with_camel_case_fields() {
        let days = ProjectDays::new(month(), 12).unwrap();
        let json = serde_json::to_value(&days).unwrap();
        assert_eq!(json, serde_json::json!({"month": "2014-01", "daysCount": 12}));
    }

    #[test]
    fn null_month_fails_to_deserialize() {
        let raw = r#"{"month": null, "daysCount": 3}"#;
        assert!(serde_json::from_str::<ProjectDays>(raw).is_err());
    }

    // -- names ----------------------------------------------------------------

    #[test]
    fn empty_name_is_allowed() {
        assert!(validate_employee_name("").is_ok());
    }

    #[test]
    fn overlong_name_is_rejected() {
        let name = "x".repeat(MAX_EMPLOYEE_NAME_LEN + 1);
        assert_matches!(validate_employee_name(&name), Err(CoreError::Validation(_)));
        assert!(validate_employee_name(&name[..MAX_EMPLOYEE_NAME_LEN]).is_ok());
    }
}
