//! Wire shapes returned by the employee endpoints.

use prozu_core::year_month::YearMonth;
use serde::Serialize;

/// Relation name of a link pointing at the resource itself.
pub const REL_SELF: &str = "self";

/// A hypermedia link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn self_link(href: String) -> Self {
        Self {
            rel: REL_SELF.to_string(),
            href,
        }
    }
}

/// A single employee as seen by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeResponse {
    pub id: String,
    pub name: String,
    pub links: Vec<Link>,
}

/// One page of employees plus the pagination metadata used to fetch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeesResponse {
    pub limit: i64,
    pub offset: i64,
    pub total_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub items: Vec<EmployeeResponse>,
    pub links: Vec<Link>,
}

/// Days worked in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDaysResponse {
    pub month: YearMonth,
    pub days_count: i32,
}
