//! Domain types, validation rules and error taxonomy shared by the store
//! and HTTP layers of the ProZu employee service.

pub mod employee;
pub mod error;
pub mod pagination;
pub mod search;
pub mod types;
pub mod year_month;
