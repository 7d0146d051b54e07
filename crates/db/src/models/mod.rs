//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - The entity struct handed to the HTTP layer
//! - A `FromRow` row struct matching the database row
//! - A create DTO for inserts

pub mod employee;
