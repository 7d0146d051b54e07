/// Application-specific numeric error codes carried in every error body.
pub mod codes {
    /// Request data failed validation before reaching the store.
    pub const VALIDATION: u32 = 1;
    /// The requested employee does not exist.
    pub const EMPLOYEE_NOT_FOUND: u32 = 9;
    /// Anything the client cannot fix (store failures, bugs).
    pub const INTERNAL: u32 = 99;
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("No {entity} with id {id} found.")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Numeric code reported alongside the human-readable message.
    pub fn code(&self) -> u32 {
        match self {
            CoreError::NotFound { .. } => codes::EMPLOYEE_NOT_FOUND,
            CoreError::Validation(_) => codes::VALIDATION,
            CoreError::Internal(_) => codes::INTERNAL,
        }
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CoreError::Validation(errors.to_string())
    }
}
