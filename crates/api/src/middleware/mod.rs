//! Request extractors shared by the handlers.

pub mod request_base;
pub mod validated;
