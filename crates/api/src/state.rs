use std::sync::Arc;

use prozu_db::EmployeeStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Employee document store (PostgreSQL or in-memory).
    pub store: Arc<dyn EmployeeStore>,
    /// Server configuration (base URL for links, timeouts).
    pub config: Arc<ServerConfig>,
}
