//! ProZu API server library.
//!
//! Exposes the core building blocks (config, state, error handling, routes,
//! response mapping) so integration tests and the binary entrypoint can both
//! access them.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod middleware;
pub mod query;
pub mod response;
pub mod routes;
pub mod state;
