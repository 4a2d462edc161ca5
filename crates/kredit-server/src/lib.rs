//! Kredit Server: HTTP surface for registration, login, credit limits
//! and transaction admission.

pub mod app;
pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{AppState, build_router};
pub use config::ServerConfig;
