//! HTTP routes and handlers, one file per area.

pub mod auth;
pub mod fund;
pub mod system;
