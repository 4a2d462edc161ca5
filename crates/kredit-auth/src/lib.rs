//! Kredit Auth: customer registration, password verification,
//! session token issuance/validation and document encryption.

pub mod cipher;
pub mod config;
pub mod directory;
pub mod error;
pub mod password;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use directory::CustomerDirectory;
pub use error::AuthError;
pub use service::{AuthService, LoginInput, LoginOutput};
pub use token::SessionClaims;
