//! Kredit Core: domain models, error taxonomy and repository traits
//! shared by every crate in the loan-origination backend.

pub mod error;
pub mod models;
pub mod repository;
pub mod tenor;

pub use error::{KreditError, KreditResult};
pub use tenor::Tenor;
