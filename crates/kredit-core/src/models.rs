//! Domain models for Kredit.
//!
//! Entities reference each other by numeric id only; there are no
//! object graphs between customers, limits and transactions.

pub mod customer;
pub mod limit;
pub mod transaction;
