//! Kredit Lending: per-customer credit limits and the admission
//! decision for proposed transactions.

pub mod admission;
pub mod ledger;

pub use admission::{AdmissionEngine, Decision, Rejection, evaluate};
pub use ledger::LimitLedger;
