//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Lookups return `Ok(None)` when
//! the record is absent so that "not found" stays distinguishable from
//! a storage failure.

use crate::error::KreditResult;
use crate::models::{
    customer::{CreateCustomer, Customer},
    limit::{CreateLimit, Limit},
    transaction::{CreateTransaction, Transaction},
};

pub trait CustomerRepository: Send + Sync {
    /// Insert a customer. Fails with `AlreadyExists` if the NIK is taken.
    fn create(&self, input: CreateCustomer) -> impl Future<Output = KreditResult<Customer>> + Send;
    fn get_by_id(&self, id: i64) -> impl Future<Output = KreditResult<Option<Customer>>> + Send;
    fn get_by_nik(&self, nik: &str)
    -> impl Future<Output = KreditResult<Option<Customer>>> + Send;
}

pub trait LimitRepository: Send + Sync {
    /// Persist all four tenor thresholds as one record.
    fn create(&self, input: CreateLimit) -> impl Future<Output = KreditResult<Limit>> + Send;
    /// When several limits exist for one customer, the earliest created
    /// one is returned.
    fn get_by_customer_id(
        &self,
        customer_id: i64,
    ) -> impl Future<Output = KreditResult<Option<Limit>>> + Send;
}

/// Append-only store of admitted transactions.
pub trait TransactionRepository: Send + Sync {
    fn create(
        &self,
        input: CreateTransaction,
    ) -> impl Future<Output = KreditResult<Transaction>> + Send;
}
