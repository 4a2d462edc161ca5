//! SurrealDB repository implementations.

mod customer;
mod limit;
mod transaction;

pub use customer::SurrealCustomerRepository;
pub use limit::SurrealLimitRepository;
pub use transaction::SurrealTransactionRepository;

use rust_decimal::Decimal;

/// Amounts are stored as their exact decimal text, never as floats.
pub(crate) fn to_text(amount: Decimal) -> String {
    amount.to_string()
}
