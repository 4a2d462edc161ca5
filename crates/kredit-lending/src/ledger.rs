//! Limit ledger: creation and lookup of credit limits.

use kredit_core::error::{KreditError, KreditResult};
use kredit_core::models::limit::{CreateLimit, Limit};
use kredit_core::repository::{CustomerRepository, LimitRepository};
use rust_decimal::Decimal;
use tracing::{info, warn};

pub struct LimitLedger<L: LimitRepository, C: CustomerRepository> {
    limits: L,
    customers: C,
}

impl<L: LimitRepository, C: CustomerRepository> LimitLedger<L, C> {
    pub fn new(limits: L, customers: C) -> Self {
        Self { limits, customers }
    }

    /// Record a limit for an existing customer.
    ///
    /// Additional limits for the same customer are accepted; lookups
    /// resolve to the earliest one.
    pub async fn create_limit(&self, input: CreateLimit) -> KreditResult<Limit> {
        validate(&input)?;

        if self.customers.get_by_id(input.customer_id).await?.is_none() {
            warn!(customer_id = input.customer_id, "limit rejected: unknown customer");
            return Err(KreditError::not_found("customer", input.customer_id));
        }

        let limit = self.limits.create(input).await?;
        info!(limit_id = limit.id, customer_id = limit.customer_id, "limit created");
        Ok(limit)
    }

    pub async fn get_by_customer_id(&self, customer_id: i64) -> KreditResult<Option<Limit>> {
        self.limits.get_by_customer_id(customer_id).await
    }
}

fn validate(input: &CreateLimit) -> KreditResult<()> {
    if input.customer_id <= 0 {
        return Err(KreditError::validation("customer_id must be positive"));
    }
    for (tenor, threshold) in input.thresholds() {
        if threshold < Decimal::ZERO {
            return Err(KreditError::validation(format!(
                "{tenor} threshold must not be negative"
            )));
        }
    }
    Ok(())
}
