//! SurrealDB implementation of [`TransactionRepository`].
//!
//! Pure append: no validation beyond what the admission engine has
//! already performed, and no update or delete path.

use kredit_core::error::KreditResult;
use kredit_core::models::transaction::{CreateTransaction, Transaction};
use kredit_core::repository::TransactionRepository;
use surrealdb::{Connection, Surreal};

use super::to_text;
use crate::error::DbError;
use crate::sequence::next_id;

/// SurrealDB implementation of the Transaction repository.
#[derive(Clone)]
pub struct SurrealTransactionRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealTransactionRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> TransactionRepository for SurrealTransactionRepository<C> {
    async fn create(&self, input: CreateTransaction) -> KreditResult<Transaction> {
        let id = next_id(&self.db, "loan_transaction").await?;

        self.db
            .query(
                "CREATE type::thing('loan_transaction', $id) SET \
                 customer_id = $customer_id, \
                 contract_number = $contract_number, \
                 otr = $otr, admin_fee = $admin_fee, \
                 installment_amount = $installment_amount, \
                 interest_amount = $interest_amount, \
                 asset_name = $asset_name, tenor = $tenor \
                 RETURN NONE",
            )
            .bind(("id", id))
            .bind(("customer_id", input.customer_id))
            .bind(("contract_number", input.contract_number.clone()))
            .bind(("otr", to_text(input.otr)))
            .bind(("admin_fee", to_text(input.admin_fee)))
            .bind(("installment_amount", to_text(input.installment_amount)))
            .bind(("interest_amount", to_text(input.interest_amount)))
            .bind(("asset_name", input.asset_name.clone()))
            .bind(("tenor", input.tenor))
            .await
            .map_err(DbError::from)?
            .check()
            .map_err(|e| DbError::from_statement("loan_transaction", e))?;

        Ok(input.into_transaction(id))
    }
}
