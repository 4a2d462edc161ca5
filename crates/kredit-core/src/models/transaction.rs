//! Financed transaction domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An admitted, persisted transaction. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub customer_id: i64,
    pub contract_number: String,
    /// On-the-road price.
    #[serde(with = "rust_decimal::serde::float")]
    pub otr: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub admin_fee: Decimal,
    /// The amount checked against the customer's tenor threshold.
    #[serde(with = "rust_decimal::serde::float")]
    pub installment_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub interest_amount: Decimal,
    pub asset_name: String,
    pub tenor: i64,
}

/// A proposed transaction awaiting admission.
///
/// `tenor` is kept as the raw declared class so that out-of-range
/// values reach the admission decision and are rejected there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransaction {
    pub customer_id: i64,
    #[serde(default)]
    pub contract_number: String,
    #[serde(with = "rust_decimal::serde::float", default)]
    pub otr: Decimal,
    #[serde(with = "rust_decimal::serde::float", default)]
    pub admin_fee: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub installment_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float", default)]
    pub interest_amount: Decimal,
    #[serde(default)]
    pub asset_name: String,
    pub tenor: i64,
}

impl CreateTransaction {
    pub fn into_transaction(self, id: i64) -> Transaction {
        Transaction {
            id,
            customer_id: self.customer_id,
            contract_number: self.contract_number,
            otr: self.otr,
            admin_fee: self.admin_fee,
            installment_amount: self.installment_amount,
            interest_amount: self.interest_amount,
            asset_name: self.asset_name,
            tenor: self.tenor,
        }
    }
}
