//! Credit limit domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::tenor::Tenor;

/// Per-customer credit ceiling, segmented by tenor class.
///
/// Each threshold is the maximum installment amount allowed for a
/// transaction declared at that tenor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    pub id: i64,
    pub customer_id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub tenor_1: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tenor_2: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tenor_3: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tenor_4: Decimal,
}

impl Limit {
    pub fn threshold(&self, tenor: Tenor) -> Decimal {
        match tenor {
            Tenor::One => self.tenor_1,
            Tenor::Two => self.tenor_2,
            Tenor::Three => self.tenor_3,
            Tenor::Four => self.tenor_4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLimit {
    pub customer_id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub tenor_1: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tenor_2: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tenor_3: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tenor_4: Decimal,
}

impl CreateLimit {
    pub fn thresholds(&self) -> [(Tenor, Decimal); 4] {
        [
            (Tenor::One, self.tenor_1),
            (Tenor::Two, self.tenor_2),
            (Tenor::Three, self.tenor_3),
            (Tenor::Four, self.tenor_4),
        ]
    }
}
