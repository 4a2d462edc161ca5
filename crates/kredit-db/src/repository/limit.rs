//! SurrealDB implementation of [`LimitRepository`].
//!
//! No uniqueness is enforced on `customer_id`. When a customer has more
//! than one limit on file, lookups return the earliest created record.

use kredit_core::error::KreditResult;
use kredit_core::models::limit::{CreateLimit, Limit};
use kredit_core::repository::LimitRepository;
use rust_decimal::Decimal;
use serde::Deserialize;
use surrealdb::{Connection, Surreal};

use super::to_text;
use crate::error::DbError;
use crate::sequence::next_id;

#[derive(Debug, Deserialize)]
struct LimitRow {
    record_id: i64,
    customer_id: i64,
    tenor_1: Decimal,
    tenor_2: Decimal,
    tenor_3: Decimal,
    tenor_4: Decimal,
}

impl From<LimitRow> for Limit {
    fn from(row: LimitRow) -> Self {
        Limit {
            id: row.record_id,
            customer_id: row.customer_id,
            tenor_1: row.tenor_1,
            tenor_2: row.tenor_2,
            tenor_3: row.tenor_3,
            tenor_4: row.tenor_4,
        }
    }
}

/// SurrealDB implementation of the Limit repository.
#[derive(Clone)]
pub struct SurrealLimitRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealLimitRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> LimitRepository for SurrealLimitRepository<C> {
    async fn create(&self, input: CreateLimit) -> KreditResult<Limit> {
        let id = next_id(&self.db, "credit_limit").await?;

        self.db
            .query(
                "CREATE type::thing('credit_limit', $id) SET \
                 customer_id = $customer_id, \
                 tenor_1 = $tenor_1, tenor_2 = $tenor_2, \
                 tenor_3 = $tenor_3, tenor_4 = $tenor_4 \
                 RETURN NONE",
            )
            .bind(("id", id))
            .bind(("customer_id", input.customer_id))
            .bind(("tenor_1", to_text(input.tenor_1)))
            .bind(("tenor_2", to_text(input.tenor_2)))
            .bind(("tenor_3", to_text(input.tenor_3)))
            .bind(("tenor_4", to_text(input.tenor_4)))
            .await
            .map_err(DbError::from)?
            .check()
            .map_err(|e| DbError::from_statement("credit_limit", e))?;

        Ok(Limit {
            id,
            customer_id: input.customer_id,
            tenor_1: input.tenor_1,
            tenor_2: input.tenor_2,
            tenor_3: input.tenor_3,
            tenor_4: input.tenor_4,
        })
    }

    async fn get_by_customer_id(&self, customer_id: i64) -> KreditResult<Option<Limit>> {
        let mut result = self
            .db
            .query(
                "SELECT record::id(id) AS record_id, customer_id, \
                 tenor_1, tenor_2, tenor_3, tenor_4 \
                 FROM credit_limit WHERE customer_id = $customer_id \
                 ORDER BY record_id ASC LIMIT 1",
            )
            .bind(("customer_id", customer_id))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<LimitRow> = result.take(0).map_err(DbError::from)?;
        Ok(rows.into_iter().next().map(Limit::from))
    }
}
