//! Store-assigned numeric ids.
//!
//! Each table draws ids from its own counter record in `id_sequence`.
//! The increment is a single `UPSERT` statement, so concurrent callers
//! never observe the same value.

use serde::Deserialize;
use surrealdb::{Connection, Surreal};

use crate::error::DbError;

#[derive(Debug, Deserialize)]
struct SequenceRow {
    current: i64,
}

pub(crate) async fn next_id<C: Connection>(
    db: &Surreal<C>,
    sequence: &'static str,
) -> Result<i64, DbError> {
    let mut result = db
        .query(
            "UPSERT type::thing('id_sequence', $sequence) \
             SET current = (current OR 0) + 1 RETURN AFTER",
        )
        .bind(("sequence", sequence))
        .await?
        .check()?;

    let rows: Vec<SequenceRow> = result.take(0)?;
    rows.into_iter()
        .next()
        .map(|row| row.current)
        .ok_or_else(|| DbError::Corrupt {
            entity: "id_sequence".into(),
            detail: format!("sequence '{sequence}' returned no value"),
        })
}
