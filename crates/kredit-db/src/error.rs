//! Database-specific error types and conversions.

use kredit_core::error::KreditError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Duplicate {entity}: {detail}")]
    Duplicate { entity: String, detail: String },

    #[error("Corrupt {entity} record: {detail}")]
    Corrupt { entity: String, detail: String },
}

impl DbError {
    /// Reclassify a failed statement: unique index violations become
    /// [`DbError::Duplicate`], everything else stays a storage failure.
    pub(crate) fn from_statement(entity: &str, err: surrealdb::Error) -> Self {
        let detail = err.to_string();
        if detail.contains("already contains") {
            DbError::Duplicate {
                entity: entity.into(),
                detail,
            }
        } else {
            DbError::Surreal(err)
        }
    }
}

impl From<DbError> for KreditError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Duplicate { entity, .. } => KreditError::AlreadyExists { entity },
            other => KreditError::Database(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_maps_to_already_exists() {
        let err: KreditError = DbError::Duplicate {
            entity: "customer".into(),
            detail: "index `idx_customer_nik` already contains '1'".into(),
        }
        .into();
        assert!(matches!(err, KreditError::AlreadyExists { entity } if entity == "customer"));
    }

    #[test]
    fn other_failures_map_to_database() {
        let err: KreditError = DbError::Migration("boom".into()).into();
        assert!(matches!(err, KreditError::Database(_)));
        assert!(err.is_server_error());
    }
}
