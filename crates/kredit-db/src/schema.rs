//! Schema definitions and migration runner for SurrealDB.
//!
//! All table definitions use SCHEMAFULL mode for data integrity.
//! Record ids are store-assigned integers drawn from `id_sequence`.
//! Monetary amounts are stored as exact decimal text and cast to
//! `decimal` where the schema compares them.

use serde::Deserialize;
use surrealdb::{Connection, Surreal};
use tracing::info;

use crate::error::DbError;

// -----------------------------------------------------------------------
// Migration tracking
// -----------------------------------------------------------------------

const MIGRATION_TABLE_DDL: &str = "\
DEFINE TABLE IF NOT EXISTS _migration SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS version ON TABLE _migration TYPE int;
DEFINE FIELD IF NOT EXISTS name ON TABLE _migration TYPE string;
DEFINE FIELD IF NOT EXISTS applied_at ON TABLE _migration TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_migration_version ON TABLE _migration \
    COLUMNS version UNIQUE;
";

#[derive(Debug, Deserialize)]
struct MigrationRecord {
    version: u32,
}

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    sql: SCHEMA_V1,
}];

// -----------------------------------------------------------------------
// Schema v1: initial table definitions
// -----------------------------------------------------------------------

const SCHEMA_V1: &str = "\
-- =======================================================================
-- Id sequences (one counter record per table)
-- =======================================================================
DEFINE TABLE id_sequence SCHEMAFULL;
DEFINE FIELD current ON TABLE id_sequence TYPE int;

-- =======================================================================
-- Customers
-- =======================================================================
DEFINE TABLE customer SCHEMAFULL;
DEFINE FIELD nik ON TABLE customer TYPE string \
    ASSERT string::len($value) > 0;
DEFINE FIELD password_hash ON TABLE customer TYPE string \
    ASSERT string::len($value) > 0;
DEFINE FIELD full_name ON TABLE customer TYPE string;
DEFINE FIELD legal_name ON TABLE customer TYPE string;
DEFINE FIELD birth_place ON TABLE customer TYPE string;
DEFINE FIELD birth_date ON TABLE customer TYPE string;
DEFINE FIELD salary ON TABLE customer TYPE string;
DEFINE FIELD ktp_photo ON TABLE customer TYPE option<string>;
DEFINE FIELD selfie_photo ON TABLE customer TYPE option<string>;
DEFINE FIELD created_at ON TABLE customer TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_customer_nik ON TABLE customer COLUMNS nik UNIQUE;

-- =======================================================================
-- Credit limits (one per customer by convention, not enforced)
-- =======================================================================
DEFINE TABLE credit_limit SCHEMAFULL;
DEFINE FIELD customer_id ON TABLE credit_limit TYPE int;
DEFINE FIELD tenor_1 ON TABLE credit_limit TYPE string \
    ASSERT <decimal> $value >= 0;
DEFINE FIELD tenor_2 ON TABLE credit_limit TYPE string \
    ASSERT <decimal> $value >= 0;
DEFINE FIELD tenor_3 ON TABLE credit_limit TYPE string \
    ASSERT <decimal> $value >= 0;
DEFINE FIELD tenor_4 ON TABLE credit_limit TYPE string \
    ASSERT <decimal> $value >= 0;
DEFINE FIELD created_at ON TABLE credit_limit TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_credit_limit_customer ON TABLE credit_limit \
    COLUMNS customer_id;

-- =======================================================================
-- Loan transactions (append-only)
-- =======================================================================
DEFINE TABLE loan_transaction SCHEMAFULL;
DEFINE FIELD customer_id ON TABLE loan_transaction TYPE int;
DEFINE FIELD contract_number ON TABLE loan_transaction TYPE string;
DEFINE FIELD otr ON TABLE loan_transaction TYPE string;
DEFINE FIELD admin_fee ON TABLE loan_transaction TYPE string;
DEFINE FIELD installment_amount ON TABLE loan_transaction TYPE string;
DEFINE FIELD interest_amount ON TABLE loan_transaction TYPE string;
DEFINE FIELD asset_name ON TABLE loan_transaction TYPE string;
DEFINE FIELD tenor ON TABLE loan_transaction TYPE int;
DEFINE FIELD created_at ON TABLE loan_transaction TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_loan_transaction_customer ON TABLE loan_transaction \
    COLUMNS customer_id;
";

/// Run all pending migrations against the given SurrealDB instance.
///
/// Creates a `_migration` tracking table on first run, then applies
/// each migration whose version exceeds the current maximum.
pub async fn run_migrations<C: Connection>(db: &Surreal<C>) -> Result<(), DbError> {
    db.query(MIGRATION_TABLE_DDL)
        .await?
        .check()
        .map_err(|e| DbError::Migration(e.to_string()))?;

    let mut result = db
        .query("SELECT * FROM _migration ORDER BY version DESC LIMIT 1")
        .await?;
    let records: Vec<MigrationRecord> = result.take(0)?;
    let current_version = records.first().map(|m| m.version).unwrap_or(0);

    for migration in MIGRATIONS {
        if migration.version > current_version {
            info!(
                version = migration.version,
                name = migration.name,
                "Applying migration"
            );
            db.query(migration.sql).await?.check().map_err(|e| {
                DbError::Migration(format!(
                    "Migration v{} '{}' failed: {}",
                    migration.version, migration.name, e,
                ))
            })?;

            db.query(
                "CREATE _migration SET version = $version, \
                 name = $name",
            )
            .bind(("version", migration.version))
            .bind(("name", migration.name))
            .await?
            .check()
            .map_err(|e| {
                DbError::Migration(format!(
                    "Failed to record migration v{}: {}",
                    migration.version, e,
                ))
            })?;

            info!(
                version = migration.version,
                "Migration applied successfully"
            );
        }
    }

    Ok(())
}

/// Returns the raw schema DDL for version 1.
pub fn schema_v1() -> &'static str {
    SCHEMA_V1
}
