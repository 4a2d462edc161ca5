//! SurrealDB implementation of [`CustomerRepository`].
//!
//! The credential arrives already hashed and the document blobs already
//! sealed; this layer stores what it is given.

use kredit_core::error::KreditResult;
use kredit_core::models::customer::{CreateCustomer, Customer};
use kredit_core::repository::CustomerRepository;
use rust_decimal::Decimal;
use serde::Deserialize;
use surrealdb::{Connection, Surreal};

use super::to_text;
use crate::error::DbError;
use crate::sequence::next_id;

const CUSTOMER_FIELDS: &str = "record::id(id) AS record_id, nik, password_hash, \
     full_name, legal_name, birth_place, birth_date, salary, \
     ktp_photo, selfie_photo";

#[derive(Debug, Deserialize)]
struct CustomerRow {
    record_id: i64,
    nik: String,
    password_hash: String,
    full_name: String,
    legal_name: String,
    birth_place: String,
    birth_date: String,
    salary: Decimal,
    ktp_photo: Option<String>,
    selfie_photo: Option<String>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.record_id,
            nik: row.nik,
            password_hash: row.password_hash,
            full_name: row.full_name,
            legal_name: row.legal_name,
            birth_place: row.birth_place,
            birth_date: row.birth_date,
            salary: row.salary,
            ktp_photo: row.ktp_photo,
            selfie_photo: row.selfie_photo,
        }
    }
}

/// SurrealDB implementation of the Customer repository.
#[derive(Clone)]
pub struct SurrealCustomerRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealCustomerRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> CustomerRepository for SurrealCustomerRepository<C> {
    async fn create(&self, input: CreateCustomer) -> KreditResult<Customer> {
        let id = next_id(&self.db, "customer").await?;

        self.db
            .query(
                "CREATE type::thing('customer', $id) SET \
                 nik = $nik, password_hash = $password_hash, \
                 full_name = $full_name, legal_name = $legal_name, \
                 birth_place = $birth_place, birth_date = $birth_date, \
                 salary = $salary, \
                 ktp_photo = $ktp_photo, selfie_photo = $selfie_photo \
                 RETURN NONE",
            )
            .bind(("id", id))
            .bind(("nik", input.nik.clone()))
            .bind(("password_hash", input.password_hash.clone()))
            .bind(("full_name", input.full_name.clone()))
            .bind(("legal_name", input.legal_name.clone()))
            .bind(("birth_place", input.birth_place.clone()))
            .bind(("birth_date", input.birth_date.clone()))
            .bind(("salary", to_text(input.salary)))
            .bind(("ktp_photo", input.ktp_photo.clone()))
            .bind(("selfie_photo", input.selfie_photo.clone()))
            .await
            .map_err(DbError::from)?
            .check()
            .map_err(|e| DbError::from_statement("customer", e))?;

        Ok(Customer {
            id,
            nik: input.nik,
            password_hash: input.password_hash,
            full_name: input.full_name,
            legal_name: input.legal_name,
            birth_place: input.birth_place,
            birth_date: input.birth_date,
            salary: input.salary,
            ktp_photo: input.ktp_photo,
            selfie_photo: input.selfie_photo,
        })
    }

    async fn get_by_id(&self, id: i64) -> KreditResult<Option<Customer>> {
        let mut result = self
            .db
            .query(format!(
                "SELECT {CUSTOMER_FIELDS} FROM type::thing('customer', $id)"
            ))
            .bind(("id", id))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<CustomerRow> = result.take(0).map_err(DbError::from)?;
        Ok(rows.into_iter().next().map(Customer::from))
    }

    async fn get_by_nik(&self, nik: &str) -> KreditResult<Option<Customer>> {
        let mut result = self
            .db
            .query(format!(
                "SELECT {CUSTOMER_FIELDS} FROM customer WHERE nik = $nik LIMIT 1"
            ))
            .bind(("nik", nik.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<CustomerRow> = result.take(0).map_err(DbError::from)?;
        Ok(rows.into_iter().next().map(Customer::from))
    }
}
