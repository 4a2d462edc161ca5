//! Customer directory: registration and lookup.

use kredit_core::error::{KreditError, KreditResult};
use kredit_core::models::customer::{CreateCustomer, Customer, RegisterCustomer};
use kredit_core::repository::CustomerRepository;
use tracing::{info, warn};

use crate::cipher;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password;

/// Registers customers and resolves them by NIK or id.
///
/// Generic over the repository so the directory has no dependency on
/// the database crate.
pub struct CustomerDirectory<R: CustomerRepository> {
    repo: R,
    config: AuthConfig,
}

impl<R: CustomerRepository> CustomerDirectory<R> {
    pub fn new(repo: R, config: AuthConfig) -> Self {
        Self { repo, config }
    }

    /// Register a new customer.
    ///
    /// Document photos are sealed and the password hashed before the
    /// record is stored. The returned customer has an empty
    /// `password_hash`.
    pub async fn register(&self, input: RegisterCustomer) -> KreditResult<Customer> {
        validate(&input)?;

        let ktp_photo = self.seal(input.ktp_photo.as_deref())?;
        let selfie_photo = self.seal(input.selfie_photo.as_deref())?;

        let password_hash = password::hash_password(&input.password, &self.config)?;

        if self.repo.get_by_nik(&input.nik).await?.is_some() {
            warn!(nik = %input.nik, "registration rejected: NIK already exists");
            return Err(KreditError::AlreadyExists {
                entity: "customer".into(),
            });
        }

        let mut customer = self
            .repo
            .create(CreateCustomer {
                nik: input.nik,
                password_hash,
                full_name: input.full_name,
                legal_name: input.legal_name,
                birth_place: input.birth_place,
                birth_date: input.birth_date,
                salary: input.salary,
                ktp_photo,
                selfie_photo,
            })
            .await?;

        customer.password_hash.clear();
        info!(customer_id = customer.id, nik = %customer.nik, "customer registered");
        Ok(customer)
    }

    pub async fn find_by_nik(&self, nik: &str) -> KreditResult<Option<Customer>> {
        self.repo.get_by_nik(nik).await
    }

    pub async fn find_by_id(&self, id: i64) -> KreditResult<Option<Customer>> {
        self.repo.get_by_id(id).await
    }

    fn seal(&self, document: Option<&[u8]>) -> Result<Option<String>, AuthError> {
        let Some(bytes) = document.filter(|b| !b.is_empty()) else {
            return Ok(None);
        };
        let key = self
            .config
            .document_key
            .as_ref()
            .ok_or_else(|| AuthError::Encryption("document key is not configured".into()))?;
        cipher::encrypt_document(key, bytes).map(Some)
    }
}

fn validate(input: &RegisterCustomer) -> KreditResult<()> {
    let required = [
        ("nik", &input.nik),
        ("password", &input.password),
        ("full_name", &input.full_name),
        ("legal_name", &input.legal_name),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(KreditError::validation(format!("{field} is required")));
        }
    }
    Ok(())
}
