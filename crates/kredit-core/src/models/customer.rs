//! Customer domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    /// National identity number. Unique, immutable login identifier.
    pub nik: String,
    /// Argon2id PHC string. Never serialized outward.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub full_name: String,
    pub legal_name: String,
    pub birth_place: String,
    pub birth_date: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub salary: Decimal,
    /// AES-256-GCM encrypted ID card photo, `base64(nonce || ciphertext || tag)`.
    pub ktp_photo: Option<String>,
    /// AES-256-GCM encrypted selfie photo, same encoding as `ktp_photo`.
    pub selfie_photo: Option<String>,
}

/// Registration request as submitted by the customer.
#[derive(Debug, Clone, Default)]
pub struct RegisterCustomer {
    pub nik: String,
    /// Raw password (hashed with Argon2id before storage).
    pub password: String,
    pub full_name: String,
    pub legal_name: String,
    pub birth_place: String,
    pub birth_date: String,
    pub salary: Decimal,
    /// Raw document bytes (encrypted before storage).
    pub ktp_photo: Option<Vec<u8>>,
    pub selfie_photo: Option<Vec<u8>>,
}

/// Storage-ready customer record: credential hashed, documents sealed.
#[derive(Debug, Clone)]
pub struct CreateCustomer {
    pub nik: String,
    pub password_hash: String,
    pub full_name: String,
    pub legal_name: String,
    pub birth_place: String,
    pub birth_date: String,
    pub salary: Decimal,
    pub ktp_photo: Option<String>,
    pub selfie_photo: Option<String>,
}
