//! Request and response bodies that differ from the domain models.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use kredit_core::error::{KreditError, KreditResult};
use kredit_core::models::customer::RegisterCustomer;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Registration payload. Document photos arrive base64-encoded.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub nik: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub legal_name: String,
    #[serde(default)]
    pub birth_place: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(with = "rust_decimal::serde::float", default)]
    pub salary: Decimal,
    #[serde(default)]
    pub ktp_photo: Option<String>,
    #[serde(default)]
    pub selfie_photo: Option<String>,
}

impl RegisterRequest {
    pub fn into_candidate(self) -> KreditResult<RegisterCustomer> {
        Ok(RegisterCustomer {
            ktp_photo: decode_photo("ktp_photo", self.ktp_photo)?,
            selfie_photo: decode_photo("selfie_photo", self.selfie_photo)?,
            nik: self.nik,
            password: self.password,
            full_name: self.full_name,
            legal_name: self.legal_name,
            birth_place: self.birth_place,
            birth_date: self.birth_date,
            salary: self.salary,
        })
    }
}

fn decode_photo(field: &str, encoded: Option<String>) -> KreditResult<Option<Vec<u8>>> {
    encoded
        .map(|s| {
            STANDARD
                .decode(s.trim())
                .map_err(|_| KreditError::validation(format!("{field} must be base64")))
        })
        .transpose()
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub nik: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
