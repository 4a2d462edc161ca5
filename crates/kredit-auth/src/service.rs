//! Authentication service: login and bearer-token authentication.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use kredit_core::error::KreditResult;
use kredit_core::repository::CustomerRepository;
use tracing::warn;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password;
use crate::token::{self, SessionClaims};

/// Input for the login flow.
#[derive(Debug)]
pub struct LoginInput {
    pub nik: String,
    pub password: String,
}

/// Successful login result.
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed session token.
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: u64,
}

pub struct AuthService<R: CustomerRepository> {
    repo: R,
    config: AuthConfig,
    /// Hash verified against when the NIK is unknown, so both login
    /// failures cost one Argon2id verification.
    decoy_hash: OnceLock<Option<String>>,
}

impl<R: CustomerRepository> AuthService<R> {
    pub fn new(repo: R, config: AuthConfig) -> Self {
        Self {
            repo,
            config,
            decoy_hash: OnceLock::new(),
        }
    }

    /// Verify a NIK + password pair and issue a session token.
    ///
    /// An unknown NIK and a wrong password fail identically.
    pub async fn login(&self, input: LoginInput) -> KreditResult<LoginOutput> {
        let Some(customer) = self.repo.get_by_nik(&input.nik).await? else {
            self.burn_verification(&input.password);
            warn!(nik = %input.nik, "login failed: unknown NIK");
            return Err(AuthError::InvalidCredentials.into());
        };

        let valid = password::verify_password(
            &input.password,
            &customer.password_hash,
            self.config.pepper.as_deref(),
        )?;

        if !valid {
            warn!(nik = %input.nik, "login failed: password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token =
            token::issue_token(&customer.nik, &customer.full_name, &self.config, Utc::now())?;

        Ok(LoginOutput {
            token,
            expires_in: self.config.token_lifetime_secs,
        })
    }

    /// Resolve the session claims carried by an `Authorization` header.
    pub fn authenticate(
        &self,
        header: Option<&str>,
        now: DateTime<Utc>,
    ) -> KreditResult<SessionClaims> {
        let raw = token::bearer_token(header)?;
        Ok(token::validate_token(raw, &self.config, now)?)
    }

    fn burn_verification(&self, password: &str) {
        let decoy = self
            .decoy_hash
            .get_or_init(|| password::hash_password("kredit-decoy", &self.config).ok());
        if let Some(hash) = decoy {
            let _ = password::verify_password(password, hash, self.config.pepper.as_deref());
        }
    }
}
