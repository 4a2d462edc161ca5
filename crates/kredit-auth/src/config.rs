//! Authentication configuration.

/// Configuration for registration, login and token validation.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Symmetric secret for HMAC-signed session tokens.
    pub jwt_secret: String,
    /// Session token lifetime in seconds (default: 1800 = 30 minutes).
    pub token_lifetime_secs: u64,
    /// Optional pepper prepended to passwords before Argon2id hashing.
    pub pepper: Option<String>,
    /// Argon2id memory cost in KiB (default: 19456 = 19 MiB).
    pub password_memory_kib: u32,
    /// Argon2id iteration count (default: 2).
    pub password_iterations: u32,
    /// Argon2id degree of parallelism (default: 1).
    pub password_parallelism: u32,
    /// 256-bit AES-GCM key for encrypting identity documents at rest.
    /// `None` rejects registrations that carry document photos.
    pub document_key: Option<[u8; 32]>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_lifetime_secs: 1800,
            pepper: None,
            password_memory_kib: 19456,
            password_iterations: 2,
            password_parallelism: 1,
            document_key: None,
        }
    }
}
