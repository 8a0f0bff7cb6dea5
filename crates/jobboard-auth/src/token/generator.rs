//! Random token key generation.

use std::fmt::Write;

use argon2::password_hash::rand_core::{OsRng, RngCore};

use jobboard_core::config::AuthConfig;

/// Produces hex-encoded keys from the operating system RNG.
#[derive(Debug, Clone)]
pub struct TokenGenerator {
    bytes: usize,
}

impl TokenGenerator {
    /// Creates a generator producing `config.token_bytes` random bytes per key.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            bytes: config.token_bytes.max(1),
        }
    }

    /// Generates a fresh key of `2 * token_bytes` lowercase hex characters.
    pub fn generate(&self) -> String {
        let mut buf = vec![0u8; self.bytes];
        OsRng.fill_bytes(&mut buf);

        let mut key = String::with_capacity(self.bytes * 2);
        for byte in &buf {
            let _ = write!(key, "{byte:02x}");
        }
        key
    }
}
