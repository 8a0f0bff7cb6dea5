//! # jobboard-auth
//!
//! Credential primitives for the job board:
//!
//! - [`password`]: argon2id hashing and the minimum-length password policy
//! - [`token`]: opaque key generation, `Authorization: Token <key>` parsing,
//!   and resolution of a key to an active user

pub mod password;
pub mod token;

pub use password::{PasswordHasher, PasswordValidator};
pub use token::{TokenAuthenticator, TokenGenerator};
