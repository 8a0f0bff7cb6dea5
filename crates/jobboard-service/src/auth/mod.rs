//! Token issuance for email/password credentials.

pub mod token;

pub use token::{ObtainToken, TokenService};
