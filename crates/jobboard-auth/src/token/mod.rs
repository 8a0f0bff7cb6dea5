//! Opaque token issuance and authentication.

pub mod authenticator;
pub mod generator;
pub mod header;

pub use authenticator::TokenAuthenticator;
pub use generator::TokenGenerator;
pub use header::parse_authorization;
