//! User accounts: creation rules and self-service profile management.

pub mod manager;
pub mod service;

pub use manager::UserManager;
pub use service::{ProfileChanges, RegisterUser, UserService};
