//! # jobboard-database
//!
//! Persistence for the job board. Services talk to the store traits in
//! [`store`]; two implementations exist:
//!
//! - [`repositories`]: PostgreSQL via sqlx, with migrations in `migrations/`
//! - [`memory`]: a process-local store used for tests and demos
//!
//! [`provider::Database`] picks one from configuration.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use provider::Database;
