//! # jobboard-service
//!
//! Business logic for the job board. Every owner-scoped operation takes a
//! [`context::RequestContext`] naming the authenticated caller; nothing is
//! read from ambient per-request state.

pub mod applicant;
pub mod auth;
pub mod context;
pub mod job;
pub mod portal;
pub mod user;
pub mod validation;

pub use context::RequestContext;
pub use validation::{FieldErrors, WriteMode};
