//! The caller's own applicant profile.

pub mod service;

pub use service::{ApplicantInput, ApplicantService};
