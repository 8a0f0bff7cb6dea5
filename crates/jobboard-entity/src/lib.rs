//! # jobboard-entity
//!
//! Domain entity models for the job board. Every struct in this crate
//! represents a database table row or the data needed to create or change
//! one. Row entities derive `sqlx::FromRow`.
//!
//! Ownership is expressed as a plain `user_id` column on each owned row.
//! Applicants are modelled by composition: a [`user::User`] plus an
//! optional [`applicant::ApplicantProfile`] keyed by the same id.

pub mod applicant;
pub mod job;
pub mod portal;
pub mod token;
pub mod user;
