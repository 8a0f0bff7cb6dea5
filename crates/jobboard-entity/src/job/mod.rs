//! Job description and job title entities.

pub mod description;
pub mod title;

pub use description::{CreateJobDescription, JobDescription, UpdateJobDescription};
pub use title::{CreateJobTitle, JobTitle, UpdateJobTitle};
