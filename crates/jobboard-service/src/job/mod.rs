//! Job descriptions and the job titles built on them.

pub mod description;
pub mod title;

pub use description::{JobDescriptionInput, JobDescriptionService};
pub use title::{JobTitleInput, JobTitleService};
