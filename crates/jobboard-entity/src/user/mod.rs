//! User domain entities.

pub mod email;
pub mod model;

pub use email::{is_upper, normalize_email};
pub use model::{CreateUser, UpdateUser, User};
