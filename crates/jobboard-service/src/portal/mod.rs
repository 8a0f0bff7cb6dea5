//! Job portal management.

pub mod service;

pub use service::{PortalInput, PortalService};
