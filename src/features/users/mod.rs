//! Admin user management: paginated listing and account activation.

pub mod admin;
pub mod client;
pub mod types;
