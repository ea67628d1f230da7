//! Current-user feature: profile fetch, full name update, password change.

pub mod client;
pub mod profile;
pub mod types;
