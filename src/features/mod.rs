//! Domain-level features (auth, me, users) and their shared logic. Routes and
//! console commands import these modules to keep view code focused while
//! keeping security and API handling in dedicated feature areas.

pub mod auth;
pub mod me;
pub mod users;
