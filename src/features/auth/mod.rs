//! Auth feature module covering the login flow, the session store, durable
//! token storage, and route guarding. It keeps authentication logic out of the
//! UI and must stay aligned with backend expectations. This module touches
//! security boundaries and must avoid logging passwords or token material.
//!
//! Flow Overview: Login posts credentials, persists the returned bearer token,
//! fetches `/users/me` with it, and only then commits the user to the session.
//! Logout clears the session user and the persisted token. On start the
//! provider re-validates a persisted token before guards let anything through.

pub mod client;
pub mod flow;
pub mod guards;
pub mod session;
#[cfg(target_arch = "wasm32")]
pub mod state;
pub mod token;
pub mod types;
pub mod validation;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireRoute;
