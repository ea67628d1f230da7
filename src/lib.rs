//! Account self-service and user administration client.
//!
//! The core (API client, session store, route guard, feature flows) is
//! target-independent. The Leptos frontend is compiled for `wasm32` only; the
//! `userdesk` console binary drives the same flows natively.

#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod features;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub(crate) mod components;
#[cfg(target_arch = "wasm32")]
pub(crate) mod routes;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;

pub use app_lib::GIT_COMMIT_HASH;
