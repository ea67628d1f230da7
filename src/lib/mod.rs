//! Shared frontend utilities for API access, configuration, errors, and build metadata.
//!
//! ## Request Flow
//!
//! 1. **Build:** Feature clients call the [`api::ApiClient`] helpers with a path
//!    relative to the configured API base URL.
//! 2. **Authorize:** Authenticated helpers read the bearer token from durable
//!    storage right before the request is sent, so a token persisted a moment
//!    ago is attached to the very next call.
//! 3. **Send:** The [`transport::HttpTransport`] implementation moves the bytes
//!    (`gloo-net` in the browser, `reqwest` natively).
//! 4. **Map:** Non-2xx responses become [`AppError::Http`] carrying the
//!    backend's `detail` text when it sent one.
//!
//! There are no retries and no timeouts; a request runs until the transport
//! reports an outcome.

pub mod api;
pub mod build_info;
pub mod config;
pub mod errors;
#[cfg(target_arch = "wasm32")]
pub mod logging;
#[cfg(test)]
pub(crate) mod mock;
pub mod transport;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub use api::{ApiClient, Auth};
pub use errors::AppError;
