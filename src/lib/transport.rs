//! Transport seam between [`ApiClient`](super::api::ApiClient) and the actual
//! HTTP stack: `gloo-net` in the browser, `reqwest` for the console binary.
//! Transports only move bytes; status handling lives in the API helpers.

use super::api::{ApiRequest, ApiResponse};
use super::errors::AppError;

/// Sends one request and returns the raw status and body.
///
/// The browser runs a single UI task at a time, so implementations are not
/// required to produce `Send` futures.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError>;
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserTransport;
#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestTransport;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::HttpTransport;
    use crate::app_lib::api::{ApiRequest, ApiResponse, Method};
    use crate::app_lib::errors::AppError;
    use gloo_net::http::{Request, RequestBuilder};
    use secrecy::ExposeSecret;

    /// Fetch-based transport used by the web frontend.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserTransport;

    impl HttpTransport for BrowserTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
            let mut builder: RequestBuilder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
            };
            if let Some(token) = &request.bearer {
                builder = builder.header(
                    "Authorization",
                    &format!("Bearer {}", token.expose_secret()),
                );
            }

            let built = match request.body {
                Some(body) => builder
                    .header("Content-Type", "application/json")
                    .body(body),
                None => builder.build(),
            }
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;

            let response = built.send().await.map_err(map_request_error)?;
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Ok(ApiResponse { status, body })
        }
    }

    fn map_request_error(err: gloo_net::Error) -> AppError {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::HttpTransport;
    use crate::app_lib::api::{ApiRequest, ApiResponse, Method};
    use crate::app_lib::errors::AppError;
    use secrecy::ExposeSecret;

    /// `reqwest`-backed transport used by the console binary.
    #[derive(Clone, Debug, Default)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    impl HttpTransport for ReqwestTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
            };
            let mut builder = self.client.request(method, &request.url);
            if let Some(token) = &request.bearer {
                builder = builder.bearer_auth(token.expose_secret());
            }
            if let Some(body) = request.body {
                builder = builder
                    .header(reqwest::header::CONTENT_TYPE, "application/json")
                    .body(body);
            }

            let response = builder.send().await.map_err(|err| {
                AppError::Network(format!("Unable to reach the server: {err}"))
            })?;
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Ok(ApiResponse { status, body })
        }
    }
}
