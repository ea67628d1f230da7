//! HTTP helpers for JSON APIs with consistent error handling. Feature clients
//! use these helpers to avoid duplicating request setup. The client reads the
//! bearer token from durable storage on every authenticated request and never
//! logs it; callers must still avoid logging passwords they put in bodies.

use super::{errors::AppError, transport::HttpTransport};
use crate::features::auth::token::TokenStore;
use secrecy::SecretString;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

/// Whether a request carries the stored bearer token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Auth {
    Anonymous,
    Bearer,
}

/// A fully built request handed to the transport.
#[derive(Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
    pub bearer: Option<SecretString>,
}

/// Raw status and body returned by the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// REST client bound to one API base URL, a transport and the token storage.
#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    base_url: String,
    transport: T,
    tokens: S,
}

impl<T: HttpTransport, S: TokenStore> ApiClient<T, S> {
    pub fn new(base_url: impl Into<String>, transport: T, tokens: S) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            tokens,
        }
    }

    /// Durable token storage shared with the session store.
    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    /// Fetches JSON with the stored bearer token.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, AppError> {
        let response = self.send(Method::Get, path, None, Auth::Bearer).await?;
        handle_json_response(response)
    }

    /// Posts JSON and parses a JSON response.
    pub async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<R, AppError> {
        let payload = encode_body(body)?;
        let response = self.send(Method::Post, path, Some(payload), auth).await?;
        handle_json_response(response)
    }

    /// Posts JSON and ignores any response body.
    pub async fn post_json_empty<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        auth: Auth,
    ) -> Result<(), AppError> {
        let payload = encode_body(body)?;
        let response = self.send(Method::Post, path, Some(payload), auth).await?;
        handle_empty_response(response)
    }

    /// Puts JSON with the stored bearer token and parses a JSON response.
    pub async fn put_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, AppError> {
        let payload = encode_body(body)?;
        let response = self
            .send(Method::Put, path, Some(payload), Auth::Bearer)
            .await?;
        handle_json_response(response)
    }

    /// Puts JSON with the stored bearer token and ignores any response body.
    pub async fn put_json_empty<B: Serialize>(&self, path: &str, body: &B) -> Result<(), AppError> {
        let payload = encode_body(body)?;
        let response = self
            .send(Method::Put, path, Some(payload), Auth::Bearer)
            .await?;
        handle_empty_response(response)
    }

    /// Puts without a body, used by the account status toggles.
    pub async fn put_empty(&self, path: &str) -> Result<(), AppError> {
        let response = self.send(Method::Put, path, None, Auth::Bearer).await?;
        handle_empty_response(response)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        auth: Auth,
    ) -> Result<ApiResponse, AppError> {
        let bearer = match auth {
            Auth::Bearer => self.tokens.load(),
            Auth::Anonymous => None,
        };
        let request = ApiRequest {
            method,
            url: build_url_with_base(&self.base_url, path),
            body,
            bearer,
        };
        tracing::debug!(method = method.as_str(), path, "sending api request");
        let response = self.transport.send(request).await?;
        tracing::debug!(
            method = method.as_str(),
            path,
            status = response.status,
            "api response"
        );
        Ok(response)
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, AppError> {
    serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))
}

/// Builds a URL from an explicit base URL and the provided path.
pub(crate) fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
fn handle_json_response<T: DeserializeOwned>(response: ApiResponse) -> Result<T, AppError> {
    if response.is_success() {
        serde_json::from_str::<T>(&response.body)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response))
    }
}

/// Handles empty responses and returns sanitized HTTP errors when needed.
fn handle_empty_response(response: ApiResponse) -> Result<(), AppError> {
    if response.is_success() {
        Ok(())
    } else {
        Err(http_error(response))
    }
}

fn http_error(response: ApiResponse) -> AppError {
    let detail = extract_detail(&response.body);
    AppError::Http {
        status: response.status,
        message: sanitize_body(&response.body),
        detail,
    }
}

/// Pulls the backend's `detail` field: either a plain string or the first
/// `msg` of a validation error list.
fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let detail = match value.get("detail")? {
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(Value::as_str))?
            .to_string(),
        _ => return None,
    };
    let detail = detail.trim();
    if detail.is_empty() {
        None
    } else {
        Some(detail.chars().take(MAX_ERROR_CHARS).collect())
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
