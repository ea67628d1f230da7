//! Scripted transport for unit tests: queued responses, recorded requests.

use super::api::{ApiRequest, ApiResponse, Method};
use super::errors::AppError;
use super::transport::HttpTransport;
use secrecy::ExposeSecret;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
    pub bearer: Option<String>,
}

impl RecordedRequest {
    /// URL with the test base stripped, e.g. `/users?page=2&limit=10`.
    pub fn path(&self) -> &str {
        self.url.strip_prefix("http://api.test").unwrap_or(&self.url)
    }
}

#[derive(Default)]
struct MockState {
    responses: VecDeque<Result<ApiResponse, AppError>>,
    requests: Vec<RecordedRequest>,
}

#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn respond(&self, status: u16, body: serde_json::Value) {
        self.respond_raw(status, &body.to_string());
    }

    pub fn respond_raw(&self, status: u16, body: &str) {
        self.lock().responses.push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, err: AppError) {
        self.lock().responses.push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
        let mut state = self.lock();
        state.requests.push(RecordedRequest {
            method: request.method,
            url: request.url,
            body: request.body,
            bearer: request
                .bearer
                .as_ref()
                .map(|token| token.expose_secret().to_string()),
        });
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Network("no scripted response".to_string())))
    }
}
