//! Client wrappers for the unauthenticated auth endpoints. Credentials travel
//! only in request bodies and are never logged.

use crate::{
    app_lib::{AppError, ApiClient, Auth, transport::HttpTransport},
    features::auth::{
        token::TokenStore,
        types::{LoginRequest, SignupRequest, TokenResponse},
    },
};

/// Exchanges credentials for a bearer token.
pub async fn login<T: HttpTransport, S: TokenStore>(
    api: &ApiClient<T, S>,
    request: &LoginRequest,
) -> Result<TokenResponse, AppError> {
    api.post_json("/auth/login", request, Auth::Anonymous).await
}

/// Creates an account; the response body is not used.
pub async fn signup<T: HttpTransport, S: TokenStore>(
    api: &ApiClient<T, S>,
    request: &SignupRequest,
) -> Result<(), AppError> {
    api.post_json_empty("/auth/signup", request, Auth::Anonymous)
        .await
}
