//! Client helpers for current-user endpoints. All of them carry the stored
//! bearer token.

use crate::{
    app_lib::{AppError, ApiClient, transport::HttpTransport},
    features::{
        auth::{token::TokenStore, types::UserSummary},
        me::types::{ChangePasswordRequest, UpdateProfileRequest},
    },
};

/// Fetch the authenticated user's profile.
pub async fn fetch_me<T: HttpTransport, S: TokenStore>(
    api: &ApiClient<T, S>,
) -> Result<UserSummary, AppError> {
    api.get_json("/users/me").await
}

/// Update the full name and return the user as stored by the backend.
pub async fn update_profile<T: HttpTransport, S: TokenStore>(
    api: &ApiClient<T, S>,
    request: &UpdateProfileRequest,
) -> Result<UserSummary, AppError> {
    api.put_json("/users/me/profile", request).await
}

pub async fn change_password<T: HttpTransport, S: TokenStore>(
    api: &ApiClient<T, S>,
    request: &ChangePasswordRequest,
) -> Result<(), AppError> {
    api.put_json_empty("/users/me/change-password", request)
        .await
}
