//! Client helpers for admin user endpoints. These functions keep endpoint
//! paths centralized and assume the backend enforces authorization.

use crate::{
    app_lib::{AppError, ApiClient, transport::HttpTransport},
    features::{
        auth::{token::TokenStore, types::UserSummary},
        users::types::UserPage,
    },
};

/// Fetches one page of users.
pub async fn list_users<T: HttpTransport, S: TokenStore>(
    api: &ApiClient<T, S>,
    page: u32,
    limit: u32,
) -> Result<Vec<UserSummary>, AppError> {
    let page: UserPage = api
        .get_json(&format!("/users?page={page}&limit={limit}"))
        .await?;
    Ok(page.users)
}

pub async fn activate_user<T: HttpTransport, S: TokenStore>(
    api: &ApiClient<T, S>,
    id: &str,
) -> Result<(), AppError> {
    api.put_empty(&status_path(id, "activate")?).await
}

pub async fn deactivate_user<T: HttpTransport, S: TokenStore>(
    api: &ApiClient<T, S>,
    id: &str,
) -> Result<(), AppError> {
    api.put_empty(&status_path(id, "deactivate")?).await
}

fn status_path(id: &str, action: &str) -> Result<String, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("User id is required.".to_string()));
    }
    Ok(format!("/users/{trimmed}/{action}"))
}
