//! Profile editing: saving the full name and changing the password. A saved
//! profile replaces the session user with the backend's response.

use super::{
    client,
    types::{ChangePasswordRequest, UpdateProfileRequest},
};
use crate::{
    app_lib::{AppError, ApiClient, transport::HttpTransport},
    features::auth::{session::SessionStore, token::TokenStore, types::UserSummary},
};
use secrecy::SecretString;

/// Saves `full_name` and commits the returned user to the session.
///
/// # Errors
/// Returns the request error; the session is left as it was.
pub async fn save_profile<T, S>(
    api: &ApiClient<T, S>,
    session: &SessionStore<S>,
    full_name: &str,
) -> Result<UserSummary, AppError>
where
    T: HttpTransport,
    S: TokenStore,
{
    let request = UpdateProfileRequest {
        full_name: full_name.to_string(),
    };
    let user = client::update_profile(api, &request).await?;
    session.login(user.clone());
    Ok(user)
}

#[derive(Clone, Debug, Default)]
pub struct PasswordChangeForm {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChangeForm {
    /// # Errors
    /// Returns [`AppError::Validation`] when a field is empty or the new
    /// password and its confirmation differ.
    pub fn validate(&self) -> Result<ChangePasswordRequest, AppError> {
        if self.old_password.is_empty()
            || self.new_password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(AppError::Validation(
                "All password fields are required".to_string(),
            ));
        }

        if self.new_password != self.confirm_password {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }

        Ok(ChangePasswordRequest {
            old_password: SecretString::from(self.old_password.clone()),
            new_password: SecretString::from(self.new_password.clone()),
        })
    }
}

/// Validates the form and submits the change.
///
/// # Errors
/// Returns the validation error before any request, or the request error.
pub async fn change_password<T, S>(
    api: &ApiClient<T, S>,
    form: &PasswordChangeForm,
) -> Result<(), AppError>
where
    T: HttpTransport,
    S: TokenStore,
{
    let request = form.validate()?;
    client::change_password(api, &request).await?;
    tracing::info!("password changed");
    Ok(())
}
