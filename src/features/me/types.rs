//! Types for /users/me API requests.

use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};

#[derive(Clone, Debug, Serialize)]
pub struct UpdateProfileRequest {
    pub full_name: String,
}

#[derive(Debug, Serialize)]
pub struct ChangePasswordRequest {
    #[serde(serialize_with = "serialize_secret")]
    pub old_password: SecretString,
    #[serde(serialize_with = "serialize_secret")]
    pub new_password: SecretString,
}

fn serialize_secret<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(secret.expose_secret())
}
