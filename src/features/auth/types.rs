//! Request and response types for auth-related API calls. Credential payloads
//! carry passwords, so they hold them as secrets and must never be logged.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

/// Current user as returned by `/users/me`, the profile update and the admin
/// list. Replaced wholesale, never patched field by field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(alias = "userId", deserialize_with = "deserialize_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    pub role: Role,
    pub is_active: bool,
}

impl UserSummary {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Accepts ids sent either as JSON strings or integers.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(value) => value,
        RawId::Number(value) => value.to_string(),
    })
}

fn serialize_secret<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(secret.expose_secret())
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(serialize_with = "serialize_secret")]
    pub password: SecretString,
}

/// `/auth/login` response. The token is optional here so a missing token is
/// reported as its own failure instead of a decode error.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    #[serde(serialize_with = "serialize_secret")]
    pub password: SecretString,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_summary_accepts_numeric_and_aliased_ids() {
        let numeric: UserSummary = serde_json::from_value(json!({
            "id": 42,
            "email": "a@b.com",
            "full_name": "Ada",
            "role": "admin",
            "is_active": true
        }))
        .expect("numeric id");
        assert_eq!(numeric.id, "42");
        assert!(numeric.is_admin());

        let aliased: UserSummary = serde_json::from_value(json!({
            "userId": "u-7",
            "email": "b@c.com",
            "role": "user",
            "is_active": false
        }))
        .expect("aliased id");
        assert_eq!(aliased.id, "u-7");
        assert_eq!(aliased.full_name, "");
        assert!(!aliased.is_admin());
    }

    #[test]
    fn unknown_role_is_rejected() {
        let result = serde_json::from_value::<UserSummary>(json!({
            "id": "1",
            "email": "a@b.com",
            "role": "root",
            "is_active": true
        }));
        assert!(result.is_err());
    }

    #[test]
    fn login_request_serializes_password_for_the_wire_only() {
        let request = LoginRequest {
            email: "a@b.com".to_string(),
            password: SecretString::from("Abcdefg1"),
        };
        let body = serde_json::to_value(&request).expect("serialize");
        assert_eq!(body, json!({"email": "a@b.com", "password": "Abcdefg1"}));
        assert!(!format!("{request:?}").contains("Abcdefg1"));
    }

    #[test]
    fn token_response_tolerates_missing_token() {
        let response: TokenResponse = serde_json::from_value(json!({"token_type": "bearer"}))
            .expect("decode");
        assert!(response.access_token.is_none());
    }
}
