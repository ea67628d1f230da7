use crate::features::auth::types::UserSummary;
use serde::Deserialize;

/// One page of the admin user list.
#[derive(Clone, Debug, Deserialize)]
pub struct UserPage {
    #[serde(default)]
    pub users: Vec<UserSummary>,
}
