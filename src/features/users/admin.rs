//! Admin dashboard logic: page tracking and the confirmed activate/deactivate
//! toggle. The toggle decides from the row snapshot it is handed, not from a
//! fresh read of the account.

use super::client;
use crate::{
    app_lib::{AppError, ApiClient, transport::HttpTransport},
    features::auth::token::TokenStore,
};

/// 1-based page cursor with a fixed page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    limit: u32,
}

impl Pagination {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
        }
    }

    pub fn page(self) -> u32 {
        self.page
    }

    pub fn limit(self) -> u32 {
        self.limit
    }

    /// The backend has no total count, so there is always a next page.
    #[must_use]
    pub fn next(self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..self
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self {
            page: self.page.saturating_sub(1).max(1),
            ..self
        }
    }

    pub fn has_prev(self) -> bool {
        self.page > 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusChange {
    Activate,
    Deactivate,
}

impl StatusChange {
    /// Active accounts get deactivated, inactive ones activated.
    pub fn for_user(is_active: bool) -> Self {
        if is_active {
            StatusChange::Deactivate
        } else {
            StatusChange::Activate
        }
    }

    pub fn verb(self) -> &'static str {
        match self {
            StatusChange::Activate => "activate",
            StatusChange::Deactivate => "deactivate",
        }
    }

    /// Button label shown in the action column.
    pub fn label(self) -> &'static str {
        match self {
            StatusChange::Activate => "Activate",
            StatusChange::Deactivate => "Deactivate",
        }
    }

    pub fn confirmation_prompt(self) -> String {
        format!("Are you sure you want to {} this user?", self.verb())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Cancelled,
    Applied(StatusChange),
}

/// Asks `confirm` with the matching prompt, then flips the account status.
///
/// # Errors
/// Returns the request error; nothing is sent when the prompt is declined.
pub async fn toggle_user_status<T, S, F>(
    api: &ApiClient<T, S>,
    id: &str,
    is_active: bool,
    confirm: F,
) -> Result<ToggleOutcome, AppError>
where
    T: HttpTransport,
    S: TokenStore,
    F: FnOnce(&str) -> bool,
{
    let change = StatusChange::for_user(is_active);
    if !confirm(&change.confirmation_prompt()) {
        tracing::debug!(user_id = id, action = change.verb(), "status change cancelled");
        return Ok(ToggleOutcome::Cancelled);
    }

    match change {
        StatusChange::Activate => client::activate_user(api, id).await,
        StatusChange::Deactivate => client::deactivate_user(api, id).await,
    }
    .inspect_err(|err| {
        tracing::warn!(user_id = id, action = change.verb(), "status change failed: {err}");
    })?;

    tracing::info!(user_id = id, action = change.verb(), "user status changed");
    Ok(ToggleOutcome::Applied(change))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::mock::MockTransport;
    use crate::features::auth::token::MemoryTokenStore;
    use crate::features::users::client::list_users;
    use secrecy::SecretString;
    use serde_json::json;

    fn api() -> (MockTransport, ApiClient<MockTransport, MemoryTokenStore>) {
        let transport = MockTransport::default();
        let tokens = MemoryTokenStore::default();
        tokens.save(&SecretString::from("admin-token")).expect("save");
        let api = ApiClient::new("http://api.test", transport.clone(), tokens);
        (transport, api)
    }

    fn user_json(id: u32, is_active: bool) -> serde_json::Value {
        json!({
            "id": id,
            "email": format!("user{id}@example.com"),
            "full_name": format!("User {id}"),
            "role": "user",
            "is_active": is_active,
        })
    }

    #[test]
    fn pagination_never_goes_below_first_page() {
        let first = Pagination::new(10);
        assert_eq!(first.page(), 1);
        assert!(!first.has_prev());
        assert_eq!(first.prev().page(), 1);

        let second = first.next();
        assert_eq!(second.page(), 2);
        assert!(second.has_prev());
        assert_eq!(second.prev(), first);
        assert_eq!(Pagination::new(0).limit(), 1);
    }

    #[test]
    fn prompts_follow_current_status() {
        assert_eq!(
            StatusChange::for_user(true).confirmation_prompt(),
            "Are you sure you want to deactivate this user?"
        );
        assert_eq!(
            StatusChange::for_user(false).confirmation_prompt(),
            "Are you sure you want to activate this user?"
        );
        assert_eq!(StatusChange::for_user(false).label(), "Activate");
    }

    #[tokio::test]
    async fn second_page_requests_only_that_page() {
        let (transport, api) = api();
        transport.respond(200, json!({"users": [user_json(11, true), user_json(12, false)]}));

        let pagination = Pagination::new(10).next();
        let users = list_users(&api, pagination.page(), pagination.limit())
            .await
            .expect("list");

        let ids: Vec<_> = users.iter().map(|user| user.id.as_str()).collect();
        assert_eq!(ids, ["11", "12"]);
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path(), "/users?page=2&limit=10");
        assert_eq!(requests[0].bearer.as_deref(), Some("admin-token"));
    }

    #[tokio::test]
    async fn declined_confirmation_sends_nothing() {
        let (transport, api) = api();

        let outcome = toggle_user_status(&api, "7", true, |_| false)
            .await
            .expect("toggle");

        assert_eq!(outcome, ToggleOutcome::Cancelled);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn toggling_inactive_snapshot_twice_activates_twice() {
        let (transport, api) = api();
        transport.respond(200, json!({"message": "ok"}));
        transport.respond(200, json!({"message": "ok"}));

        let snapshot_is_active = false;
        for _ in 0..2 {
            let outcome = toggle_user_status(&api, "7", snapshot_is_active, |_| true)
                .await
                .expect("toggle");
            assert_eq!(outcome, ToggleOutcome::Applied(StatusChange::Activate));
        }

        let paths: Vec<_> = transport
            .requests()
            .iter()
            .map(|request| request.path().to_string())
            .collect();
        assert_eq!(paths, ["/users/7/activate", "/users/7/activate"]);
    }

    #[tokio::test]
    async fn toggle_follows_refetched_status() {
        let (transport, api) = api();
        transport.respond(200, json!({"message": "ok"}));
        transport.respond(200, json!({"users": [user_json(7, true)]}));
        transport.respond(200, json!({"message": "ok"}));

        let start = false;
        toggle_user_status(&api, "7", start, |_| true)
            .await
            .expect("activate");
        let refreshed = list_users(&api, 1, 10).await.expect("refetch");
        toggle_user_status(&api, "7", refreshed[0].is_active, |_| true)
            .await
            .expect("deactivate");

        let paths: Vec<_> = transport
            .requests()
            .iter()
            .map(|request| request.path().to_string())
            .collect();
        assert_eq!(
            paths,
            ["/users/7/activate", "/users?page=1&limit=10", "/users/7/deactivate"]
        );
    }

    #[tokio::test]
    async fn failed_toggle_surfaces_error() {
        let (transport, api) = api();
        transport.respond(403, json!({"detail": "Not enough permissions"}));

        let err = toggle_user_status(&api, "7", true, |_| true)
            .await
            .expect_err("forbidden");

        assert_eq!(err.user_message("Action failed"), "Not enough permissions");
        assert_eq!(transport.requests()[0].path(), "/users/7/deactivate");
    }
}
