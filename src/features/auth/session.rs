//! Process-wide session store: who is logged in, plus the durable token it
//! erases on logout. Screens never mutate the user directly; they go through
//! `login` and `logout`, and every mutation is pushed to subscribers so guards
//! and navigation re-evaluate.

use super::token::TokenStore;
use super::types::UserSummary;
use secrecy::SecretString;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Subscriber = Arc<dyn Fn(Option<&UserSummary>) + Send + Sync>;

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct SessionState {
    user: Option<UserSummary>,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

/// Shared session handle; clones observe and mutate the same session.
pub struct SessionStore<S> {
    state: Arc<Mutex<SessionState>>,
    tokens: S,
}

impl<S: Clone> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            tokens: self.tokens.clone(),
        }
    }
}

impl<S: TokenStore> SessionStore<S> {
    /// Creates an empty session backed by `tokens`.
    pub fn new(tokens: S) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState::default())),
            tokens,
        }
    }

    /// Replaces the stored user. The token is left untouched.
    pub fn login(&self, user: UserSummary) {
        tracing::info!(role = user.role.as_str(), "session user committed");
        self.lock().user = Some(user);
        self.notify();
    }

    /// Clears the user and erases the persisted token.
    pub fn logout(&self) {
        self.tokens.clear();
        self.lock().user = None;
        tracing::info!("session cleared");
        self.notify();
    }

    pub fn current_user(&self) -> Option<UserSummary> {
        self.lock().user.clone()
    }

    /// Persisted bearer token, if any.
    pub fn token(&self) -> Option<SecretString> {
        self.tokens.load()
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    /// Registers `callback` to run after every `login` and `logout`.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Option<&UserSummary>) + Send + Sync + 'static,
    {
        let mut state = self.lock();
        let id = SubscriptionId(state.next_id);
        state.next_id += 1;
        state.subscribers.push((id, Arc::new(callback)));
        id
    }

    /// Returns `false` when `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut state = self.lock();
        let before = state.subscribers.len();
        state.subscribers.retain(|(existing, _)| *existing != id);
        state.subscribers.len() != before
    }

    // Callbacks run after the lock is released so they may read the store.
    fn notify(&self) {
        let (user, subscribers) = {
            let state = self.lock();
            let subscribers: Vec<Subscriber> = state
                .subscribers
                .iter()
                .map(|(_, callback)| Arc::clone(callback))
                .collect();
            (state.user.clone(), subscribers)
        };
        for callback in subscribers {
            callback(user.as_ref());
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::token::MemoryTokenStore;
    use crate::features::auth::types::Role;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn user(email: &str, role: Role) -> UserSummary {
        UserSummary {
            id: "1".to_string(),
            email: email.to_string(),
            full_name: "Ada Lovelace".to_string(),
            role,
            is_active: true,
        }
    }

    #[test]
    fn starts_empty() {
        let store = SessionStore::new(MemoryTokenStore::default());
        assert!(store.current_user().is_none());
        assert!(store.token().is_none());
    }

    #[test]
    fn login_replaces_user_without_touching_token() {
        let tokens = MemoryTokenStore::default();
        let store = SessionStore::new(tokens.clone());

        store.login(user("a@b.com", Role::User));
        assert!(!tokens.contains_token());

        let mut renamed = user("a@b.com", Role::User);
        renamed.full_name = "Ada King".to_string();
        store.login(renamed.clone());
        assert_eq!(store.current_user(), Some(renamed));
    }

    #[test]
    fn logout_clears_user_and_token() {
        let tokens = MemoryTokenStore::default();
        tokens.save(&SecretString::from("abc")).expect("save");
        let store = SessionStore::new(tokens.clone());
        store.login(user("a@b.com", Role::Admin));

        store.logout();

        assert!(store.current_user().is_none());
        assert!(!tokens.contains_token());
    }

    #[test]
    fn clones_share_state() {
        let store = SessionStore::new(MemoryTokenStore::default());
        let other = store.clone();
        store.login(user("a@b.com", Role::User));
        assert_eq!(
            other.current_user().map(|current| current.email),
            Some("a@b.com".to_string())
        );
    }

    #[test]
    fn subscribers_see_every_mutation_until_unsubscribed() {
        let store = SessionStore::new(MemoryTokenStore::default());
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let calls_for_callback = Arc::clone(&calls);
        let seen_for_callback = Arc::clone(&seen);
        let id = store.subscribe(move |current| {
            calls_for_callback.fetch_add(1, Ordering::SeqCst);
            seen_for_callback
                .lock()
                .expect("lock")
                .push(current.map(|user| user.email.clone()));
        });

        store.login(user("a@b.com", Role::User));
        store.logout();
        assert!(store.unsubscribe(id));
        store.login(user("c@d.com", Role::User));

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(
            *seen.lock().expect("lock"),
            vec![Some("a@b.com".to_string()), None]
        );
        assert!(!store.unsubscribe(id));
    }

    #[test]
    fn subscribers_may_read_the_store_during_notification() {
        let store = SessionStore::new(MemoryTokenStore::default());
        let reader = store.clone();
        let observed = Arc::new(Mutex::new(None));
        let observed_for_callback = Arc::clone(&observed);
        store.subscribe(move |_| {
            *observed_for_callback.lock().expect("lock") =
                reader.current_user().map(|user| user.role);
        });

        store.login(user("a@b.com", Role::Admin));

        assert_eq!(*observed.lock().expect("lock"), Some(Role::Admin));
    }
}
