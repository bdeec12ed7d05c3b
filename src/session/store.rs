// Session store
// Holds the signed-in user and bearer token, mirrored to durable storage

use super::persist::PersistedSession;
use crate::storage::Storage;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Storage key holding the plain bearer token
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the serialized session snapshot
pub const SNAPSHOT_KEY: &str = "auth-storage";

/// Authenticated marketplace user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Spendable token balance
    pub token_balance: f64,
}

/// Current session state
///
/// `user` and `token` are always set or cleared together.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Signed-in user, if any
    pub user: Option<User>,
    /// Bearer token, if any
    pub token: Option<String>,
    /// Whether an auth-related operation is in progress
    pub is_loading: bool,
    /// Whether rehydration (or an explicit login/logout) has completed
    pub is_initialized: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            is_loading: true,
            is_initialized: false,
        }
    }
}

impl Session {
    /// Whether a user is signed in
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

/// Result of reconstructing the session from durable storage
#[derive(Debug, Clone, PartialEq)]
pub enum RehydrateOutcome {
    /// A previous session was found and restored
    Restored(User),
    /// Storage was readable but held no usable session
    NoSession,
    /// Storage could not be read; the store starts signed out
    StorageUnavailable,
}

struct Inner {
    storage: Arc<dyn Storage>,
    state: watch::Sender<Session>,
}

/// Shared handle to the session state
///
/// Clones share the same state cell. Every mutation is applied
/// synchronously and is visible to all subscribers at once; the durable
/// copy is written afterwards and write failures are only logged.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &*self.inner.state.borrow())
            .finish()
    }
}

impl SessionStore {
    /// Create an uninitialized store over `storage`
    ///
    /// The store starts with `is_loading = true` and
    /// `is_initialized = false` until [`SessionStore::rehydrate`] runs.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let (state, _) = watch::channel(Session::default());
        Self {
            inner: Arc::new(Inner { storage, state }),
        }
    }

    /// Create a store and rehydrate it from `storage`
    pub async fn init(storage: Arc<dyn Storage>) -> (Self, RehydrateOutcome) {
        let store = Self::new(storage);
        let outcome = store.rehydrate().await;
        (store, outcome)
    }

    /// Reconstruct the session from the stored snapshot
    ///
    /// Whatever the outcome, the store ends up initialized and not loading.
    pub async fn rehydrate(&self) -> RehydrateOutcome {
        let storage = Arc::clone(&self.inner.storage);
        let read = tokio::task::spawn_blocking(move || storage.get_item(SNAPSHOT_KEY)).await;

        let (outcome, restored) = match read {
            Ok(Ok(Some(raw))) => match PersistedSession::decode(&raw) {
                Ok(snapshot) => match snapshot.into_session() {
                    Some((user, token)) => {
                        (RehydrateOutcome::Restored(user.clone()), Some((user, token)))
                    }
                    None => (RehydrateOutcome::NoSession, None),
                },
                Err(e) => {
                    warn!(error = %e, "Discarding unreadable session snapshot");
                    (RehydrateOutcome::NoSession, None)
                }
            },
            Ok(Ok(None)) => (RehydrateOutcome::NoSession, None),
            Ok(Err(e)) => {
                warn!(error = %e, "Session storage unavailable, starting signed out");
                (RehydrateOutcome::StorageUnavailable, None)
            }
            Err(e) => {
                warn!(error = %e, "Session rehydration task failed, starting signed out");
                (RehydrateOutcome::StorageUnavailable, None)
            }
        };

        self.inner.state.send_modify(|session| {
            match restored {
                Some((user, token)) => {
                    session.user = Some(user);
                    session.token = Some(token);
                }
                None => {
                    session.user = None;
                    session.token = None;
                }
            }
            session.is_initialized = true;
            session.is_loading = false;
        });

        info!(outcome = ?outcome, "Session rehydrated");
        outcome
    }

    /// Sign in with `user` and `token`
    pub fn login(&self, user: User, token: String) {
        if let Err(e) = self.inner.storage.set_item(TOKEN_KEY, &token) {
            warn!(error = %e, "Failed to store bearer token");
        }

        info!(user_id = %user.id, "Signed in");
        self.inner.state.send_modify(|session| {
            session.user = Some(user);
            session.token = Some(token);
            session.is_initialized = true;
        });
        self.persist();
    }

    /// Sign out and forget the stored token
    pub fn logout(&self) {
        if let Err(e) = self.inner.storage.remove_item(TOKEN_KEY) {
            warn!(error = %e, "Failed to remove bearer token");
        }

        info!("Signed out");
        self.inner.state.send_modify(|session| {
            session.user = None;
            session.token = None;
            session.is_initialized = true;
        });
        self.persist();
    }

    /// Set the loading flag without touching initialization
    pub fn set_is_loading(&self, is_loading: bool) {
        self.inner
            .state
            .send_modify(|session| session.is_loading = is_loading);
        self.persist();
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> Session {
        self.inner.state.borrow().clone()
    }

    /// Current bearer token, if signed in
    pub fn token(&self) -> Option<String> {
        self.inner.state.borrow().token.clone()
    }

    /// Receiver that observes every state change
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.inner.state.subscribe()
    }

    /// Flush durable storage before the host exits
    pub fn teardown(&self) {
        match self.inner.storage.flush() {
            Ok(()) => info!("Session storage flushed"),
            Err(e) => warn!(error = %e, "Failed to flush session storage"),
        }
    }

    fn persist(&self) {
        let snapshot = {
            let session = self.inner.state.borrow();
            PersistedSession::new(session.user.clone(), session.token.clone())
        };

        let encoded = match snapshot.encode() {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(error = %e, "Failed to encode session snapshot");
                return;
            }
        };

        match self.inner.storage.set_item(SNAPSHOT_KEY, &encoded) {
            Ok(()) => debug!("Session snapshot written"),
            Err(e) => warn!(error = %e, "Failed to write session snapshot"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, StorageError};

    /// Storage whose every operation fails
    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Poisoned)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Poisoned)
        }

        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Poisoned)
        }
    }

    fn sample_user() -> User {
        User {
            id: "u-1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            token_balance: 42.0,
        }
    }

    #[test]
    fn test_new_store_is_uninitialized() {
        let store = SessionStore::new(Arc::new(MemoryStorage::new()));
        let session = store.snapshot();

        assert!(session.user.is_none());
        assert!(session.token.is_none());
        assert!(session.is_loading);
        assert!(!session.is_initialized);
    }

    #[test]
    fn test_login_sets_state_and_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone());

        store.login(sample_user(), "tok-1".to_string());

        let session = store.snapshot();
        assert_eq!(session.user, Some(sample_user()));
        assert_eq!(session.token.as_deref(), Some("tok-1"));
        assert!(session.is_initialized);
        assert!(session.is_authenticated());

        assert_eq!(storage.get_item(TOKEN_KEY).unwrap().as_deref(), Some("tok-1"));
        let raw = storage.get_item(SNAPSHOT_KEY).unwrap().unwrap();
        let (user, token) = PersistedSession::decode(&raw)
            .unwrap()
            .into_session()
            .unwrap();
        assert_eq!(user, sample_user());
        assert_eq!(token, "tok-1");
    }

    #[test]
    fn test_logout_clears_state_and_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let store = SessionStore::new(storage.clone());
        store.login(sample_user(), "tok-1".to_string());

        store.logout();

        let session = store.snapshot();
        assert!(session.user.is_none());
        assert!(session.token.is_none());
        assert!(session.is_initialized);
        assert_eq!(storage.get_item(TOKEN_KEY).unwrap(), None);

        let raw = storage.get_item(SNAPSHOT_KEY).unwrap().unwrap();
        assert!(PersistedSession::decode(&raw)
            .unwrap()
            .into_session()
            .is_none());
    }

    #[test]
    fn test_set_is_loading_leaves_initialized_alone() {
        let store = SessionStore::new(Arc::new(MemoryStorage::new()));

        store.set_is_loading(false);
        let session = store.snapshot();
        assert!(!session.is_loading);
        assert!(!session.is_initialized);

        store.set_is_loading(true);
        assert!(store.snapshot().is_loading);
    }

    #[test]
    fn test_login_survives_storage_failure() {
        let store = SessionStore::new(Arc::new(BrokenStorage));

        store.login(sample_user(), "tok-1".to_string());

        assert!(store.snapshot().is_authenticated());
        assert_eq!(store.token().as_deref(), Some("tok-1"));
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::new(Arc::new(MemoryStorage::new()));
        let other = store.clone();

        store.login(sample_user(), "tok-1".to_string());
        assert_eq!(other.token().as_deref(), Some("tok-1"));
    }

    #[tokio::test]
    async fn test_rehydrate_restores_previous_session() {
        let storage = Arc::new(MemoryStorage::new());
        let first = SessionStore::new(storage.clone());
        first.login(sample_user(), "tok-1".to_string());

        let (reloaded, outcome) = SessionStore::init(storage).await;

        assert_eq!(outcome, RehydrateOutcome::Restored(sample_user()));
        let session = reloaded.snapshot();
        assert_eq!(session.user, Some(sample_user()));
        assert_eq!(session.token.as_deref(), Some("tok-1"));
        assert!(session.is_initialized);
        assert!(!session.is_loading);
    }

    #[tokio::test]
    async fn test_rehydrate_empty_storage() {
        let (store, outcome) = SessionStore::init(Arc::new(MemoryStorage::new())).await;

        assert_eq!(outcome, RehydrateOutcome::NoSession);
        let session = store.snapshot();
        assert!(!session.is_authenticated());
        assert!(session.is_initialized);
        assert!(!session.is_loading);
    }

    #[tokio::test]
    async fn test_rehydrate_corrupt_snapshot() {
        let storage = Arc::new(MemoryStorage::with_items([(SNAPSHOT_KEY, "{not json")]));
        let (store, outcome) = SessionStore::init(storage).await;

        assert_eq!(outcome, RehydrateOutcome::NoSession);
        assert!(store.snapshot().is_initialized);
    }

    #[tokio::test]
    async fn test_rehydrate_storage_unavailable() {
        let (store, outcome) = SessionStore::init(Arc::new(BrokenStorage)).await;

        assert_eq!(outcome, RehydrateOutcome::StorageUnavailable);
        let session = store.snapshot();
        assert!(!session.is_authenticated());
        assert!(session.is_initialized);
        assert!(!session.is_loading);
    }

    #[tokio::test]
    async fn test_subscribers_see_mutations() {
        let store = SessionStore::new(Arc::new(MemoryStorage::new()));
        let mut rx = store.subscribe();

        store.login(sample_user(), "tok-1".to_string());
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_authenticated());

        store.logout();
        rx.changed().await.unwrap();
        assert!(!rx.borrow().is_authenticated());
    }
}
