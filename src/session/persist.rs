// Session snapshot persistence
// Encodes the durable part of the session under the "auth-storage" key

use super::store::User;
use serde::{Deserialize, Serialize};

/// Snapshot format version written next to the state
pub const SNAPSHOT_VERSION: u32 = 0;

/// Durable fields of the session
///
/// Loading and initialization flags are transient and never written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    /// Signed-in user
    pub user: Option<User>,
    /// Bearer token
    pub token: Option<String>,
}

/// Envelope stored under the snapshot key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    /// Persisted state
    pub state: PersistedState,
    /// Snapshot format version
    pub version: u32,
}

impl PersistedSession {
    /// Build a snapshot from the durable session fields
    pub fn new(user: Option<User>, token: Option<String>) -> Self {
        Self {
            state: PersistedState { user, token },
            version: SNAPSHOT_VERSION,
        }
    }

    /// Serialize to the JSON stored in durable storage
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a stored snapshot
    pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The restorable user and token, if the snapshot holds a complete session
    ///
    /// A snapshot with only one of the two is treated as signed out. The
    /// token is opaque, so an empty one restores like any other.
    pub fn into_session(self) -> Option<(User, String)> {
        if self.version != SNAPSHOT_VERSION {
            return None;
        }
        match (self.state.user, self.state.token) {
            (Some(user), Some(token)) => Some((user, token)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "u-1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            token_balance: 120.0,
        }
    }

    #[test]
    fn test_encode_excludes_transient_flags() {
        let snapshot = PersistedSession::new(Some(sample_user()), Some("tok".to_string()));
        let value: serde_json::Value =
            serde_json::from_str(&snapshot.encode().unwrap()).unwrap();

        assert_eq!(value["version"], 0);
        assert_eq!(value["state"]["token"], "tok");
        assert_eq!(value["state"]["user"]["name"], "Ada");
        assert!(value["state"].get("isLoading").is_none());
        assert!(value["state"].get("is_loading").is_none());
        assert!(value["state"].get("is_initialized").is_none());
    }

    #[test]
    fn test_complete_snapshot_restores() {
        let raw = PersistedSession::new(Some(sample_user()), Some("tok".to_string()))
            .encode()
            .unwrap();
        let (user, token) = PersistedSession::decode(&raw)
            .unwrap()
            .into_session()
            .unwrap();

        assert_eq!(user, sample_user());
        assert_eq!(token, "tok");
    }

    #[test]
    fn test_empty_token_restores() {
        let raw = PersistedSession::new(Some(sample_user()), Some(String::new()))
            .encode()
            .unwrap();
        let (user, token) = PersistedSession::decode(&raw)
            .unwrap()
            .into_session()
            .unwrap();

        assert_eq!(user, sample_user());
        assert_eq!(token, "");
    }

    #[test]
    fn test_half_snapshot_is_signed_out() {
        let user_only = PersistedSession::new(Some(sample_user()), None);
        assert!(user_only.into_session().is_none());

        let token_only = PersistedSession::new(None, Some("tok".to_string()));
        assert!(token_only.into_session().is_none());
    }

    #[test]
    fn test_unknown_version_is_signed_out() {
        let mut snapshot = PersistedSession::new(Some(sample_user()), Some("tok".to_string()));
        snapshot.version = 3;
        assert!(snapshot.into_session().is_none());
    }
}
