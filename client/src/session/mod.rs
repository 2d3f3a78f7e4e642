//! # Session Store
//!
//! Holds the bearer token and the cached user profile, mirrored to durable
//! storage so a session survives restarts.
//!
//! The store is an explicit object handed to [`crate::services::api::ApiClient`]
//! at construction; there is no global session. Every read and write goes
//! through one `RwLock`, so `{token, user}` is never observed half-updated.
//!
//! ## Lifecycle
//!
//! ```text
//! restore() ──► logged out ──login/register──► set_session()
//!                   ▲                               │
//!                   │                        update_user() (profile completion)
//!                   │                               │
//!                   └──── clear_session() / invalidate_if() (logout, 401)
//! ```
//!
//! The session changes only on these events; nothing polls.

pub mod storage;

use parking_lot::RwLock;
use shared::{UserProfile, UserType};
use std::sync::Arc;

use crate::core::error::{ApiError, Result};
pub use storage::{FileStorage, MemoryStorage, SessionStorage, StorageError};

/// Storage key for the bearer token
pub const TOKEN_KEY: &str = "auth_token";
/// Storage key for the JSON-encoded [`UserProfile`]
pub const USER_KEY: &str = "user_profile";

/// Authenticated-user context
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

/// Process-wide session, shared behind an `Arc`.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    state: RwLock<Session>,
}

impl SessionStore {
    /// Empty session over `storage`, without reading it.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            storage,
            state: RwLock::new(Session::default()),
        }
    }

    /// Ephemeral session kept only in memory.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Rebuild the session persisted in `storage`.
    ///
    /// A token whose cached profile is missing or unreadable cannot be
    /// resolved, so both keys are erased and the store starts logged out.
    /// A corrupt storage document is reset the same way.
    pub fn restore(storage: Arc<dyn SessionStorage>) -> std::result::Result<Self, StorageError> {
        let (token, raw_user) = match read_persisted(storage.as_ref()) {
            Ok(keys) => keys,
            Err(e @ StorageError::Corrupt { .. }) => {
                tracing::warn!(error = %e, "Session storage unreadable; starting logged out");
                storage.remove(TOKEN_KEY)?;
                storage.remove(USER_KEY)?;
                return Ok(Self::new(storage));
            }
            Err(e) => return Err(e),
        };
        let user = raw_user.and_then(|raw| match serde_json::from_str::<UserProfile>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable cached profile");
                None
            }
        });

        let session = match (token, user) {
            (Some(token), Some(user)) => {
                tracing::info!(user_id = user.id, "Session restored");
                Session {
                    token: Some(token),
                    user: Some(user),
                }
            }
            (None, None) => Session::default(),
            _ => {
                tracing::warn!("Incomplete persisted session; starting logged out");
                storage.remove(TOKEN_KEY)?;
                storage.remove(USER_KEY)?;
                Session::default()
            }
        };

        Ok(Self {
            storage,
            state: RwLock::new(session),
        })
    }

    /// Persist a new token and profile, then adopt them in memory.
    ///
    /// If the profile write fails, the token key is rolled back to its
    /// previous value and the in-memory session is left unchanged.
    pub fn set_session(&self, token: String, user: UserProfile) -> std::result::Result<(), StorageError> {
        let mut state = self.state.write();

        let user_json = serde_json::to_string(&user).map_err(|source| StorageError::Encode {
            key: USER_KEY,
            source,
        })?;

        let previous_token = self.storage.get(TOKEN_KEY)?;
        self.storage.set(TOKEN_KEY, &token)?;

        if let Err(e) = self.storage.set(USER_KEY, &user_json) {
            let rollback = match &previous_token {
                Some(previous) => self.storage.set(TOKEN_KEY, previous),
                None => self.storage.remove(TOKEN_KEY),
            };
            if let Err(rollback_err) = rollback {
                tracing::error!(error = %rollback_err, "Failed to roll back session token");
            }
            tracing::error!(error = %e, "Failed to persist session profile");
            return Err(e);
        }

        tracing::info!(user_id = user.id, "Session set");
        *state = Session {
            token: Some(token),
            user: Some(user),
        };
        Ok(())
    }

    /// Replace the cached profile, keeping the current token.
    pub fn update_user(&self, user: UserProfile) -> Result<()> {
        let mut state = self.state.write();
        if state.token.is_none() {
            return Err(ApiError::auth_required());
        }

        let user_json = serde_json::to_string(&user).map_err(|source| StorageError::Encode {
            key: USER_KEY,
            source,
        })?;
        self.storage.set(USER_KEY, &user_json)?;

        tracing::debug!(user_id = user.id, "Session profile updated");
        state.user = Some(user);
        Ok(())
    }

    /// Erase token and profile. Idempotent.
    ///
    /// Memory is cleared even when storage fails; the storage error is
    /// still returned so the caller can report it.
    pub fn clear_session(&self) -> std::result::Result<(), StorageError> {
        let mut state = self.state.write();
        self.clear_locked(&mut state)
    }

    /// Clear the session because the server rejected `rejected_token`.
    ///
    /// A newer session (the user logged in again while the rejected request
    /// was in flight) is left alone. Returns whether anything was cleared.
    pub fn invalidate_if(&self, rejected_token: &str) -> bool {
        let mut state = self.state.write();
        if state.token.as_deref() != Some(rejected_token) {
            tracing::debug!("Rejected token is no longer current; session kept");
            return false;
        }
        tracing::warn!("Session token rejected by server; logging out");
        if let Err(e) = self.clear_locked(&mut state) {
            tracing::error!(error = %e, "Failed to erase invalidated session");
        }
        true
    }

    fn clear_locked(&self, state: &mut Session) -> std::result::Result<(), StorageError> {
        let was_authenticated = state.token.is_some();
        *state = Session::default();

        let token_result = self.storage.remove(TOKEN_KEY);
        let user_result = self.storage.remove(USER_KEY);

        if was_authenticated {
            tracing::info!("Session cleared");
        }
        token_result.and(user_result)
    }

    pub fn get_token(&self) -> Option<String> {
        self.state.read().token.clone()
    }

    pub fn get_user(&self) -> Option<UserProfile> {
        self.state.read().user.clone()
    }

    /// Consistent copy of `{token, user}`.
    pub fn snapshot(&self) -> Session {
        self.state.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub fn user_type(&self) -> Option<UserType> {
        self.state.read().user.as_ref().and_then(UserProfile::user_type)
    }
}

fn read_persisted(storage: &dyn SessionStorage) -> std::result::Result<(Option<String>, Option<String>), StorageError> {
    Ok((storage.get(TOKEN_KEY)?, storage.get(USER_KEY)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn profile(id: i64) -> UserProfile {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "username": "mira",
            "user_type_id": 2
        }))
        .unwrap()
    }

    /// Memory storage whose profile writes can be made to fail.
    #[derive(Default)]
    struct FlakyStorage {
        inner: MemoryStorage,
        fail_user_writes: AtomicBool,
    }

    impl SessionStorage for FlakyStorage {
        fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
            if key == USER_KEY && self.fail_user_writes.load(Ordering::SeqCst) {
                return Err(StorageError::Unavailable("disk full".to_string()));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> std::result::Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_set_get_clear() {
        let store = SessionStore::in_memory();
        assert_eq!(store.get_token(), None);
        assert!(!store.is_authenticated());

        store.set_session("tok-1".to_string(), profile(1)).unwrap();
        assert_eq!(store.get_token().as_deref(), Some("tok-1"));
        assert_eq!(store.get_user().unwrap().id, 1);
        assert_eq!(store.user_type(), Some(UserType::Creator));

        store.clear_session().unwrap();
        store.clear_session().unwrap();
        assert_eq!(store.get_token(), None);
        assert_eq!(store.get_user(), None);
    }

    #[test]
    fn test_failed_profile_write_rolls_back() {
        let storage = Arc::new(FlakyStorage::default());
        let store = SessionStore::new(storage.clone());
        store.set_session("old".to_string(), profile(1)).unwrap();

        storage.fail_user_writes.store(true, Ordering::SeqCst);
        let err = store.set_session("new".to_string(), profile(2)).unwrap_err();
        assert!(matches!(err, StorageError::Unavailable(_)));

        // Neither memory nor storage moved to the new token.
        assert_eq!(store.get_token().as_deref(), Some("old"));
        assert_eq!(store.get_user().unwrap().id, 1);
        assert_eq!(storage.get(TOKEN_KEY).unwrap().as_deref(), Some("old"));
    }

    #[test]
    fn test_failed_first_login_leaves_no_token() {
        let storage = Arc::new(FlakyStorage::default());
        storage.fail_user_writes.store(true, Ordering::SeqCst);
        let store = SessionStore::new(storage.clone());

        assert!(store.set_session("tok".to_string(), profile(1)).is_err());
        assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_restore_round_trip() {
        let storage: Arc<dyn SessionStorage> = Arc::new(MemoryStorage::new());
        SessionStore::new(storage.clone())
            .set_session("tok".to_string(), profile(5))
            .unwrap();

        let restored = SessionStore::restore(storage).unwrap();
        assert_eq!(restored.get_token().as_deref(), Some("tok"));
        assert_eq!(restored.get_user().unwrap().id, 5);
    }

    #[test]
    fn test_restore_token_without_profile_logs_out() {
        let storage: Arc<dyn SessionStorage> = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "tok").unwrap();
        storage.set(USER_KEY, "{broken").unwrap();

        let restored = SessionStore::restore(storage.clone()).unwrap();
        assert!(!restored.is_authenticated());
        assert_eq!(restored.get_token(), None);
        assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(storage.get(USER_KEY).unwrap(), None);
    }

    #[test]
    fn test_restore_from_corrupt_file_starts_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{trunc").unwrap();

        let restored = SessionStore::restore(Arc::new(FileStorage::new(&path))).unwrap();
        assert!(!restored.is_authenticated());

        restored.set_session("tok".to_string(), profile(3)).unwrap();
        let reopened = SessionStore::restore(Arc::new(FileStorage::new(&path))).unwrap();
        assert_eq!(reopened.get_token().as_deref(), Some("tok"));
        assert_eq!(reopened.get_user().unwrap().id, 3);
    }

    #[test]
    fn test_update_user_requires_session() {
        let store = SessionStore::in_memory();
        assert!(store.update_user(profile(1)).is_err());

        store.set_session("tok".to_string(), profile(1)).unwrap();
        let mut updated = profile(1);
        updated.bio = Some("new bio".to_string());
        store.update_user(updated).unwrap();
        assert_eq!(store.get_user().unwrap().bio.as_deref(), Some("new bio"));
        assert_eq!(store.get_token().as_deref(), Some("tok"));
    }

    #[test]
    fn test_invalidate_clears_matching_token() {
        let store = SessionStore::in_memory();
        assert!(!store.invalidate_if("tok"));
        store.set_session("tok".to_string(), profile(1)).unwrap();
        assert!(store.invalidate_if("tok"));
        assert!(store.snapshot() == Session::default());
    }

    #[test]
    fn test_stale_rejection_keeps_newer_session() {
        let store = SessionStore::in_memory();
        store.set_session("old".to_string(), profile(1)).unwrap();
        store.set_session("fresh".to_string(), profile(2)).unwrap();

        assert!(!store.invalidate_if("old"));
        assert_eq!(store.get_token().as_deref(), Some("fresh"));
        assert_eq!(store.get_user().unwrap().id, 2);
    }
}
