//! # Session: the signed-in user, as seen by the client
//!
//! A [`Session`] wraps a [`SessionStorage`] and owns the two keys the client
//! persists between page loads:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | The bearer token returned by `POST /api/login`. |
//! | [`USER_KEY`] (`"user"`) | The [`UserInfo`] returned alongside it, as JSON. |
//!
//! The application builds one session at start-up and shares it through the
//! component context. Reads always go to storage, so every request picks up
//! the token current at call time. Writes happen only through
//! [`Session::login`] and [`Session::logout`].
//!
//! The client never validates or refreshes the token. A non-empty token means
//! "authenticated" until the backend says otherwise.

use std::fmt;
use std::rc::Rc;

use store::SessionStorage;

use crate::UserInfo;

/// Key for storing the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Key for storing the serialised user.
pub const USER_KEY: &str = "user";

/// Shared handle to the persisted session.
#[derive(Clone)]
pub struct Session {
    storage: Rc<dyn SessionStorage>,
}

impl Session {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self {
            storage: Rc::new(storage),
        }
    }

    /// The stored bearer token, if present and non-empty.
    pub fn token(&self) -> Option<String> {
        self.storage
            .get(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    /// The stored user. A corrupt entry reads as no user.
    pub fn user(&self) -> Option<UserInfo> {
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable stored user");
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist a freshly issued token and its user.
    pub fn login(&self, token: &str, user: &UserInfo) {
        self.storage.set(TOKEN_KEY, token);
        match serde_json::to_string(user) {
            Ok(json) => self.storage.set(USER_KEY, &json),
            Err(e) => {
                tracing::warn!(error = %e, "could not serialise user; storing token only");
                self.storage.remove(USER_KEY);
            }
        }
        tracing::info!(user_id = user.id, role = user.role.as_str(), "signed in");
    }

    /// Forget the token and user.
    pub fn logout(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        tracing::info!("signed out");
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;
    use store::MemoryStorage;

    fn user() -> UserInfo {
        serde_json::from_value(serde_json::json!({
            "id": 4,
            "email": "eva@example.com",
            "role": "paciente",
            "names": "Eva"
        }))
        .unwrap()
    }

    #[test]
    fn test_login_persists_both_keys() {
        let storage = MemoryStorage::new();
        let session = Session::new(storage.clone());

        assert!(!session.is_authenticated());
        assert!(session.user().is_none());

        session.login("jwt-token", &user());

        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("jwt-token"));
        assert!(storage.get(USER_KEY).unwrap().contains("eva@example.com"));
        assert_eq!(session.token().as_deref(), Some("jwt-token"));
        assert_eq!(session.user().unwrap().role, Role::Patient);
    }

    #[test]
    fn test_logout_clears() {
        let storage = MemoryStorage::new();
        let session = Session::new(storage.clone());

        session.login("jwt-token", &user());
        session.logout();

        assert!(storage.is_empty());
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "");
        let session = Session::new(storage);

        assert!(session.token().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_corrupt_user_reads_as_none() {
        let storage = MemoryStorage::new();
        storage.set(USER_KEY, "{not json");
        let session = Session::new(storage);

        assert!(session.user().is_none());
    }

    #[test]
    fn test_reads_see_external_writes() {
        let storage = MemoryStorage::new();
        let session = Session::new(storage.clone());

        storage.set(TOKEN_KEY, "rotated");
        assert_eq!(session.token().as_deref(), Some("rotated"));
    }
}
