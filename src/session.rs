use crate::error::StoreError;
use crate::models::SessionToken;
use crate::store::ExpenseStore;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Unauthenticated,
    /// Transient, only while restoring a persisted token at startup.
    Loading,
    Authenticated(SessionToken),
}

/// Holds the current identity for the life of the process and persists it
/// across restarts through the store's session-token key. Cycles between
/// `Unauthenticated` and `Authenticated`; there is no terminal state.
pub struct SessionManager {
    state: SessionState,
}

impl SessionManager {
    pub fn new() -> Self {
        SessionManager {
            state: SessionState::Unauthenticated,
        }
    }

    /// Startup restore: a well-formed persisted token transitions straight
    /// to `Authenticated` without re-validating credentials; anything else
    /// lands in `Unauthenticated`.
    pub async fn restore(&mut self, store: &ExpenseStore) -> Result<(), StoreError> {
        self.state = SessionState::Loading;
        let restored = store.load_session().await;
        self.state = SessionState::Unauthenticated;
        if let Some(token) = restored? {
            self.state = SessionState::Authenticated(token);
        }
        Ok(())
    }

    /// Delegates to the facade's credential check. A mismatch is reported as
    /// `false` and leaves the session `Unauthenticated`; only a persistence
    /// failure is an error.
    pub async fn login(
        &mut self,
        store: &ExpenseStore,
        username: &str,
        password: &str,
    ) -> Result<bool, StoreError> {
        match store.authenticate_user(username, password) {
            Some(user) => {
                let token = SessionToken {
                    user_id: user.id,
                    username: user.username,
                };
                store.save_session(&token).await?;
                self.state = SessionState::Authenticated(token);
                Ok(true)
            }
            None => {
                self.state = SessionState::Unauthenticated;
                Ok(false)
            }
        }
    }

    /// Clears the in-memory identity and the persisted token. Idempotent.
    pub async fn logout(&mut self, store: &ExpenseStore) -> Result<(), StoreError> {
        store.clear_session().await?;
        self.state = SessionState::Unauthenticated;
        Ok(())
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_user(&self) -> Option<&SessionToken> {
        match &self.state {
            SessionState::Authenticated(token) => Some(token),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
