//! Login, logout, and the session gate
//!
//! The session state machine lives here:
//! Unauthenticated -> Authenticated (login), Authenticated -> Expired
//! (detected lazily on checks), Expired/Unauthenticated -> cleared store,
//! Authenticated -> Unauthenticated (logout, best-effort remote).

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::dto::{LoginRequest, LogoutRequest, Profile};
use crate::error::Result;
use crate::session::{Session, SessionStore};
use crate::transport::Transport;

/// Owns login, logout, and session checks
#[derive(Debug, Clone)]
pub struct AuthService {
    transport: Arc<Transport>,
    store: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(transport: Arc<Transport>, store: Arc<dyn SessionStore>) -> Self {
        Self { transport, store }
    }

    /// Login and persist the resulting session.
    ///
    /// The display name is the staff name when the profile carries one,
    /// otherwise the account email. Expiry is stamped 23 hours out.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        let request = LoginRequest { username, password };
        let profile: Profile = self
            .transport
            .post("/api/Login", &request, "Login failed")
            .await?;

        let session = Session::new(profile.token.clone(), profile.display_name());
        self.store.save(&session)?;
        info!(user = %session.user_name, "Logged in");
        Ok(session)
    }

    /// The current valid session, if any.
    ///
    /// An expired session is treated as absent and the store is cleared
    /// on the spot - expiry is only ever detected here, there is no
    /// background timer.
    pub fn current(&self) -> Option<Session> {
        match self.store.load() {
            Some(session) if !session.is_expired() => Some(session),
            Some(session) => {
                info!(user = %session.user_name, "Session expired, clearing");
                if let Err(e) = self.store.clear() {
                    warn!(error = %e, "Failed to clear expired session");
                }
                None
            }
            None => None,
        }
    }

    /// Whether a valid session exists right now.
    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// Logout.
    ///
    /// The server-side call is best-effort - a failure is logged, never
    /// propagated - and the local session is cleared unconditionally.
    pub async fn logout(&self, username: &str) -> Result<()> {
        let request = LogoutRequest { username };
        match self
            .transport
            .post::<_, serde_json::Value>("/api/Login/logout", &request, "Logout failed")
            .await
        {
            Ok(_) => debug!("Server-side logout acknowledged"),
            Err(e) => warn!(error = %e, "Server-side logout failed, clearing local session anyway"),
        }
        self.store.clear()
    }
}
