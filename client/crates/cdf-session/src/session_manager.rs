use crate::{DecodedIdentity, Section, SessionError, SessionResult, SessionStore, decode_token};

use std::sync::Arc;

use http::HeaderMap;
use http::header::{AUTHORIZATION, HeaderValue};
use log::{info, warn};

/// Single source of truth for the current bearer token.
///
/// Holds no state of its own: every lookup goes back to the store.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Current token, or `None` when unset or the store can't be read.
    pub fn get_token(&self) -> Option<String> {
        match self.store.get() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!("Session store unavailable: {e}");
                None
            }
        }
    }

    /// Store a freshly issued token (login).
    #[track_caller]
    pub fn set_token(&self, token: &str) -> SessionResult<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(SessionError::invalid_token("token is empty"));
        }
        self.store.set(token)
    }

    /// Drop the stored token. Safe to call when nothing is stored.
    pub fn clear_token(&self) {
        match self.store.clear() {
            Ok(()) => info!("Session token cleared"),
            Err(e) => warn!("Failed to clear session token: {e}"),
        }
    }

    pub fn decode_token(&self, token: &str) -> Option<DecodedIdentity> {
        decode_token(token)
    }

    pub fn current_identity(&self) -> Option<DecodedIdentity> {
        self.get_token().and_then(|token| decode_token(&token))
    }

    pub fn current_user_id(&self) -> Option<i64> {
        self.current_identity().map(|identity| identity.user_id)
    }

    pub fn current_user_role(&self) -> Option<String> {
        self.current_identity().map(|identity| identity.role)
    }

    /// Headers to merge into every outgoing request.
    ///
    /// Contains a single `Authorization: Bearer <token>` entry when a token is
    /// stored, and is empty otherwise.
    pub fn auth_header(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Some(token) = self.get_token() {
            match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    headers.insert(AUTHORIZATION, value);
                }
                Err(e) => warn!("Stored token is not a valid header value: {e}"),
            }
        }

        headers
    }

    /// Menu sections for the signed-in role.
    pub fn visible_sections(&self) -> Vec<Section> {
        Section::visible_to(self.current_user_role().as_deref())
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager").finish_non_exhaustive()
    }
}
