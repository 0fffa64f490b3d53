//! The authentication service contract and its default implementation.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::descriptor::SessionDescriptor;
use crate::error::{Result, SessionError};
use crate::store::SessionStore;
use crate::token::SessionToken;

/// Places the session layer can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Sign-in screen.
    Login,
    /// Landing page after sign-in.
    Dashboard,
    /// The signed-in user's profile.
    Profile,
    /// Administration settings.
    AdminSettings,
}

/// Handle for programmatic route changes.
pub trait NavigationHandle {
    /// Replace the current location with `destination`.
    fn redirect(&self, destination: Destination);
}

/// What views need from the authentication service.
pub trait AuthService {
    /// The signed-in user, if any.
    fn user(&self) -> Option<SessionDescriptor>;

    /// Whether the session token is expired. No token counts as expired.
    fn is_token_expired(&self) -> bool;

    /// End the session and redirect to the sign-in screen.
    fn logout(&self, nav: &dyn NavigationHandle);
}

impl<A: AuthService + ?Sized> AuthService for Arc<A> {
    fn user(&self) -> Option<SessionDescriptor> {
        (**self).user()
    }

    fn is_token_expired(&self) -> bool {
        (**self).is_token_expired()
    }

    fn logout(&self, nav: &dyn NavigationHandle) {
        (**self).logout(nav)
    }
}

/// Session service backed by a [`SessionStore`].
pub struct SessionService {
    store: SessionStore,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl SessionService {
    /// Create a service using the wall clock.
    pub fn new(store: SessionStore) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Create a service with a custom clock.
    pub fn with_clock(store: SessionStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Start a session from a raw token.
    ///
    /// # Errors
    ///
    /// * [`SessionError::MalformedToken`] - the token cannot be decoded
    /// * [`SessionError::TokenExpired`] - the token is already expired
    ///
    /// Nothing is stored when an error is returned. A failure to persist
    /// the token is logged; the in-memory session still starts.
    pub fn sign_in(&self, raw: &str) -> Result<SessionDescriptor> {
        let token = SessionToken::parse(raw)?;
        if token.is_expired_at(self.clock.now()) {
            return Err(SessionError::TokenExpired);
        }

        if let Err(e) = self.store.set(token.as_str().to_string()) {
            tracing::warn!(error = %e, "Failed to persist session");
        }

        let user = token.descriptor();
        tracing::info!(email = %user.email, admin = user.is_admin, "Signed in");
        Ok(user)
    }

    /// The raw token of the current session.
    pub fn token(&self) -> Option<String> {
        self.store.get()
    }

    fn current(&self) -> Option<SessionToken> {
        let raw = self.store.get()?;
        match SessionToken::parse(&raw) {
            Ok(token) => Some(token),
            Err(e) => {
                tracing::warn!(error = %e, "Stored session token is unreadable");
                None
            }
        }
    }
}

impl AuthService for SessionService {
    fn user(&self) -> Option<SessionDescriptor> {
        self.current().map(|t| t.descriptor())
    }

    fn is_token_expired(&self) -> bool {
        match self.current() {
            Some(token) => token.is_expired_at(self.clock.now()),
            None => true,
        }
    }

    fn logout(&self, nav: &dyn NavigationHandle) {
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "Failed to remove stored session");
        }
        tracing::info!("Signed out");
        nav.redirect(Destination::Login);
    }
}
