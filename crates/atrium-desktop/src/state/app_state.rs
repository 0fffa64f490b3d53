//! # Application State
//!
//! Global state management using Dioxus signals and context.

use std::sync::Arc;
use std::time::Duration;

use atrium_session::{
    AuthClient, AuthService, Destination, NavigationHandle, SessionDescriptor, SessionService,
    SessionStore,
};
use dioxus::prelude::*;

use crate::config::Config;
use crate::router::Route;

/// Adapts the Dioxus router to the session layer's navigation handle.
#[derive(Clone, Copy)]
pub struct RouteNavigator(pub Navigator);

impl NavigationHandle for RouteNavigator {
    fn redirect(&self, destination: Destination) {
        if self.0.replace(Route::from(destination)).is_some() {
            tracing::warn!(?destination, "Navigation failed");
        }
    }
}

/// Global application state.
///
/// Shared across all components via Dioxus context.
/// Use `use_context::<AppState>()` to access in components.
///
/// # Examples
///
/// ```rust,ignore
/// #[component]
/// fn Greeting() -> Element {
///     let state = use_context::<AppState>();
///
///     rsx! {
///         if let Some(user) = state.current_user() {
///             p { "Hello, {user.label()}" }
///         }
///     }
/// }
/// ```
#[derive(Clone, Copy)]
pub struct AppState {
    /// The signed-in user, if any.
    pub session: Signal<Option<SessionDescriptor>>,

    /// Persisted application settings.
    pub config: Signal<Config>,

    /// Session service owning the token.
    auth: Signal<Arc<SessionService>>,
}

impl AppState {
    /// Creates the application state, loading config and any stored session.
    ///
    /// A stored session whose token has already expired is not restored.
    #[must_use]
    pub fn new() -> Self {
        let config = Config::load();

        let store = match Config::session_path() {
            Some(path) => SessionStore::open(path),
            None => {
                tracing::warn!("No config directory, session will not persist");
                SessionStore::in_memory()
            }
        };
        let auth = Arc::new(SessionService::new(store));

        let session = if auth.is_token_expired() {
            None
        } else {
            auth.user()
        };
        if let Some(user) = &session {
            tracing::info!(email = %user.email, "Restored session");
        }

        Self {
            session: Signal::new(session),
            config: Signal::new(config),
            auth: Signal::new(auth),
        }
    }

    /// Session service shared with background tasks.
    #[must_use]
    pub fn auth(&self) -> Arc<SessionService> {
        self.auth.peek().clone()
    }

    /// The signed-in user.
    #[must_use]
    pub fn current_user(&self) -> Option<SessionDescriptor> {
        self.session.read().clone()
    }

    /// Check if a user is signed in.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.session.read().is_some()
    }

    /// Period between session expiry checks.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        self.config.read().poll_interval()
    }

    /// Creates an [`AuthClient`] for the configured server.
    pub fn client(&self) -> atrium_session::Result<AuthClient> {
        AuthClient::new(self.config.read().server_url.clone())
    }

    /// Starts a session from a token issued by the auth server.
    pub fn sign_in(&mut self, token: &str) -> atrium_session::Result<SessionDescriptor> {
        let user = self.auth().sign_in(token)?;
        self.session.set(Some(user.clone()));
        Ok(user)
    }

    /// Ends the session and redirects to the login screen.
    pub fn logout(&mut self, nav: Navigator) {
        self.session.set(None);
        self.auth().logout(&RouteNavigator(nav));
    }

    /// Ends a session whose token expired.
    pub fn expire_session(&mut self, nav: Navigator) {
        tracing::info!("Session expired, signing out");
        self.logout(nav);
    }

    /// Replaces and persists the configuration.
    pub fn update_config(&mut self, config: Config) {
        if let Err(e) = config.save() {
            tracing::warn!("Failed to save config: {:#}", e);
        }
        self.config.set(config);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
