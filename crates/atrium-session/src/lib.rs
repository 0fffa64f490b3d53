//! Session handling for the Atrium application shell.
//!
//! This crate provides:
//! - **Descriptors**: the signed-in user's name, email and admin flag
//! - **Tokens**: decoding of session token claims and expiry checks
//! - **Service**: the [`AuthService`] contract and [`SessionService`]
//! - **Storage**: a file-backed [`SessionStore`]
//! - **Client**: password sign-in against the auth server
//! - **Expiry**: a periodic, edge-triggered expiry watcher
//! - **Sidebar**: which links and panels the navigation sidebar shows
//!
//! # Example
//!
//! ```
//! use atrium_session::{
//!     AuthService, Claims, SessionService, SessionStore, SessionToken, SidebarModel,
//! };
//!
//! let service = SessionService::new(SessionStore::in_memory());
//! assert!(SidebarModel::build(service.user().as_ref()).user_panel.is_none());
//!
//! let token = SessionToken::encode_unsigned(&Claims {
//!     sub: "1".into(),
//!     email: "ada@example.com".into(),
//!     name: Some("Ada".into()),
//!     admin: true,
//!     exp: None,
//! })
//! .unwrap();
//! service.sign_in(&token).unwrap();
//!
//! let model = SidebarModel::build(service.user().as_ref());
//! assert!(model.admin.is_some());
//! assert_eq!(model.user_panel.unwrap().name, "Ada");
//! ```

mod client;
mod clock;
mod descriptor;
mod error;
mod expiry;
mod service;
mod sidebar;
mod store;
mod token;

pub use client::{AuthClient, LoginRequest, LoginResponse};
pub use clock::{Clock, ManualClock, SystemClock};
pub use descriptor::{Role, SessionDescriptor};
pub use error::{Result, SessionError};
pub use expiry::{
    clamp_poll_interval, watch_expiry, ExpiryCheck, ExpiryWatch, DEFAULT_POLL_INTERVAL,
    MAX_POLL_INTERVAL, MIN_POLL_INTERVAL,
};
pub use service::{AuthService, Destination, NavigationHandle, SessionService};
pub use sidebar::{AdminSection, NavLink, SidebarModel, UserPanel, ADMIN_LINKS, MAIN_LINKS};
pub use store::SessionStore;
pub use token::{Claims, SessionToken};
