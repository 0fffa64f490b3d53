//! # Routing
//!
//! Defines the application routes and navigation structure.

use atrium_session::Destination;
use dioxus::prelude::*;

use crate::components::Layout;
use crate::views::{AdminSettings, Dashboard, Login, Profile};

/// Application routes.
///
/// Signed-in routes are wrapped in the [`Layout`] component, which provides
/// the sidebar. The login screen stands alone.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    /// Email and password sign-in.
    #[route("/login")]
    Login {},

    /// Layout wrapper for signed-in routes.
    #[layout(Layout)]
        /// Landing page.
        #[route("/")]
        Dashboard {},

        /// The signed-in user's details.
        #[route("/profile")]
        Profile {},

        /// Administrator settings.
        #[route("/admin/settings")]
        AdminSettings {},
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Login => Route::Login {},
            Destination::Dashboard => Route::Dashboard {},
            Destination::Profile => Route::Profile {},
            Destination::AdminSettings => Route::AdminSettings {},
        }
    }
}
