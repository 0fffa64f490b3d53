//! # Layout Component
//!
//! Layout wrapper for all signed-in routes.

use dioxus::prelude::*;

use super::Sidebar;
use crate::router::Route;
use crate::state::AppState;

/// Main layout wrapper component.
///
/// Provides the application shell with the navigation sidebar. Routed views
/// are rendered inside the main content area via `Outlet`.
///
/// # Structure
///
/// ```text
/// +---------------------------------------------+
/// | Sidebar |                                   |
/// |         |                                   |
/// |  Nav    |         Main Content              |
/// |  Admin  |         (Outlet)                  |
/// |  User   |                                   |
/// | Logout  |                                   |
/// +---------------------------------------------+
/// ```
///
/// Visitors without a session are sent to the login screen.
#[component]
pub fn Layout() -> Element {
    let state = use_context::<AppState>();
    let nav = use_navigator();
    let signed_in = state.is_signed_in();

    use_effect(move || {
        if !state.is_signed_in() {
            tracing::debug!("No session, redirecting to login");
            nav.replace(Route::Login {});
        }
    });

    if !signed_in {
        return rsx! {};
    }

    rsx! {
        div {
            class: "app-layout",

            Sidebar {}

            main {
                class: "content",

                Outlet::<Route> {}
            }
        }
    }
}
