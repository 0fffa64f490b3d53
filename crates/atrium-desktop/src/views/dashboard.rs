//! # Dashboard View
//!
//! Landing page after sign-in.

use dioxus::prelude::*;

use crate::router::Route;
use crate::state::AppState;

/// Dashboard view.
#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<AppState>();
    let user = state.current_user();

    rsx! {
        div {
            class: "dashboard-view",

            if let Some(user) = user {
                h2 { class: "mb-lg", "Welcome, {user.label()}" }

                p { class: "text-secondary",
                    "Use the sidebar to move between sections. "
                    Link { to: Route::Profile {}, "View your profile" }
                }

                if user.is_admin {
                    div { class: "alert alert-info",
                        "You have administrator access. "
                        Link { to: Route::AdminSettings {}, "Open admin settings" }
                    }
                }
            }
        }
    }
}
