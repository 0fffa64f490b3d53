//! # Profile View
//!
//! Shows the signed-in user's session details.

use dioxus::prelude::*;

use crate::state::AppState;

/// Profile view component.
#[component]
pub fn Profile() -> Element {
    let state = use_context::<AppState>();

    let Some(user) = state.current_user() else {
        return rsx! {};
    };

    let display_name = user.display_name.clone().unwrap_or_else(|| "Not set".to_string());

    rsx! {
        div {
            class: "profile-view",

            h2 { class: "mb-lg", "Profile" }

            div {
                class: "current-state",

                div {
                    strong { "Name: " }
                    span { "{display_name}" }
                }

                div {
                    strong { "Email: " }
                    span { class: "mono", "{user.email}" }
                }

                div {
                    strong { "Role: " }
                    span { "{user.role()}" }
                }
            }
        }
    }
}
