//! # Sidebar Component
//!
//! Navigation sidebar for the application.

use atrium_session::{watch_expiry, SidebarModel};
use dioxus::prelude::*;

use crate::router::Route;
use crate::state::AppState;

/// Navigation sidebar component.
///
/// Shows navigation links, an administration section for admins, and the
/// signed-in user's name and role with a logout button. While mounted it
/// checks the session token every configured period and signs out once the
/// token has expired.
#[component]
pub fn Sidebar() -> Element {
    let mut state = use_context::<AppState>();
    let nav = use_navigator();

    // Read once at mount; later session changes remount the layout.
    let user = use_hook(move || state.current_user());
    let model = SidebarModel::build(user.as_ref());

    // Dropped with the component, which stops the timer.
    use_future(move || async move {
        let mut state = state;
        let auth = state.auth();
        let period = state.poll_interval();
        watch_expiry(&*auth, period, move || state.expire_session(nav)).await;
    });

    let on_logout = move |_| {
        state.logout(nav);
    };

    rsx! {
        nav {
            class: "sidebar",

            div {
                class: "sidebar-brand",
                "Atrium"
            }

            div {
                class: "nav-links",

                for link in model.links.iter() {
                    Link {
                        key: "{link.label}",
                        to: Route::from(link.target),
                        class: "nav-link",
                        "{link.label}"
                    }
                }
            }

            if let Some(admin) = model.admin.as_ref() {
                div {
                    class: "nav-section admin-section",

                    h3 { class: "section-label", "{admin.title}" }

                    for link in admin.links.iter() {
                        Link {
                            key: "{link.label}",
                            to: Route::from(link.target),
                            class: "nav-link",
                            "{link.label}"
                        }
                    }
                }
            }

            if let Some(panel) = model.user_panel.as_ref() {
                div {
                    class: "user-panel",

                    div { class: "user-avatar", "{panel.initial}" }

                    div {
                        class: "user-info",
                        span { class: "username", "{panel.name}" }
                        span { class: "user-role text-secondary", "{panel.role}" }
                    }
                }
            }

            button {
                class: "btn-sm btn-ghost logout-button",
                onclick: on_logout,
                "Logout"
            }
        }
    }
}
