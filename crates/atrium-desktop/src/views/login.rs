//! # Login View
//!
//! Email and password sign-in.

use atrium_session::SessionError;
use dioxus::prelude::*;

use crate::router::Route;
use crate::state::AppState;

/// Turns a sign-in failure into a message for the form.
fn describe_error(error: &SessionError) -> String {
    match error {
        SessionError::Server { status: 401, .. } | SessionError::Server { status: 403, .. } => {
            "Invalid email or password".to_string()
        }
        SessionError::TokenExpired => "The server issued an expired session".to_string(),
        SessionError::Network(_) => "Could not reach the server".to_string(),
        other => format!("Sign-in failed: {other}"),
    }
}

/// Login view component.
///
/// Exchanges email and password for a session token, starts the session and
/// opens the dashboard.
#[component]
pub fn Login() -> Element {
    let mut state = use_context::<AppState>();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // Already signed in: nothing to do here
    use_effect(move || {
        if state.is_signed_in() {
            nav.replace(Route::Dashboard {});
        }
    });

    let mut do_login = move || {
        let email_val = email.read().trim().to_string();
        let password_val = password.read().clone();

        if email_val.is_empty() || password_val.is_empty() {
            error.set(Some("Email and password are required".to_string()));
            return;
        }

        let client = match state.client() {
            Ok(client) => client,
            Err(e) => {
                error.set(Some(describe_error(&e)));
                return;
            }
        };

        loading.set(true);
        error.set(None);

        spawn(async move {
            let result = match client.login(&email_val, &password_val).await {
                Ok(token) => state.sign_in(&token),
                Err(e) => Err(e),
            };

            match result {
                Ok(_) => {
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Sign-in failed");
                    password.set(String::new());
                    error.set(Some(describe_error(&e)));
                }
            }

            loading.set(false);
        });
    };

    rsx! {
        div { class: "login-view",
            div { class: "login-card glass-panel",
                div { class: "login-header",
                    h1 { "Atrium" }
                    p { class: "text-secondary", "Sign in to continue" }
                }

                div { class: "login-form",
                    div { class: "form-group",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: "{email}",
                            disabled: *loading.read(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            value: "{password}",
                            disabled: *loading.read(),
                            oninput: move |evt| password.set(evt.value()),
                            onkeypress: move |evt| {
                                if evt.key() == Key::Enter && !*loading.read() {
                                    do_login();
                                }
                            },
                        }
                    }

                    if let Some(err) = error.read().as_ref() {
                        div { class: "alert alert-error", "{err}" }
                    }

                    button {
                        class: "btn-primary btn-lg btn-block",
                        disabled: *loading.read(),
                        onclick: move |_| do_login(),
                        if *loading.read() { "Signing In..." } else { "Sign In" }
                    }

                    p { class: "login-hint text-tertiary",
                        "Server: {state.config.read().server_url}"
                    }
                }
            }
        }
    }
}
