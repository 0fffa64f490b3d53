//! # Admin Settings View
//!
//! Server connection and session settings, for administrators only.

use atrium_session::{MAX_POLL_INTERVAL, MIN_POLL_INTERVAL};
use dioxus::prelude::*;

use crate::config::Config;
use crate::state::AppState;

/// Parses the poll period field. Accepts whole seconds from one second to
/// one day.
fn parse_poll_secs(input: &str) -> Result<u64, String> {
    let min = MIN_POLL_INTERVAL.as_secs();
    let max = MAX_POLL_INTERVAL.as_secs();
    match input.trim().parse::<u64>() {
        Ok(secs) if secs < min => Err(format!("Check interval must be at least {min} second")),
        Ok(secs) if secs > max => Err(format!("Check interval must be at most {max} seconds")),
        Ok(secs) => Ok(secs),
        Err(_) => Err("Check interval must be a whole number of seconds".to_string()),
    }
}

/// Admin settings view component.
///
/// Lets administrators change the auth server URL and the session expiry
/// check interval, and test the server connection. Other users see an
/// access notice.
#[component]
pub fn AdminSettings() -> Element {
    let mut state = use_context::<AppState>();
    let is_admin = state.current_user().is_some_and(|u| u.is_admin);

    let mut url_input = use_signal(|| state.config.read().server_url.clone());
    let mut poll_input = use_signal(|| state.config.read().expiry_poll_secs.to_string());
    let mut saved = use_signal(|| Option::<Result<(), String>>::None);
    let mut testing = use_signal(|| false);
    let mut test_result = use_signal(|| Option::<Result<(), String>>::None);

    let on_save = move |_| {
        let expiry_poll_secs = match parse_poll_secs(&poll_input.read()) {
            Ok(secs) => secs,
            Err(msg) => {
                saved.set(Some(Err(msg)));
                return;
            }
        };

        state.update_config(Config {
            server_url: url_input.read().trim().to_string(),
            expiry_poll_secs,
        });
        saved.set(Some(Ok(())));
        test_result.set(None);
    };

    let on_test = move |_| {
        let client = match state.client() {
            Ok(client) => client,
            Err(e) => {
                test_result.set(Some(Err(e.to_string())));
                return;
            }
        };
        testing.set(true);
        test_result.set(None);

        spawn(async move {
            match client.health().await {
                Ok(true) => test_result.set(Some(Ok(()))),
                Ok(false) => {
                    test_result.set(Some(Err("Server returned unhealthy status".to_string())))
                }
                Err(e) => test_result.set(Some(Err(e.to_string()))),
            }
            testing.set(false);
        });
    };

    let min_secs = MIN_POLL_INTERVAL.as_secs();
    let max_secs = MAX_POLL_INTERVAL.as_secs();

    if !is_admin {
        return rsx! {
            div {
                class: "settings-view",
                h2 { class: "mb-lg", "Admin Settings" }
                div { class: "alert alert-error", "Administrator access is required to view this page." }
            }
        };
    }

    rsx! {
        div {
            class: "settings-view",

            h2 { class: "mb-lg", "Admin Settings" }

            div {
                class: "settings-section",

                h3 { class: "mb-md", "Auth Server" }

                div {
                    class: "mb-md",

                    label { "Server URL" }

                    input {
                        r#type: "text",
                        value: "{url_input}",
                        oninput: move |evt| url_input.set(evt.value()),
                    }
                }

                div {
                    class: "mb-md",

                    label { "Session check interval (seconds)" }

                    input {
                        r#type: "number",
                        min: "{min_secs}",
                        max: "{max_secs}",
                        value: "{poll_input}",
                        oninput: move |evt| poll_input.set(evt.value()),
                    }
                }

                div {
                    class: "btn-group",

                    button {
                        class: "btn-primary",
                        onclick: on_save,
                        "Save"
                    }

                    button {
                        class: "btn-success",
                        onclick: on_test,
                        disabled: *testing.read(),
                        if *testing.read() { "Testing..." } else { "Test Connection" }
                    }
                }

                if let Some(result) = saved.read().as_ref() {
                    match result {
                        Ok(()) => rsx! {
                            div { class: "alert alert-success", "Settings saved. The new interval applies at next sign-in." }
                        },
                        Err(msg) => rsx! {
                            div { class: "alert alert-error", "{msg}" }
                        },
                    }
                }

                if let Some(result) = test_result.read().as_ref() {
                    match result {
                        Ok(()) => rsx! {
                            div { class: "alert alert-success", "Connection successful!" }
                        },
                        Err(msg) => rsx! {
                            div { class: "alert alert-error", "Connection failed: {msg}" }
                        },
                    }
                }
            }
        }
    }
}
