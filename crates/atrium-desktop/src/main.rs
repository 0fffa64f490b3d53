//! # Atrium Desktop
//!
//! Desktop application shell with session-aware navigation.
//!
//! ## Architecture
//!
//! The shell signs users in against an auth server, keeps the session token
//! through `atrium-session`, and shows a navigation sidebar whose contents
//! depend on the signed-in user's role. The sidebar also watches for token
//! expiry and signs the user out when it happens.
//!
//! ## Modules
//!
//! - [`components`] - Layout and navigation sidebar
//! - [`config`] - Settings persistence
//! - [`router`] - Application routes
//! - [`state`] - Global application state
//! - [`views`] - Page-level view components

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

mod components;
mod config;
mod router;
mod state;
mod views;

use router::Route;
use state::AppState;

/// Environment variable holding the log filter, e.g. `atrium=debug`.
const LOG_ENV: &str = "ATRIUM_LOG";

fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Atrium Desktop");

    // Configure desktop window
    let cfg = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Atrium")
            .with_inner_size(LogicalSize::new(1100.0, 760.0))
            .with_min_inner_size(LogicalSize::new(800.0, 560.0)),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(cfg).launch(App);
}

/// Root application component.
///
/// Initializes global state, loads the stylesheet, and renders the router.
#[component]
fn App() -> Element {
    // Provide global application state
    use_context_provider(AppState::new);

    rsx! {
        document::Stylesheet { href: asset!("/assets/styles.css") }
        Router::<Route> {}
    }
}
