//! # Views
//!
//! Page-level view components for the Atrium desktop shell.
//!
//! - [`Login`] - Email and password sign-in
//! - [`Dashboard`] - Landing page
//! - [`Profile`] - Signed-in user's details
//! - [`AdminSettings`] - Server and session settings (administrators)

mod admin_settings;
mod dashboard;
mod login;
mod profile;

pub use admin_settings::AdminSettings;
pub use dashboard::Dashboard;
pub use login::Login;
pub use profile::Profile;
