//! # UI Components
//!
//! Reusable UI components for the Atrium desktop shell.
//!
//! - [`Layout`] - Signed-in application layout
//! - [`Sidebar`] - Navigation sidebar with session expiry watch

mod layout;
mod sidebar;

pub use layout::Layout;
pub use sidebar::Sidebar;
