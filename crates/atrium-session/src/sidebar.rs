//! What the navigation sidebar shows for a given session.

use crate::descriptor::{Role, SessionDescriptor};
use crate::service::Destination;

/// A single navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Text shown for the link.
    pub label: &'static str,
    /// Where the link goes.
    pub target: Destination,
}

impl NavLink {
    const fn new(label: &'static str, target: Destination) -> Self {
        Self { label, target }
    }
}

/// Links every signed-in user sees.
pub const MAIN_LINKS: [NavLink; 2] = [
    NavLink::new("Dashboard", Destination::Dashboard),
    NavLink::new("Profile", Destination::Profile),
];

/// Links only administrators see.
pub const ADMIN_LINKS: [NavLink; 1] = [NavLink::new("Admin Settings", Destination::AdminSettings)];

/// The administrator-only block of links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSection {
    /// Section heading.
    pub title: &'static str,
    /// Links in the section.
    pub links: Vec<NavLink>,
}

/// The signed-in user's name and role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPanel {
    /// Display name, or email when no name is set.
    pub name: String,
    /// Role derived from the admin flag.
    pub role: Role,
    /// Avatar letter.
    pub initial: char,
}

/// Everything the sidebar renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarModel {
    /// Links shown to everyone.
    pub links: Vec<NavLink>,
    /// Present only for administrators.
    pub admin: Option<AdminSection>,
    /// Present only when a user is signed in.
    pub user_panel: Option<UserPanel>,
}

impl SidebarModel {
    /// Build the model for `user`.
    pub fn build(user: Option<&SessionDescriptor>) -> Self {
        let admin = user.filter(|u| u.is_admin).map(|_| AdminSection {
            title: "Administration",
            links: ADMIN_LINKS.to_vec(),
        });

        let user_panel = user.map(|u| UserPanel {
            name: u.label().to_string(),
            role: u.role(),
            initial: u.initial(),
        });

        Self {
            links: MAIN_LINKS.to_vec(),
            admin,
            user_panel,
        }
    }
}
