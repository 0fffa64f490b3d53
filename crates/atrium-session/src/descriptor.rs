//! The authenticated user's identity and role.

use serde::{Deserialize, Serialize};

/// Role of a signed-in user, derived from the administrator flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular user.
    Member,
    /// User with access to the administration section.
    Administrator,
}

impl Role {
    /// Human-readable role name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::Administrator => "Administrator",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity and role data of the signed-in user.
///
/// Owned by the session service. Views hold clones for rendering only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDescriptor {
    /// Optional display name.
    pub display_name: Option<String>,
    /// Account email.
    pub email: String,
    /// Administrator flag.
    pub is_admin: bool,
}

impl SessionDescriptor {
    /// Create a descriptor without a display name.
    pub fn new(email: impl Into<String>, is_admin: bool) -> Self {
        Self {
            display_name: None,
            email: email.into(),
            is_admin,
        }
    }

    /// Set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Name to show for this user: the display name, or the email when the
    /// name is missing or blank.
    pub fn label(&self) -> &str {
        match self.display_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => &self.email,
        }
    }

    /// Role derived from the administrator flag.
    pub fn role(&self) -> Role {
        if self.is_admin {
            Role::Administrator
        } else {
            Role::Member
        }
    }

    /// Uppercase first character of [`label`](Self::label), `'?'` if empty.
    pub fn initial(&self) -> char {
        self.label()
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_label_prefers_display_name() {
        let user = SessionDescriptor::new("ada@example.com", false).with_display_name("Ada");
        assert_eq!(user.label(), "Ada");
    }

    #[test]
    fn test_label_falls_back_to_email() {
        let user = SessionDescriptor::new("ada@example.com", false);
        assert_eq!(user.label(), "ada@example.com");

        let blank = SessionDescriptor::new("ada@example.com", false).with_display_name("   ");
        assert_eq!(blank.label(), "ada@example.com");
    }

    #[test]
    fn test_role_follows_admin_flag() {
        assert_eq!(SessionDescriptor::new("a@b.c", true).role(), Role::Administrator);
        assert_eq!(SessionDescriptor::new("a@b.c", false).role(), Role::Member);
        assert_eq!(Role::Administrator.to_string(), "Administrator");
    }

    #[test]
    fn test_initial() {
        let user = SessionDescriptor::new("zed@example.com", false).with_display_name("ünal");
        assert_eq!(user.initial(), 'Ü');

        let empty = SessionDescriptor::new("", false);
        assert_eq!(empty.initial(), '?');
    }

    proptest! {
        #[test]
        fn label_is_never_blank_when_email_is_set(
            email in "[a-z]{1,12}@[a-z]{1,8}\\.com",
            name in proptest::option::of("[ a-zA-Z]{0,10}"),
        ) {
            let user = SessionDescriptor {
                display_name: name,
                email,
                is_admin: false,
            };
            prop_assert!(!user.label().trim().is_empty());
        }
    }
}
