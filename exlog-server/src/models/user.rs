//! User identity types

use std::fmt;

use uuid::Uuid;

use super::validation::{required_text, ValidationError};

/// Maximum length for usernames
const MAX_USERNAME_LEN: usize = 128;

/// Validated username.
///
/// Uniqueness is not enforced; two users may share a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a username from optional request input.
    ///
    /// # Rules
    /// - Must be present
    /// - Must contain something other than whitespace
    /// - Max 128 characters
    ///
    /// # Example
    /// ```
    /// use exlog_server::models::Username;
    ///
    /// assert!(Username::new(Some("fcc_test")).is_ok());
    /// assert!(Username::new(Some("")).is_err());
    /// assert!(Username::new(None).is_err());
    /// ```
    pub fn new(s: Option<&str>) -> Result<Self, ValidationError> {
        required_text("username", s, MAX_USERNAME_LEN).map(Self)
    }

    /// Get the username as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Opaque user identifier, generated by the store when a user is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Parse an identifier from its text form.
    ///
    /// Returns `None` when the text cannot be an identifier at all.
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s.trim()).ok().map(Self)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
