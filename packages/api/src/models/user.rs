//! # User identity as seen by the client
//!
//! [`UserInfo`] is the session value: the identity summary of whoever is signed
//! in. It is returned by `GET /auth/me` and replaced wholesale on every sign in
//! and sign out. It is `Serialize + Deserialize + PartialEq` so it can be
//! compared cheaply when the session signal is refreshed.
//!
//! The helpers [`UserInfo::display_name`] and [`UserInfo::initial`] feed the
//! navbar and the avatar fallback.

use serde::{Deserialize, Serialize};

/// Identity summary of the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if the username is blank.
    pub fn display_name(&self) -> &str {
        if self.username.trim().is_empty() {
            self.email.as_deref().unwrap_or("Unknown user")
        } else {
            &self.username
        }
    }

    /// Upper-cased first character of the display name, used when no avatar exists.
    pub fn initial(&self) -> String {
        super::initial_of(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str, email: Option<&str>) -> UserInfo {
        UserInfo {
            id: "u1".into(),
            username: username.into(),
            email: email.map(Into::into),
            avatar_url: None,
        }
    }

    #[test]
    fn display_name_prefers_username() {
        assert_eq!(user("ada", Some("ada@example.com")).display_name(), "ada");
        assert_eq!(user(" ", Some("ada@example.com")).display_name(), "ada@example.com");
        assert_eq!(user("", None).display_name(), "Unknown user");
    }

    #[test]
    fn initial_is_uppercased() {
        assert_eq!(user("ada", None).initial(), "A");
        assert_eq!(user("ßtraße", None).initial(), "SS");
    }

    #[test]
    fn optional_fields_default_when_missing() {
        let parsed: UserInfo = serde_json::from_str(r#"{"id":"7","username":"bob"}"#).unwrap();
        assert_eq!(parsed, user("bob", None).with_id("7"));
    }

    impl UserInfo {
        fn with_id(mut self, id: &str) -> Self {
            self.id = id.into();
            self
        }
    }
}
