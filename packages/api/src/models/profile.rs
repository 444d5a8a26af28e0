use serde::{Deserialize, Serialize};

/// Public profile snapshot of a (possibly other) user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Profile {
    /// The service answers unknown ids with an empty record rather than a 404.
    pub fn exists(&self) -> bool {
        !self.username.is_empty()
    }

    /// Upper-cased first character of the username, shown when there is no avatar.
    pub fn initial(&self) -> String {
        super::initial_of(&self.username)
    }
}

/// Body of `PUT /users/me/settings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingsUpdate {
    pub username: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(username: &str) -> Profile {
        Profile {
            id: "u1".into(),
            username: username.into(),
            ..Profile::default()
        }
    }

    #[test]
    fn initial_is_the_upper_cased_first_letter() {
        assert_eq!(profile("ada").initial(), "A");
        assert_eq!(profile("émile").initial(), "É");
    }

    #[test]
    fn missing_profile_has_a_placeholder_initial() {
        let empty = profile("");
        assert!(!empty.exists());
        assert_eq!(empty.initial(), "?");
    }
}
