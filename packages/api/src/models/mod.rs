//! Data models exchanged with the Rulehub service.

mod profile;
mod status;
mod user;

pub use profile::{Profile, SettingsUpdate};
pub use status::{LoginStatus, RegisterStatus, STATUS_TWO_FACTOR_REQUIRED};
pub use user::UserInfo;

/// Upper-cased first character of `name`, or `?` when it is empty.
pub(crate) fn initial_of(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}
