//! This crate contains all shared UI for the workspace.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`components`] | Form primitives, tag input, toasts |
//! | [`avatar`] | Avatar display, file checks and the square crop editor |
//! | [`auth_modal`] | Login, registration and 2FA |
//! | [`wizard`] | New-environment wizard |
//! | [`profile`] | Profile page with tabs and inline settings editing |
//! | [`settings_sidebar`] | Settings page list |
//! | [`session`] | Session context and the injected API client |
//!
//! Each view keeps its state machine in a plain module next to its component,
//! so the logic is tested against [`api::MemoryApi`] without a renderer.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

pub mod notice;
pub use notice::{show_notice, Notice, NoticeKind};

pub mod session;
pub use session::{end_session, use_api, use_session, SessionProvider, SessionState};

pub mod auth_modal;
pub use auth_modal::AuthModalView;

pub mod avatar;
pub use avatar::{AvatarComponent, AvatarPicker};

pub mod wizard;
pub use wizard::{NewEnvironment, NewEnvironmentWizard};

pub mod profile;
pub use profile::ProfileView;

pub mod settings_sidebar;
pub use settings_sidebar::{SettingsPage, SettingsSidebar};

mod navbar;
pub use navbar::Navbar;
