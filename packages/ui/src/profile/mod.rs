//! User profile page with tabs and inline settings editing.

pub mod page;
pub use page::{EditMode, ProfileLoad, ProfilePage, ProfileTab, SaveOutcome, SettingsDraft};

mod component;
pub use component::ProfileView;
