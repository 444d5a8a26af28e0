//! Authentication modal: login, registration and the 2FA challenge.

pub mod flow;
pub use flow::{AuthMode, AuthModal, Transition};

mod component;
pub use component::AuthModalView;
