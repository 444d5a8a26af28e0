mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod settings;
pub use settings::SettingsView;
