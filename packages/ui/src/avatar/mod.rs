//! Avatar display, file selection and cropping.

pub mod editor;
pub use editor::{data_url, AvatarEditor, AvatarKind, CropRegion};

mod component;
pub use component::{AvatarComponent, AvatarPicker};
