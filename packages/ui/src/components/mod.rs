//! Form primitives and shared widgets.
//!
//! All of them are controlled: the caller owns the value and receives every
//! change through an event handler.

mod button;
pub use button::{Button, ButtonVariant};

mod checkbox;
pub use checkbox::Checkbox;

mod input;
pub use input::Input;

mod label;
pub use label::Label;

mod textarea;
pub use textarea::Textarea;

pub mod tag_input;
pub use tag_input::{Tag, TagInput, TagList};

mod toast;
pub use toast::{use_toast, ToastOptions, ToastProvider, Toasts};
