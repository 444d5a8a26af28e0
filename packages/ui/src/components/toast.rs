//! Styled wrapper over the toast primitive.

use dioxus::prelude::*;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, Toasts};

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

/// Hosts the toast region. Wrap the router with it.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: TOAST_CSS }
        dioxus_primitives::toast::ToastProvider {
            {children}
        }
    }
}
