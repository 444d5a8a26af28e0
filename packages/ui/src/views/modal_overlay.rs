use dioxus::prelude::*;

const MODAL_CSS: Asset = asset!("/assets/styling/modal.css");

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card or pressing Escape triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: MODAL_CSS }
        div {
            class: "modal-overlay",
            tabindex: "-1",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                class: "modal-card",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
