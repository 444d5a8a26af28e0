use dioxus::prelude::*;

use crate::auth_modal::AuthModalView;
use crate::avatar::AvatarComponent;
use crate::components::{Button, ButtonVariant};
use crate::session::use_session;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Top bar. `children` are the platform's navigation links; the right edge shows
/// the signed-in user or a Sign in button that opens the auth modal.
#[component]
pub fn Navbar(on_open_profile: EventHandler<String>, children: Element) -> Element {
    let session = use_session();
    let mut show_auth = use_signal(|| false);

    let state = session();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        div {
            class: "navbar",
            span { class: "navbar-brand", "Rulehub" }
            div {
                class: "navbar-links",
                {children}
            }
            div {
                class: "navbar-session",
                if state.loading {
                    span { class: "view-muted", "..." }
                } else if let Some(user) = state.user {
                    button {
                        class: "navbar-user",
                        title: "Your profile",
                        onclick: {
                            let id = user.id.clone();
                            move |_| on_open_profile.call(id.clone())
                        },
                        AvatarComponent {
                            src: user.avatar_url.clone(),
                            initial: user.initial(),
                            size: 28,
                        }
                        span { "{user.display_name()}" }
                    }
                } else {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| show_auth.set(true),
                        "Sign in"
                    }
                }
            }
        }
        if show_auth() {
            AuthModalView { on_close: move |_| show_auth.set(false) }
        }
    }
}
