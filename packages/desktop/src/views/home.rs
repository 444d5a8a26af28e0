use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let session = ui::use_session();
    let nav = use_navigator();

    let state = session();
    let signed_in = state
        .user
        .as_ref()
        .map(|user| (user.id.clone(), user.display_name().to_string()));

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Rulehub" }
            if let Some((user_id, name)) = signed_in {
                p { "Welcome back, {name}." }
                div {
                    class: "wizard-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            nav.push(Route::Profile { user_id: user_id.clone() });
                        },
                        "Your profile"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            nav.push(Route::NewEnvironment {});
                        },
                        "New environment"
                    }
                }
            } else if !state.loading {
                p {
                    class: "view-muted",
                    "Sign in from the top bar to manage your profile and environments."
                }
            }
        }
    }
}
