use api::UserInfo;
use dioxus::prelude::*;

use crate::auth_modal::AuthModalView;
use crate::avatar::AvatarComponent;
use crate::components::{use_toast, Button, ButtonVariant};
use crate::notice::show_notice;
use crate::session::{end_session, use_api, use_session};
use crate::settings_sidebar::{SettingsPage, SettingsSidebar};

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Settings screen: the sidebar on the left, the selected page on the right.
///
/// Anonymous visitors get a sign-in prompt instead.
#[component]
pub fn SettingsView(
    /// Called with the signed-in user's id from the Profile page.
    on_open_profile: EventHandler<String>,
) -> Element {
    let session = use_session();
    let mut current = use_signal(SettingsPage::default);
    let mut show_auth = use_signal(|| false);

    let state = session();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page settings-layout",

            if state.loading {
                p { class: "view-muted", "Loading..." }
            } else if let Some(user) = state.user {
                SettingsSidebar {
                    current: current(),
                    on_select: move |page: SettingsPage| current.set(page),
                }
                div {
                    class: "settings-content",
                    h1 { class: "view-title", "{current().label()}" }
                    match current() {
                        SettingsPage::Profile => rsx! {
                            ProfileSettings { user, on_open_profile }
                        },
                        SettingsPage::Account => rsx! {
                            AccountSettings { user }
                        },
                        SettingsPage::Security => rsx! {
                            SecuritySettings {}
                        },
                    }
                }
            } else {
                div {
                    class: "settings-signin",
                    h1 { class: "view-title", "Settings" }
                    p { class: "view-muted", "Sign in to manage your profile and account." }
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

#[component]
fn ProfileSettings(user: UserInfo, on_open_profile: EventHandler<String>) -> Element {
    let id = user.id.clone();

    rsx! {
        div {
            class: "settings-card",
            AvatarComponent {
                src: user.avatar_url.clone(),
                initial: user.initial(),
                size: 64,
            }
            div {
                class: "settings-card-text",
                p { class: "settings-card-title", "{user.display_name()}" }
                p {
                    class: "view-muted",
                    "Your username, description and avatar are edited on your profile page."
                }
            }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| on_open_profile.call(id.clone()),
                "View profile"
            }
        }
    }
}

#[component]
fn AccountSettings(user: UserInfo) -> Element {
    let api = use_api();
    let mut session = use_session();
    let toasts = use_toast();
    let mut signing_out = use_signal(|| false);

    let handle_sign_out = move |_: MouseEvent| {
        if signing_out() {
            return;
        }
        signing_out.set(true);
        let api = api.clone();
        spawn(async move {
            let notice = end_session(&api).await;
            signing_out.set(false);
            show_notice(&toasts, notice);
            // Unmounts this page
            session.write().sign_out();
        });
    };

    rsx! {
        dl {
            class: "settings-fields",
            dt { "Username" }
            dd { "{user.username}" }
            dt { "Email" }
            dd {
                if let Some(ref email) = user.email {
                    "{email}"
                } else {
                    span { class: "view-muted", "Not set" }
                }
            }
        }
        div {
            class: "mt-5",
            Button {
                variant: ButtonVariant::Danger,
                disabled: signing_out(),
                onclick: handle_sign_out,
                if signing_out() { "Signing out..." } else { "Sign out" }
            }
        }
    }
}

#[component]
fn SecuritySettings() -> Element {
    rsx! {
        h2 { class: "view-section-title", "Two-factor authentication" }
        p {
            class: "view-muted",
            "When two-factor authentication is enabled on your account, signing in asks for a \
             6-digit code after your password."
        }
    }
}
