use dioxus::prelude::*;

use crate::components::{use_toast, Button, ButtonVariant, Input, Label};
use crate::notice::show_notice;
use crate::session::{use_api, use_session};
use crate::views::ModalOverlay;

use super::flow::{
    submit_2fa, submit_login, submit_register, AuthMode, AuthModal, Transition,
    TWO_FACTOR_CODE_LEN,
};

/// Login / register / 2FA modal.
///
/// On success the fetched user is written into the session and `on_close` fires.
#[component]
pub fn AuthModalView(on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let mut session = use_session();
    let toasts = use_toast();
    let mut modal = use_signal(AuthModal::default);

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut repeat_password = use_signal(String::new);
    let mut code = use_signal(String::new);

    let mut finish = move |transition: Transition| match transition {
        Transition::Close(user) => {
            tracing::info!("Signed in as {}", user.id);
            session.write().sign_in(user);
            on_close.call(());
        }
        Transition::Stay(Some(notice)) => show_notice(&toasts, notice),
        Transition::Stay(None) => {}
    };

    let login_api = api.clone();
    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if !modal.write().begin() {
            return;
        }
        let api = login_api.clone();
        spawn(async move {
            let outcome = submit_login(&api, &email(), &password()).await;
            let transition = modal.write().apply_login(outcome);
            if matches!(modal().mode, AuthMode::TwoFactor { .. }) {
                password.set(String::new());
            }
            finish(transition);
        });
    };

    let register_api = api.clone();
    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        if !modal.write().begin() {
            return;
        }
        let api = register_api.clone();
        spawn(async move {
            let outcome =
                submit_register(&api, &username(), &email(), &password(), &repeat_password())
                    .await;
            let transition = modal.write().apply_register(outcome);
            if modal().mode == AuthMode::Login {
                password.set(String::new());
                repeat_password.set(String::new());
            }
            finish(transition);
        });
    };

    let two_factor_api = api.clone();
    let handle_two_factor = move |evt: FormEvent| {
        evt.prevent_default();
        let AuthMode::TwoFactor { email } = modal().mode else {
            return;
        };
        if !modal.write().begin() {
            return;
        }
        let api = two_factor_api.clone();
        spawn(async move {
            let outcome = submit_2fa(&api, &email, &code()).await;
            let transition = modal.write().apply_two_factor(outcome);
            finish(transition);
        });
    };

    let busy = modal().busy;

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div {
                class: "auth-modal",
                match modal().mode {
                    AuthMode::Login => rsx! {
                        h2 { class: "modal-title", "Sign in" }
                        form {
                            class: "form-stack",
                            onsubmit: handle_login,
                            Label { html_for: "auth-email", "Email" }
                            Input {
                                id: "auth-email",
                                r#type: "email",
                                placeholder: "you@example.com",
                                value: email(),
                                autofocus: true,
                                oninput: move |evt: FormEvent| email.set(evt.value()),
                            }
                            Label { html_for: "auth-password", "Password" }
                            Input {
                                id: "auth-password",
                                r#type: "password",
                                value: password(),
                                oninput: move |evt: FormEvent| password.set(evt.value()),
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                r#type: "submit",
                                disabled: busy,
                                if busy { "Signing in..." } else { "Sign in" }
                            }
                        }
                        p {
                            class: "modal-footer",
                            "Don't have an account? "
                            button {
                                class: "link-button",
                                r#type: "button",
                                onclick: move |_| modal.write().toggle_mode(),
                                "Create one"
                            }
                        }
                    },
                    AuthMode::Register => rsx! {
                        h2 { class: "modal-title", "Create account" }
                        form {
                            class: "form-stack",
                            onsubmit: handle_register,
                            Label { html_for: "auth-username", "Username" }
                            Input {
                                id: "auth-username",
                                value: username(),
                                autofocus: true,
                                oninput: move |evt: FormEvent| username.set(evt.value()),
                            }
                            Label { html_for: "auth-email", "Email" }
                            Input {
                                id: "auth-email",
                                r#type: "email",
                                value: email(),
                                oninput: move |evt: FormEvent| email.set(evt.value()),
                            }
                            Label { html_for: "auth-password", "Password" }
                            Input {
                                id: "auth-password",
                                r#type: "password",
                                value: password(),
                                oninput: move |evt: FormEvent| password.set(evt.value()),
                            }
                            Label { html_for: "auth-repeat", "Repeat password" }
                            Input {
                                id: "auth-repeat",
                                r#type: "password",
                                value: repeat_password(),
                                oninput: move |evt: FormEvent| repeat_password.set(evt.value()),
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                r#type: "submit",
                                disabled: busy,
                                if busy { "Creating account..." } else { "Create account" }
                            }
                        }
                        p {
                            class: "modal-footer",
                            "Already registered? "
                            button {
                                class: "link-button",
                                r#type: "button",
                                onclick: move |_| modal.write().toggle_mode(),
                                "Sign in"
                            }
                        }
                    },
                    AuthMode::TwoFactor { email: challenge_email } => rsx! {
                        h2 { class: "modal-title", "Two-factor authentication" }
                        p {
                            class: "view-muted",
                            "Enter the {TWO_FACTOR_CODE_LEN}-digit code for {challenge_email}."
                        }
                        form {
                            class: "form-stack",
                            onsubmit: handle_two_factor,
                            Input {
                                id: "auth-code",
                                class: "code-input",
                                placeholder: "000000",
                                value: code(),
                                autofocus: true,
                                maxlength: TWO_FACTOR_CODE_LEN as u32,
                                oninput: move |evt: FormEvent| code.set(evt.value()),
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                r#type: "submit",
                                disabled: busy,
                                if busy { "Verifying..." } else { "Verify" }
                            }
                        }
                    },
                }
            }
        }
    }
}
