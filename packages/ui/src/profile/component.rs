use api::{AccountApi, Profile};
use dioxus::prelude::*;

use crate::avatar::{AvatarComponent, AvatarPicker};
use crate::components::{use_toast, Button, ButtonVariant, Input, Label, Textarea};
use crate::notice::show_notice;
use crate::session::{use_api, use_session};
use crate::views::ModalOverlay;

use super::page::{fetch_profile, save_settings, EditMode, ProfileLoad, ProfilePage, ProfileTab};

const PROFILE_CSS: Asset = asset!("/assets/styling/profile.css");

/// Profile page for `user_id`.
///
/// Key this component by `user_id` so navigating between profiles starts from
/// a fresh page.
#[component]
pub fn ProfileView(
    user_id: String,
    /// Shown on the owner's Environments tab when set.
    #[props(default)]
    on_new_environment: Option<EventHandler<()>>,
) -> Element {
    let api = use_api();
    let mut session = use_session();
    let toasts = use_toast();
    let mut page = use_signal(ProfilePage::default);
    let mut refresh = use_signal(|| 0u32);

    let load_api = api.clone();
    let _loader = use_resource(move || {
        let api = load_api.clone();
        let user_id = user_id.clone();
        // Re-run after every successful save
        let _ = refresh();
        async move {
            let load = fetch_profile(&api, &user_id).await;
            page.write().apply_load(load);
        }
    });

    let handle_save = move |_: MouseEvent| {
        if !page.write().begin_save() {
            return;
        }
        let api = api.clone();
        spawn(async move {
            let (snapshot, draft) = {
                let state = page.read();
                (state.load.profile().cloned(), state.draft.clone())
            };
            let Some(snapshot) = snapshot else {
                page.write().saving = false;
                return;
            };

            let outcome = save_settings(&api, &snapshot, &draft).await;
            page.write().apply_save(&outcome);
            if let Some(notice) = outcome.notice() {
                show_notice(&toasts, notice);
            }
            if outcome.needs_refetch() {
                *refresh.write() += 1;
                // The navbar shows the session copy of the username and avatar
                match api.get_user_info().await {
                    Ok(Some(user)) => session.write().sign_in(user),
                    Ok(None) => session.write().sign_out(),
                    Err(e) => tracing::warn!("Could not refresh session after save: {}", e),
                }
            }
        });
    };

    let state = page.read().clone();
    let viewer = session.read().user.clone();

    let body = match &state.load {
        ProfileLoad::Loading => rsx! {
            p { class: "view-muted", "Loading profile..." }
        },
        ProfileLoad::NotFound => rsx! {
            div {
                class: "profile-empty",
                h1 { class: "view-title", "User not found" }
                p { class: "view-muted", "This profile does not exist or was removed." }
            }
        },
        ProfileLoad::Failed(message) => rsx! {
            div {
                class: "profile-empty",
                p { class: "view-muted", "{message}" }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| *refresh.write() += 1,
                    "Retry"
                }
            }
        },
        ProfileLoad::Loaded(profile) => {
            let owner = state.is_owner(viewer.as_ref());
            let editing = state.mode == EditMode::Editing;
            let avatar_src = state
                .draft
                .avatar_preview()
                .filter(|_| editing)
                .or_else(|| profile.avatar_url.clone());

            rsx! {
                div {
                    class: "profile-header",
                    AvatarComponent {
                        src: avatar_src,
                        initial: profile.initial(),
                        size: 96,
                    }
                    div {
                        class: "profile-identity",
                        h1 { class: "view-title", "{profile.username}" }
                        if !profile.description.is_empty() {
                            p { class: "profile-description", "{profile.description}" }
                        }
                    }
                    if owner && !editing {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| {
                                let viewer = session.read().user.clone();
                                page.write().enter_settings_edit(viewer.as_ref());
                            },
                            "Edit profile"
                        }
                    }
                }

                if editing {
                    SettingsEditor { page, on_save: handle_save }
                }

                nav {
                    class: "profile-tabs",
                    for tab in ProfileTab::ALL {
                        button {
                            key: "{tab.label()}",
                            class: if tab == state.tab { "profile-tab profile-tab-active" } else { "profile-tab" },
                            onclick: move |_| page.write().select_tab(tab),
                            "{tab.label()}"
                        }
                    }
                }

                div {
                    class: "profile-panel",
                    match state.tab {
                        ProfileTab::Overview => rsx! {
                            OverviewPanel { profile: profile.clone() }
                        },
                        ProfileTab::Rules => rsx! {
                            p { class: "view-muted", "{profile.username} has not published any rules yet." }
                        },
                        ProfileTab::Rulesets => rsx! {
                            p { class: "view-muted", "{profile.username} has not published any rulesets yet." }
                        },
                        ProfileTab::Environments => rsx! {
                            p { class: "view-muted", "No environments yet." }
                            if owner {
                                if let Some(handler) = on_new_environment {
                                    Button {
                                        variant: ButtonVariant::Primary,
                                        onclick: move |_| handler.call(()),
                                        "New environment"
                                    }
                                }
                            }
                        },
                    }
                }
            }
        }
    };

    rsx! {
        document::Stylesheet { href: PROFILE_CSS }
        div {
            class: "view-page profile-page",
            {body}
        }
        if state.confirm_discard {
            ModalOverlay {
                on_close: move |_| page.write().cancel_exit(),
                div {
                    class: "modal-body",
                    h2 { class: "modal-title", "Discard changes?" }
                    p { class: "view-muted", "Your edits to this profile have not been saved." }
                    div {
                        class: "modal-actions",
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| page.write().cancel_exit(),
                            "Keep editing"
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            onclick: move |_| page.write().confirm_exit(),
                            "Discard"
                        }
                    }
                }
            }
        }
    }
}

/// Inline form for the owner's username, description and avatar.
#[component]
fn SettingsEditor(mut page: Signal<ProfilePage>, on_save: EventHandler<MouseEvent>) -> Element {
    let (username, description, saving) = {
        let state = page.read();
        (
            state.draft.username.clone(),
            state.draft.description.clone(),
            state.saving,
        )
    };

    rsx! {
        div {
            class: "profile-editor",
            div {
                class: "mb-4",
                Label { html_for: "profile-username", "Username" }
                Input {
                    id: "profile-username",
                    value: username,
                    disabled: saving,
                    oninput: move |evt: FormEvent| page.write().draft.username = evt.value(),
                }
            }
            div {
                class: "mb-4",
                Label { html_for: "profile-description", "Description" }
                Textarea {
                    id: "profile-description",
                    placeholder: "Tell others what you work on",
                    value: description,
                    disabled: saving,
                    oninput: move |evt: FormEvent| page.write().draft.description = evt.value(),
                }
            }
            div {
                class: "mb-4",
                AvatarPicker {
                    on_cropped: move |png: Vec<u8>| page.write().draft.avatar = Some(png),
                }
            }
            div {
                class: "modal-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: saving,
                    onclick: move |_| page.write().request_exit(),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: saving,
                    onclick: move |evt: MouseEvent| on_save.call(evt),
                    if saving { "Saving..." } else { "Save" }
                }
            }
        }
    }
}

#[component]
fn OverviewPanel(profile: Profile) -> Element {
    rsx! {
        div {
            class: "profile-overview",
            h2 { class: "view-section-title", "About" }
            if profile.description.is_empty() {
                p { class: "view-muted", "No description yet." }
            } else {
                p { "{profile.description}" }
            }
        }
    }
}
