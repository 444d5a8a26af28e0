use dioxus::prelude::*;

use crate::components::{
    use_toast, Button, ButtonVariant, Checkbox, Input, Label, TagInput, TagList, Textarea,
};
use crate::notice::{show_notice, Notice};

use super::stages::{NewEnvironment, Stage, Wizard};

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Three-stage form for a new environment.
///
/// Creating hands the payload to `on_create`; the wizard itself makes no call.
#[component]
pub fn NewEnvironmentWizard(
    on_create: EventHandler<NewEnvironment>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut wizard = use_signal(Wizard::default);
    let toasts = use_toast();

    let handle_create = move |_: MouseEvent| match wizard().finish() {
        Ok(env) => {
            tracing::info!("New environment submitted: {} ({} tags)", env.name, env.tags.len());
            on_create.call(env);
        }
        Err(e) => {
            wizard.write().jump(Stage::Details);
            show_notice(&toasts, Notice::error(e.to_string()));
        }
    };

    let state = wizard();
    let stage = state.stage;

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page wizard",
            h1 { class: "view-title", "New environment" }

            // Stage indicator: every step is clickable
            ol {
                class: "wizard-steps",
                for s in Stage::ALL {
                    li {
                        key: "{s.number()}",
                        class: step_class(s, stage),
                        onclick: move |_| wizard.write().jump(s),
                        span { class: "wizard-step-number", "{s.number()}" }
                        span { class: "wizard-step-title", "{s.title()}" }
                    }
                }
            }

            div {
                class: "wizard-body",
                match stage {
                    Stage::Details => rsx! {
                        div {
                            class: "mb-4",
                            Label { html_for: "env-name", "Name" }
                            Input {
                                id: "env-name",
                                placeholder: "production",
                                value: state.name.clone(),
                                autofocus: true,
                                oninput: move |evt: FormEvent| wizard.write().name = evt.value(),
                            }
                        }
                        Checkbox {
                            id: "env-private",
                            checked: state.private,
                            onchange: move |checked: bool| wizard.write().private = checked,
                            "Private environment"
                        }
                        p {
                            class: "view-muted",
                            "Private environments are only visible to you."
                        }
                    },
                    Stage::Description => rsx! {
                        Label { html_for: "env-description", "Description" }
                        Textarea {
                            id: "env-description",
                            placeholder: "What is this environment for?",
                            rows: 6,
                            value: state.description.clone(),
                            oninput: move |evt: FormEvent| wizard.write().description = evt.value(),
                        }
                        p { class: "view-muted", "Optional." }
                    },
                    Stage::Tags => rsx! {
                        Label { html_for: "env-tags", "Tags" }
                        TagInput {
                            id: "env-tags",
                            tags: state.tags.clone(),
                            onchange: move |tags: TagList| wizard.write().tags = tags,
                        }
                    },
                }
            }

            div {
                class: "wizard-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                div { class: "flex-1" }
                if !stage.is_first() {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| wizard.write().back(),
                        "Back"
                    }
                }
                if stage.is_last() {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: handle_create,
                        "Create"
                    }
                } else {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| wizard.write().next(),
                        "Next"
                    }
                }
            }
        }
    }
}

fn step_class(step: Stage, current: Stage) -> &'static str {
    if step == current {
        "wizard-step wizard-step-active"
    } else if step < current {
        "wizard-step wizard-step-done"
    } else {
        "wizard-step"
    }
}
