use dioxus::prelude::*;

/// Controlled single-line text input.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    value: String,
    #[props(default)] disabled: bool,
    #[props(default)] autofocus: bool,
    maxlength: Option<u32>,
    oninput: EventHandler<FormEvent>,
    onkeydown: Option<EventHandler<KeyboardEvent>>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            value: "{value}",
            disabled,
            autofocus,
            maxlength: maxlength.map(|m| m.to_string()),
            oninput: move |evt| oninput.call(evt),
            onkeydown: move |evt| {
                if let Some(handler) = onkeydown {
                    handler.call(evt);
                }
            },
        }
    }
}
