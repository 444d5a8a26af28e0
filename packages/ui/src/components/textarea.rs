use dioxus::prelude::*;

#[component]
pub fn Textarea(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    value: String,
    #[props(default = 4)] rows: u32,
    #[props(default)] disabled: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "textarea {class}",
            placeholder: "{placeholder}",
            rows: "{rows}",
            disabled,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}
