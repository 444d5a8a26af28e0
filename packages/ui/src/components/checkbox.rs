use dioxus::prelude::*;

/// Controlled checkbox with an inline label.
#[component]
pub fn Checkbox(
    id: String,
    checked: bool,
    #[props(default)] disabled: bool,
    onchange: EventHandler<bool>,
    children: Element,
) -> Element {
    rsx! {
        label {
            class: "checkbox",
            r#for: "{id}",
            input {
                id: "{id}",
                r#type: "checkbox",
                checked,
                disabled,
                onchange: move |evt: FormEvent| onchange.call(evt.checked()),
            }
            span { {children} }
        }
    }
}
