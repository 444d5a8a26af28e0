//! Tag entry: an ordered list of label/value pairs plus a pending text field.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::icons::FaXmark;
use crate::Icon;

/// A single tag. `value` is the normalised form used for de-duplication.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub label: String,
    pub value: String,
}

impl Tag {
    /// Build a tag from user text. Blank text yields `None`.
    pub fn from_text(text: &str) -> Option<Tag> {
        let label = text.trim();
        if label.is_empty() {
            return None;
        }
        Some(Tag {
            label: label.to_string(),
            value: label.to_lowercase(),
        })
    }
}

/// Ordered, duplicate-free tag list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagList(Vec<Tag>);

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag from user text. Returns `false` for blank text or a duplicate value.
    pub fn push_text(&mut self, text: &str) -> bool {
        match Tag::from_text(text) {
            Some(tag) if !self.contains(&tag.value) => {
                self.0.push(tag);
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|t| t.value == value)
    }

    pub fn remove(&mut self, value: &str) {
        self.0.retain(|t| t.value != value);
    }

    pub fn pop(&mut self) -> Option<Tag> {
        self.0.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<Tag> {
        self.0
    }
}

/// Key handling for the pending text field: what a key press does to the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagKey {
    /// Enter or comma: commit the pending text.
    Commit,
    /// Backspace with nothing typed: drop the last tag.
    RemoveLast,
    Other,
}

impl TagKey {
    pub fn classify(key: &Key, pending: &str) -> TagKey {
        match key {
            Key::Enter => TagKey::Commit,
            Key::Character(c) if c == "," => TagKey::Commit,
            Key::Backspace if pending.is_empty() => TagKey::RemoveLast,
            _ => TagKey::Other,
        }
    }
}

/// Controlled tag editor. The caller owns the list and receives every new list.
#[component]
pub fn TagInput(
    id: String,
    tags: TagList,
    #[props(default = "Add a tag and press Enter".to_string())] placeholder: String,
    onchange: EventHandler<TagList>,
) -> Element {
    let mut pending = use_signal(String::new);

    let list_for_keys = tags.clone();
    let onkeydown = move |evt: KeyboardEvent| {
        match TagKey::classify(&evt.key(), &pending()) {
            TagKey::Commit => {
                evt.prevent_default();
                let mut next = list_for_keys.clone();
                if next.push_text(&pending()) {
                    onchange.call(next);
                }
                pending.set(String::new());
            }
            TagKey::RemoveLast => {
                let mut next = list_for_keys.clone();
                if next.pop().is_some() {
                    onchange.call(next);
                }
            }
            TagKey::Other => {}
        }
    };

    rsx! {
        div {
            class: "tag-input",
            for tag in tags.iter() {
                span {
                    key: "{tag.value}",
                    class: "tag-chip",
                    "{tag.label}"
                    button {
                        class: "tag-chip-remove",
                        r#type: "button",
                        title: "Remove {tag.label}",
                        onclick: {
                            let value = tag.value.clone();
                            let tags = tags.clone();
                            move |_| {
                                let mut next = tags.clone();
                                next.remove(&value);
                                onchange.call(next);
                            }
                        },
                        Icon { icon: FaXmark, width: 10, height: 10 }
                    }
                }
            }
            input {
                id: "{id}",
                class: "tag-input-field",
                r#type: "text",
                placeholder: "{placeholder}",
                value: pending(),
                oninput: move |evt: FormEvent| pending.set(evt.value()),
                onkeydown: onkeydown,
            }
        }
    }
}
