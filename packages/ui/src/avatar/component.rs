use dioxus::prelude::*;

use crate::components::{use_toast, Button, ButtonVariant};
use crate::notice::show_notice;
use crate::views::ModalOverlay;

use super::editor::{AvatarEditor, AvatarKind, MAX_ZOOM};

const AVATAR_CSS: Asset = asset!("/assets/styling/avatar.css");

/// Round avatar: the image at `src` if any, otherwise `initial` on a tinted disc.
#[component]
pub fn AvatarComponent(
    src: Option<String>,
    initial: String,
    #[props(default = 40)] size: u32,
) -> Element {
    rsx! {
        document::Stylesheet { href: AVATAR_CSS }
        if let Some(src) = src {
            img {
                class: "avatar",
                style: "width: {size}px; height: {size}px",
                src: "{src}",
                alt: "Avatar",
            }
        } else {
            span {
                class: "avatar avatar-fallback",
                style: "width: {size}px; height: {size}px; font-size: {size / 2}px",
                "{initial}"
            }
        }
    }
}

/// File picker plus crop editor. Confirmed crops are passed to `on_cropped` as PNG bytes.
#[component]
pub fn AvatarPicker(on_cropped: EventHandler<Vec<u8>>) -> Element {
    let mut editor = use_signal(AvatarEditor::default);
    let toasts = use_toast();

    let handle_file = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let name = file.name();
        let mime = file.content_type();
        let kind = match editor.write().check_upload(&name, mime.as_deref(), file.size()) {
            Ok(kind) => kind,
            Err(notice) => {
                show_notice(&toasts, notice);
                return;
            }
        };
        match file.read_bytes().await {
            Ok(bytes) => {
                if let Err(notice) = editor.write().open(kind, &bytes) {
                    show_notice(&toasts, notice);
                }
            }
            Err(e) => {
                tracing::warn!("Could not read {}: {}", name, e);
                editor.write().close();
            }
        }
    };

    let generation = editor.read().input_generation;
    let open = editor.read().is_open();

    rsx! {
        label {
            class: "button button-outline avatar-picker",
            "Change avatar"
            input {
                key: "{generation}",
                class: "visually-hidden",
                r#type: "file",
                accept: AvatarKind::ACCEPT,
                onchange: handle_file,
            }
        }
        if open {
            AvatarEditModal { editor, on_cropped }
        }
    }
}

/// Square crop editor over an already decoded image.
#[component]
fn AvatarEditModal(mut editor: Signal<AvatarEditor>, on_cropped: EventHandler<Vec<u8>>) -> Element {
    let toasts = use_toast();

    let (preview_url, width, height, crop) = {
        let state = editor.read();
        let (Some(source), Some(crop)) = (state.source.as_ref(), state.crop) else {
            return rsx! {};
        };
        let (width, height) = source.dimensions();
        (source.preview_url.clone(), width, height, crop)
    };
    let (left, top, box_w, box_h) = crop.as_percentages(width, height);
    let zoom = crop.zoom(width, height);
    let max_x = width.saturating_sub(crop.size);
    let max_y = height.saturating_sub(crop.size);

    let handle_confirm = move |_: MouseEvent| match editor.write().confirm() {
        Ok(png) => on_cropped.call(png),
        Err(notice) => show_notice(&toasts, notice),
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| editor.write().close(),
            div {
                class: "avatar-editor",
                h2 { class: "modal-title", "Crop avatar" }
                div {
                    class: "avatar-editor-stage",
                    img { src: "{preview_url}", alt: "Selected image" }
                    div {
                        class: "avatar-editor-crop",
                        style: "left: {left}%; top: {top}%; width: {box_w}%; height: {box_h}%",
                    }
                }
                div {
                    class: "avatar-editor-controls",
                    label {
                        "Zoom"
                        input {
                            r#type: "range",
                            min: "1",
                            max: "{MAX_ZOOM}",
                            step: "0.05",
                            value: "{zoom}",
                            oninput: move |evt: FormEvent| {
                                if let Ok(z) = evt.value().parse::<f32>() {
                                    editor.write().set_zoom(z);
                                }
                            },
                        }
                    }
                    label {
                        "Horizontal"
                        input {
                            r#type: "range",
                            min: "0",
                            max: "{max_x}",
                            value: "{crop.x}",
                            disabled: max_x == 0,
                            oninput: move |evt: FormEvent| {
                                if let Ok(x) = evt.value().parse::<u32>() {
                                    editor.write().set_offset(x, crop.y);
                                }
                            },
                        }
                    }
                    label {
                        "Vertical"
                        input {
                            r#type: "range",
                            min: "0",
                            max: "{max_y}",
                            value: "{crop.y}",
                            disabled: max_y == 0,
                            oninput: move |evt: FormEvent| {
                                if let Ok(y) = evt.value().parse::<u32>() {
                                    editor.write().set_offset(crop.x, y);
                                }
                            },
                        }
                    }
                }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| editor.write().close(),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: handle_confirm,
                        "Use this crop"
                    }
                }
            }
        }
    }
}
