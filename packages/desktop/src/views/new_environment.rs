use dioxus::prelude::*;
use ui::components::use_toast;
use ui::{show_notice, Notice};

use crate::Route;

/// Hosts the wizard. Creating environments has no server endpoint yet, so a
/// submitted payload is only logged.
#[component]
pub fn NewEnvironment() -> Element {
    let nav = use_navigator();
    let toasts = use_toast();

    let handle_create = move |env: ui::NewEnvironment| {
        tracing::info!(
            "Environment creation requested: name={:?} private={} tags={}",
            env.name,
            env.private,
            env.tags.len()
        );
        show_notice(
            &toasts,
            Notice::info(format!("Creating \"{}\" is not available yet", env.name)),
        );
    };

    rsx! {
        ui::NewEnvironmentWizard {
            on_create: handle_create,
            on_cancel: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}
