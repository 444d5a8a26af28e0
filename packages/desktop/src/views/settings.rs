use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Settings() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::SettingsView {
            on_open_profile: move |user_id: String| {
                nav.push(Route::Profile { user_id });
            },
        }
    }
}
