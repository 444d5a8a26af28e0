use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Profile(user_id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        ui::ProfileView {
            key: "{user_id}",
            user_id: user_id.clone(),
            on_new_environment: move |_| {
                nav.push(Route::NewEnvironment {});
            },
        }
    }
}
