use dioxus::prelude::*;

use crate::Route;

/// Navbar on top, the routed page below.
#[component]
pub fn AppShell() -> Element {
    let nav = use_navigator();

    let open_profile = move |user_id: String| {
        nav.push(Route::Profile { user_id });
    };

    rsx! {
        div {
            class: "app-shell",
            ui::Navbar {
                on_open_profile: open_profile,
                Link { to: Route::Home {}, "Home" }
                Link { to: Route::NewEnvironment {}, "New environment" }
                Link { to: Route::Settings {}, "Settings" }
            }
            main {
                class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
