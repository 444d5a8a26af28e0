use api::{ClientConfig, HttpApi};
use dioxus::prelude::*;
use views::{AppShell, Home, NewEnvironment, Profile, Settings};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/profile/:user_id")]
        Profile { user_id: String },
        #[route("/settings")]
        Settings {},
        #[route("/environments/new")]
        NewEnvironment {},
}

fn main() {
    let config = ClientConfig::load_or_default();
    let client = match HttpApi::new(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("rulehub: cannot use server {}: {e}", config.base_url());
            std::process::exit(1);
        }
    };

    dioxus::LaunchBuilder::new().with_context(client).launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        ui::SessionProvider {
            ui::components::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
