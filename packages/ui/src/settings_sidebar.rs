use dioxus::prelude::*;

use crate::icons::{FaLock, FaUser, FaUserGear};
use crate::Icon;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// A page of the settings screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsPage {
    #[default]
    Profile,
    Account,
    Security,
}

impl SettingsPage {
    pub const ALL: [SettingsPage; 3] = [
        SettingsPage::Profile,
        SettingsPage::Account,
        SettingsPage::Security,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingsPage::Profile => "Profile",
            SettingsPage::Account => "Account",
            SettingsPage::Security => "Security",
        }
    }
}

/// Static list of settings pages. The parent owns `current`.
#[component]
pub fn SettingsSidebar(current: SettingsPage, on_select: EventHandler<SettingsPage>) -> Element {
    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        nav {
            class: "settings-sidebar",
            for page in SettingsPage::ALL {
                button {
                    key: "{page.label()}",
                    class: if page == current { "settings-sidebar-item active" } else { "settings-sidebar-item" },
                    onclick: move |_| on_select.call(page),
                    span {
                        class: "icon",
                        match page {
                            SettingsPage::Profile => rsx! { Icon { icon: FaUser, width: 14, height: 14 } },
                            SettingsPage::Account => rsx! { Icon { icon: FaUserGear, width: 14, height: 14 } },
                            SettingsPage::Security => rsx! { Icon { icon: FaLock, width: 14, height: 14 } },
                        }
                    }
                    span { "{page.label()}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_are_listed_in_order_starting_at_profile() {
        assert_eq!(SettingsPage::default(), SettingsPage::Profile);
        let labels = SettingsPage::ALL.map(SettingsPage::label);
        assert_eq!(labels, ["Profile", "Account", "Security"]);
    }
}
