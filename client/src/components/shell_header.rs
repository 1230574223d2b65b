//! Top navigation bar for the authenticated shell.
//!
//! Rendered only while `UiState::show_index` is set. Menu entries link by
//! hash; the management entry appears for the `admin` role only.

#[cfg(test)]
#[path = "shell_header_test.rs"]
mod shell_header_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::routes::{View, path_of};
use crate::state::ui::UiState;
use crate::util::auth::end_session;
use crate::util::location;
use crate::util::storage::BrowserTokenStore;

/// Role allowed into the management view.
pub const ADMIN_ROLE: &str = "admin";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub key: &'static str,
    pub view: View,
}

const MENU: &[MenuItem] = &[
    MenuItem { key: "0", view: View::Index },
    MenuItem { key: "1", view: View::Tools },
    MenuItem { key: "2", view: View::BibleCo },
    MenuItem { key: "3", view: View::Cws },
    MenuItem { key: "4", view: View::InfoRetrieval },
    MenuItem { key: "5", view: View::OutlineTranslate },
    MenuItem { key: "6", view: View::Manage },
];

/// Menu entries visible to `role`.
pub fn menu_items(role: &str) -> Vec<MenuItem> {
    MENU.iter()
        .copied()
        .filter(|item| item.view != View::Manage || role == ADMIN_ROLE)
        .collect()
}

/// Menu key for `view`, used to highlight the active entry.
pub fn menu_key(view: View) -> Option<&'static str> {
    MENU.iter().find(|item| item.view == view).map(|item| item.key)
}

#[component]
pub fn ShellHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let api = expect_context::<ApiClient>();

    let on_logout = move |_| {
        let mut target = None;
        ui.update(|state| target = Some(end_session(&BrowserTokenStore, &api, state)));
        if let Some(path) = target {
            location::set_hash(path);
        }
    };

    view! {
        <header class="shell-header">
            <nav class="shell-header__menu">
                {move || {
                    let (role, selected) = ui.with(|s| (s.role.clone(), s.selected_index.clone()));
                    menu_items(&role)
                        .into_iter()
                        .map(|item| {
                            let active = selected.iter().any(|k| k == item.key);
                            let class = if active {
                                "shell-header__item shell-header__item--active"
                            } else {
                                "shell-header__item"
                            };
                            let href = format!("#{}", path_of(item.view));
                            view! {
                                <a class=class href=href>
                                    {item.view.title()}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </nav>
            <div class="shell-header__user">
                <span class="shell-header__name">{move || ui.with(|s| s.username.clone())}</span>
                <a class="shell-header__link" href="#/changepass">
                    "Change password"
                </a>
                <button class="btn" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </header>
    }
}
