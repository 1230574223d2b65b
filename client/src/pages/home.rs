//! Landing page listing the available tools.

use leptos::prelude::*;

use crate::components::shell_header::{ShellHeader, menu_items};
use crate::routes::{View, path_of};
use crate::state::ui::{DEFAULT_MENU_KEY, UiState};
use crate::util::auth::install_session_gate;

/// Home page — verifies the session, then shows the shell and tool links.
#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    ui.update(|state| state.select_menu(DEFAULT_MENU_KEY));
    install_session_gate(None);

    view! {
        <Show when=move || ui.with(UiState::is_authenticated)>
            <ShellHeader/>
            <main class="home-page">
                <h1>{move || format!("Welcome, {}", ui.with(|s| s.username.clone()))}</h1>
                <ul class="home-page__tools">
                    {move || {
                        let role = ui.with(|s| s.role.clone());
                        menu_items(&role)
                            .into_iter()
                            .filter(|item| item.view != View::Index)
                            .map(|item| {
                                let href = format!("#{}", path_of(item.view));
                                view! {
                                    <li>
                                        <a href=href>{item.view.title()}</a>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </main>
        </Show>
    }
}
