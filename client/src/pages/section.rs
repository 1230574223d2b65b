//! Generic titled page for account and tool views.
//!
//! These views share one layout; `gated` pages run the session gate without
//! a role restriction and render inside the authenticated shell.

use leptos::prelude::*;

use crate::components::shell_header::{ShellHeader, menu_key};
use crate::routes::View;
use crate::state::ui::UiState;
use crate::util::auth::install_session_gate;

#[component]
pub fn SectionPage(view: View, gated: bool) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    if gated {
        if let Some(key) = menu_key(view) {
            ui.update(|state| state.select_menu(key));
        }
        install_session_gate(None);
    }
    let visible = move || !gated || ui.with(UiState::is_authenticated);

    view! {
        <Show when=visible>
            <Show when=move || gated>
                <ShellHeader/>
            </Show>
            <main class="section-page">
                <h1>{view.title()}</h1>
            </main>
        </Show>
    }
}
