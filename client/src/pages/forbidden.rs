//! 403 page shown when the session's role lacks access.
//!
//! The gate records the identity before redirecting here, so a signed-in
//! user keeps the shell header and can navigate away from the menu.

#[cfg(test)]
#[path = "forbidden_test.rs"]
mod forbidden_test;

use leptos::prelude::*;

use crate::components::shell_header::ShellHeader;
use crate::state::ui::UiState;

/// Whether the 403 page renders inside the authenticated shell.
fn shows_shell(state: &UiState) -> bool {
    state.is_authenticated()
}

#[component]
pub fn ForbiddenPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.with(shows_shell)>
            <ShellHeader/>
        </Show>
        <div class="status-page">
            <h1>"403"</h1>
            <p>"You do not have permission to view this page."</p>
            <a href="#/" class="btn btn--primary">
                "Back to home"
            </a>
        </div>
    }
}
