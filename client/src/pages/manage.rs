//! Management console, restricted to the `admin` role.

use leptos::prelude::*;

use crate::components::shell_header::{ADMIN_ROLE, ShellHeader, menu_key};
use crate::routes::View;
use crate::state::ui::UiState;
use crate::util::auth::install_session_gate;

#[component]
pub fn ManagePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    if let Some(key) = menu_key(View::Manage) {
        ui.update(|state| state.select_menu(key));
    }
    install_session_gate(Some(ADMIN_ROLE));

    view! {
        <Show when=move || ui.with(|s| s.is_authenticated() && s.role == ADMIN_ROLE)>
            <ShellHeader/>
            <main class="manage-page">
                <h1>{View::Manage.title()}</h1>
                <p>{move || format!("Signed in as {}", ui.with(|s| s.username.clone()))}</p>
            </main>
        </Show>
    }
}
