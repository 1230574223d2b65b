//! Root application component with hash routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::notice_host::NoticeHost;
use crate::net::api::ApiClient;
use crate::pages;
use crate::routes::{path_from_hash, resolve};
use crate::state::{notice::NoticeQueue, ui::UiState};
use crate::util::location;

/// Root application component.
///
/// Provides the shared UI state, notice queue and API client, then renders
/// whichever page the current location hash resolves to.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(UiState::default()));
    provide_context(RwSignal::new(NoticeQueue::default()));
    provide_context(ApiClient::new());

    let path = RwSignal::new(path_from_hash(&location::current_hash()));

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::hashchange, move |_| {
            path.set(path_from_hash(&location::current_hash()));
        });
        on_cleanup(move || handle.remove());
    }

    let active_view = Memo::new(move |_| path.with(|p| resolve(p)));

    view! {
        <Title text="Scripture Tools"/>
        {move || match active_view.get() {
            Some(view) => pages::render(view),
            None => view! { <p class="not-found">"Page not found."</p> }.into_any(),
        }}
        <NoticeHost/>
    }
}
