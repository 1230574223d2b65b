//! Renders queued modals, messages and notifications.
//!
//! Timed notices schedule their own dismissal when mounted; modals stay
//! until OK is pressed, which may navigate to the notice's target hash.

use leptos::prelude::*;

use crate::state::notice::{Notice, NoticeQueue, OK_LABEL, Placement};
use crate::util::location;

/// Overlay host mounted once by `App`.
#[component]
pub fn NoticeHost() -> impl IntoView {
    let queue = expect_context::<RwSignal<NoticeQueue>>();

    view! {
        <div class="notice-host">
            <div class="notice-host__top">
                <For
                    each=move || queue.with(|q| q.in_placement(Placement::Top))
                    key=|notice| notice.id
                    children=move |notice| view! { <NoticeToast notice=notice queue=queue/> }
                />
            </div>
            <div class="notice-host__bottom-left">
                <For
                    each=move || queue.with(|q| q.in_placement(Placement::BottomLeft))
                    key=|notice| notice.id
                    children=move |notice| view! { <NoticeToast notice=notice queue=queue/> }
                />
            </div>
            <For
                each=move || queue.with(|q| q.in_placement(Placement::Center))
                key=|notice| notice.id
                children=move |notice| view! { <NoticeModal notice=notice queue=queue/> }
            />
        </div>
    }
}

#[component]
fn NoticeToast(notice: Notice, queue: RwSignal<NoticeQueue>) -> impl IntoView {
    if let Some(ms) = notice.kind.duration_ms() {
        schedule_dismiss(queue, notice.id, ms);
    }
    let class = format!("notice notice--{}", notice.kind.css_modifier());

    view! {
        <div class=class role="status">
            {notice.text}
        </div>
    }
}

#[component]
fn NoticeModal(notice: Notice, queue: RwSignal<NoticeQueue>) -> impl IntoView {
    let id = notice.id;
    let class = format!("notice-modal notice-modal--{}", notice.kind.css_modifier());

    let on_ok = move |_| {
        let mut target = None;
        queue.update(|q| target = q.acknowledge(id));
        if let Some(hash) = target {
            location::set_hash(&hash);
        }
    };

    view! {
        <div class="notice-modal__backdrop">
            <div class=class role="dialog">
                <div class="notice-modal__title">{notice.text}</div>
                <div class="notice-modal__actions">
                    <button class="btn btn--primary" on:click=on_ok>
                        {OK_LABEL}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn schedule_dismiss(queue: RwSignal<NoticeQueue>, id: u64, ms: u32) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
            queue.update(|q| {
                q.dismiss(id);
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (queue, id, ms);
    }
}
