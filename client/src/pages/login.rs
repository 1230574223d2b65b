//! Username/password login page.
//!
//! On success the issued token is persisted and becomes the client's bearer
//! credential before navigating home, where the session gate verifies it.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::api::{ApiClient, ApiError, SessionApi};
use crate::net::types::TokenResponse;
use crate::routes::HOME_PATH;
use crate::util::auth::begin_session;
use crate::util::dialog::Dialogs;
use crate::util::location;
use crate::util::storage::{BrowserTokenStore, StorageError, TokenStore};

/// Check the form before sending it.
fn validate_login(username: &str, password: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() {
        return Err("Please enter a username");
    }
    if password.is_empty() {
        return Err("Please enter a password");
    }
    Ok(())
}

fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status(401) => "Incorrect username or password".to_owned(),
        other => format!("Login failed: {other}"),
    }
}

fn session_error_message(err: &StorageError) -> String {
    format!("Signed in, but the session could not be saved: {err}")
}

/// Start the session for an issued token. Returns the page to show next, or
/// the error text when the token could not be kept.
fn complete_login<T, A>(issued: &TokenResponse, tokens: &T, api: &A) -> Result<&'static str, String>
where
    T: TokenStore,
    A: SessionApi,
{
    match begin_session(issued, tokens, api) {
        Ok(()) => Ok(HOME_PATH),
        Err(e) => {
            leptos::logging::warn!("token not saved: {e}");
            Err(session_error_message(&e))
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let dialogs = Dialogs::from_context();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let user = username.get_untracked().trim().to_owned();
        let pass = password.get_untracked();
        if let Err(msg) = validate_login(&user, &pass) {
            dialogs.toast_warning(msg);
            return;
        }

        pending.set(true);
        let api = api.clone();
        let keep = remember.get_untracked();
        leptos::task::spawn_local(async move {
            match api.login(&user, &pass, keep).await {
                Ok(issued) => match complete_login(&issued, &BrowserTokenStore, &api) {
                    Ok(next) => {
                        dialogs.toast_success("Signed in");
                        location::set_hash(next);
                    }
                    Err(msg) => dialogs.show_err(&msg),
                },
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    dialogs.show_err(&login_error_message(&e));
                }
            }
            pending.set(false);
        });
    };

    view! {
        <div class="login-page">
            <h1>"Sign in"</h1>
            <form class="login-page__form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <label class="login-page__remember">
                    <input
                        type="checkbox"
                        prop:checked=move || remember.get()
                        on:change=move |ev| remember.set(event_target_checked(&ev))
                    />
                    "Remember me for 30 days"
                </label>
                <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                    "Sign in"
                </button>
            </form>
            <div class="login-page__links">
                <a href="#/signup">"Create account"</a>
                <a href="#/forgot">"Forgot password?"</a>
            </div>
        </div>
    }
}
