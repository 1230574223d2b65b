//! Session gate shared by guarded pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded page runs the same check on mount: read the stored token,
//! attach it as the client's bearer credential, ask the backend to verify
//! it, then either record the identity or send the user elsewhere.
//!
//! DESIGN
//! ======
//! [`check_session`] only decides. It returns a [`GateOutcome`] and the
//! caller applies it to [`UiState`] and the location hash. That keeps the
//! decision testable against in-memory stores and a scripted API.
//!
//! A role mismatch still records the identity before redirecting to the
//! forbidden page, so the shell stays visible on `pg403`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api::{ApiClient, ApiError, SessionApi};
use crate::net::types::{TokenResponse, UserInfo};
use crate::routes::{FORBIDDEN_PATH, LOGIN_PATH};
use crate::state::ui::UiState;
use crate::util::location;
use crate::util::storage::{BrowserTokenStore, StorageError, TokenStore};

/// Why the gate sent the user to the login page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RedirectReason {
    /// No token stored; no request was made.
    MissingToken,
    /// The backend answered but did not report `"OK"`.
    Rejected { status: String },
    /// Transport, HTTP status or decode failure.
    Unreachable(ApiError),
}

/// Result of a single session check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    Authenticated(UserInfo),
    /// Verified, but the role differs from the one the page requires.
    Forbidden(UserInfo),
    Redirect(RedirectReason),
}

impl GateOutcome {
    /// Identity confirmed by the backend, if any.
    pub fn identity(&self) -> Option<&UserInfo> {
        match self {
            Self::Authenticated(user) | Self::Forbidden(user) => Some(user),
            Self::Redirect(_) => None,
        }
    }

    /// Write the verified identity into `ui`. Redirects leave it untouched.
    pub fn apply(&self, ui: &mut UiState) {
        if let Some(user) = self.identity() {
            ui.record_identity(user);
        }
    }

    /// Hash path to navigate to, if the page should not stay.
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            Self::Authenticated(_) => None,
            Self::Forbidden(_) => Some(FORBIDDEN_PATH),
            Self::Redirect(_) => Some(LOGIN_PATH),
        }
    }
}

/// Verify the stored credential and decide where the user belongs.
///
/// `required_role` of `None` or `Some("")` accepts any verified role. No
/// request is made when no token is stored. There is no retry; one call
/// resolves exactly once.
pub async fn check_session<T, A>(required_role: Option<&str>, tokens: &T, api: &A) -> GateOutcome
where
    T: TokenStore,
    A: SessionApi,
{
    let Some(token) = tokens.token() else {
        return GateOutcome::Redirect(RedirectReason::MissingToken);
    };
    api.set_bearer(&token);

    let resp = match api.verify().await {
        Ok(resp) => resp,
        Err(e) => {
            leptos::logging::warn!("session check failed: {e}");
            return GateOutcome::Redirect(RedirectReason::Unreachable(e));
        }
    };

    let Some(user) = resp.verified_user().cloned() else {
        leptos::logging::warn!("session rejected: status={}", resp.status);
        return GateOutcome::Redirect(RedirectReason::Rejected { status: resp.status });
    };

    match required_role.filter(|role| !role.is_empty()) {
        Some(role) if role != user.role => GateOutcome::Forbidden(user),
        _ => GateOutcome::Authenticated(user),
    }
}

/// Run the session gate for the mounting page.
///
/// Fire-and-forget: the check runs on the local executor and its outcome is
/// applied when it resolves. Overlapping calls are not deduplicated and the
/// last one to resolve wins.
pub fn install_session_gate(required_role: Option<&'static str>) {
    let ui = expect_context::<RwSignal<UiState>>();
    let api = expect_context::<ApiClient>();
    leptos::task::spawn_local(async move {
        let outcome = check_session(required_role, &BrowserTokenStore, &api).await;
        let mut target = None;
        if outcome.identity().is_some() {
            ui.update(|state| target = settle(&outcome, state));
        } else {
            target = outcome.redirect_target();
        }
        if let Some(target) = target {
            location::set_hash(target);
        }
    });
}

/// Apply a resolved check to `ui` and return where to navigate.
///
/// Each resolved check is settled in turn, so the identity left in `ui`
/// is the one from whichever check settled last.
pub fn settle(outcome: &GateOutcome, ui: &mut UiState) -> Option<&'static str> {
    outcome.apply(ui);
    outcome.redirect_target()
}

/// Persist a freshly issued token and make it the default credential.
///
/// # Errors
///
/// Returns the [`StorageError`] when the token cannot be persisted; the
/// bearer is left unchanged in that case.
pub fn begin_session<T, A>(issued: &TokenResponse, tokens: &T, api: &A) -> Result<(), StorageError>
where
    T: TokenStore,
    A: SessionApi,
{
    tokens.save_token(&issued.access_token)?;
    api.set_bearer(&issued.access_token);
    Ok(())
}

/// Drop the stored token, the client credential and the recorded identity.
/// Returns the hash path to show next.
pub fn end_session<T: TokenStore>(tokens: &T, api: &ApiClient, ui: &mut UiState) -> &'static str {
    tokens.clear_token();
    api.clear_bearer();
    ui.clear_identity();
    LOGIN_PATH
}
