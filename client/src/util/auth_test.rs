use std::cell::{Cell, RefCell};
use std::future::ready;

use futures::executor::block_on;

use super::*;
use crate::net::types::VerifyResponse;
use crate::util::storage::{MemoryTokenStore, StorageError};

/// Scripted verification backend that records what the gate did.
struct ScriptedApi {
    response: Result<VerifyResponse, ApiError>,
    calls: Cell<usize>,
    bearer: RefCell<Option<String>>,
}

impl ScriptedApi {
    fn answering(response: Result<VerifyResponse, ApiError>) -> Self {
        Self { response, calls: Cell::new(0), bearer: RefCell::new(None) }
    }

    fn ok(role: &str, username: &str) -> Self {
        Self::answering(Ok(VerifyResponse {
            status: "OK".to_owned(),
            userinfo: Some(UserInfo { role: role.to_owned(), username: username.to_owned() }),
        }))
    }
}

impl SessionApi for ScriptedApi {
    fn set_bearer(&self, token: &str) {
        *self.bearer.borrow_mut() = Some(token.to_owned());
    }

    fn verify(&self) -> impl Future<Output = Result<VerifyResponse, ApiError>> {
        self.calls.set(self.calls.get() + 1);
        ready(self.response.clone())
    }
}

fn run(required_role: Option<&str>, tokens: &MemoryTokenStore, api: &ScriptedApi) -> (GateOutcome, UiState) {
    let outcome = block_on(check_session(required_role, tokens, api));
    let mut ui = UiState::default();
    outcome.apply(&mut ui);
    (outcome, ui)
}

// =============================================================
// Missing token
// =============================================================

#[test]
fn missing_token_redirects_to_login_without_request() {
    let tokens = MemoryTokenStore::default();
    let api = ScriptedApi::ok("user", "bob");
    let (outcome, ui) = run(None, &tokens, &api);

    assert_eq!(outcome, GateOutcome::Redirect(RedirectReason::MissingToken));
    assert_eq!(outcome.redirect_target(), Some("/login"));
    assert_eq!(api.calls.get(), 0);
    assert!(api.bearer.borrow().is_none());
    assert_eq!(ui, UiState::default());
}

#[test]
fn empty_token_counts_as_missing() {
    let tokens = MemoryTokenStore::with_token("");
    let api = ScriptedApi::ok("user", "bob");
    let (outcome, _) = run(Some("admin"), &tokens, &api);
    assert_eq!(outcome, GateOutcome::Redirect(RedirectReason::MissingToken));
    assert_eq!(api.calls.get(), 0);
}

// =============================================================
// Successful verification
// =============================================================

#[test]
fn ok_without_role_records_identity() {
    let tokens = MemoryTokenStore::with_token("abc123");
    let api = ScriptedApi::ok("editor", "carol");
    let (outcome, ui) = run(None, &tokens, &api);

    assert!(matches!(outcome, GateOutcome::Authenticated(_)));
    assert_eq!(outcome.redirect_target(), None);
    assert!(ui.show_index);
    assert_eq!(ui.role, "editor");
    assert_eq!(ui.username, "carol");
    assert_eq!(api.calls.get(), 1);
}

#[test]
fn token_is_attached_as_bearer_before_verify() {
    let tokens = MemoryTokenStore::with_token("abc123");
    let api = ScriptedApi::ok("user", "bob");
    let _ = run(None, &tokens, &api);
    assert_eq!(api.bearer.borrow().as_deref(), Some("abc123"));
}

#[test]
fn empty_required_role_means_no_restriction() {
    let tokens = MemoryTokenStore::with_token("abc123");
    let api = ScriptedApi::ok("user", "bob");
    let (outcome, _) = run(Some(""), &tokens, &api);
    assert!(matches!(outcome, GateOutcome::Authenticated(_)));
}

#[test]
fn matching_role_stays_on_page() {
    let tokens = MemoryTokenStore::with_token("abc123");
    let api = ScriptedApi::ok("admin", "alice");
    let (outcome, ui) = run(Some("admin"), &tokens, &api);
    assert_eq!(outcome.redirect_target(), None);
    assert_eq!(ui.role, "admin");
}

#[test]
fn role_mismatch_redirects_to_forbidden_but_stays_authenticated() {
    let tokens = MemoryTokenStore::with_token("abc123");
    let api = ScriptedApi::ok("user", "bob");
    let (outcome, ui) = run(Some("admin"), &tokens, &api);

    assert_eq!(
        outcome,
        GateOutcome::Forbidden(UserInfo { role: "user".to_owned(), username: "bob".to_owned() })
    );
    assert_eq!(outcome.redirect_target(), Some("pg403"));
    assert!(ui.show_index);
    assert_eq!(ui.role, "user");
    assert_eq!(ui.username, "bob");
}

// =============================================================
// Failures
// =============================================================

#[test]
fn transport_failure_redirects_and_leaves_state() {
    let tokens = MemoryTokenStore::with_token("abc123");
    let api = ScriptedApi::answering(Err(ApiError::Transport("connection refused".to_owned())));
    let (outcome, ui) = run(None, &tokens, &api);

    assert_eq!(
        outcome,
        GateOutcome::Redirect(RedirectReason::Unreachable(ApiError::Transport("connection refused".to_owned())))
    );
    assert_eq!(outcome.redirect_target(), Some("/login"));
    assert_eq!(ui, UiState::default());
}

#[test]
fn http_error_status_redirects_to_login() {
    let tokens = MemoryTokenStore::with_token("expired");
    let api = ScriptedApi::answering(Err(ApiError::Status(401)));
    let (outcome, _) = run(None, &tokens, &api);
    assert_eq!(outcome.redirect_target(), Some("/login"));
}

#[test]
fn non_ok_status_behaves_like_transport_failure() {
    let tokens = MemoryTokenStore::with_token("abc123");
    let api = ScriptedApi::answering(Ok(VerifyResponse { status: "NG".to_owned(), userinfo: None }));
    let (outcome, ui) = run(Some("admin"), &tokens, &api);

    assert_eq!(outcome, GateOutcome::Redirect(RedirectReason::Rejected { status: "NG".to_owned() }));
    assert_eq!(outcome.redirect_target(), Some("/login"));
    assert_eq!(ui, UiState::default());
}

#[test]
fn failed_check_keeps_previous_identity() {
    let tokens = MemoryTokenStore::with_token("abc123");
    let api = ScriptedApi::answering(Err(ApiError::Status(500)));
    let outcome = block_on(check_session(None, &tokens, &api));

    let mut ui = UiState::default();
    ui.record_identity(&UserInfo { role: "user".to_owned(), username: "bob".to_owned() });
    let before = ui.clone();
    outcome.apply(&mut ui);
    assert_eq!(ui, before);
}

// =============================================================
// Settling outcomes
// =============================================================

fn user(role: &str, username: &str) -> UserInfo {
    UserInfo { role: role.to_owned(), username: username.to_owned() }
}

#[test]
fn settle_authenticated_records_identity_and_stays() {
    let mut ui = UiState::default();
    assert_eq!(settle(&GateOutcome::Authenticated(user("admin", "alice")), &mut ui), None);
    assert!(ui.is_authenticated());
    assert_eq!(ui.username, "alice");
}

#[test]
fn settle_forbidden_records_identity_then_redirects() {
    let mut ui = UiState::default();
    assert_eq!(settle(&GateOutcome::Forbidden(user("user", "bob")), &mut ui), Some("pg403"));
    assert!(ui.is_authenticated());
    assert_eq!(ui.role, "user");
}

#[test]
fn settle_redirect_leaves_state_and_goes_to_login() {
    let mut ui = UiState::default();
    ui.record_identity(&user("user", "bob"));
    let before = ui.clone();
    assert_eq!(settle(&GateOutcome::Redirect(RedirectReason::MissingToken), &mut ui), Some("/login"));
    assert_eq!(ui, before);
}

#[test]
fn last_settled_check_wins() {
    let mut ui = UiState::default();
    let first = GateOutcome::Authenticated(user("admin", "alice"));
    let second = GateOutcome::Forbidden(user("user", "bob"));

    settle(&first, &mut ui);
    settle(&second, &mut ui);
    assert_eq!(ui.username, "bob");
    assert_eq!(ui.role, "user");

    settle(&first, &mut ui);
    assert_eq!(ui.username, "alice");
}

// =============================================================
// Session begin/end
// =============================================================

#[test]
fn begin_session_stores_token_and_bearer() {
    let tokens = MemoryTokenStore::default();
    let api = ApiClient::new();
    let issued = TokenResponse { access_token: "jwt".to_owned(), token_type: "Bearer".to_owned() };
    assert_eq!(begin_session(&issued, &tokens, &api), Ok(()));
    assert_eq!(tokens.token().as_deref(), Some("jwt"));
    assert_eq!(api.bearer().as_deref(), Some("jwt"));
}

/// Store that refuses every write.
struct RefusingStore;

impl TokenStore for RefusingStore {
    fn token(&self) -> Option<String> {
        None
    }

    fn save_token(&self, _token: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("QuotaExceededError".to_owned()))
    }

    fn clear_token(&self) {}
}

#[test]
fn begin_session_reports_unsaved_token() {
    let api = ApiClient::new();
    let issued = TokenResponse { access_token: "jwt".to_owned(), token_type: "Bearer".to_owned() };
    assert_eq!(
        begin_session(&issued, &RefusingStore, &api),
        Err(StorageError::Write("QuotaExceededError".to_owned()))
    );
    assert_eq!(api.bearer(), None);
}

#[test]
fn end_session_clears_everything() {
    let tokens = MemoryTokenStore::with_token("jwt");
    let api = ApiClient::new();
    api.set_bearer("jwt");
    let mut ui = UiState::default();
    ui.record_identity(&UserInfo { role: "admin".to_owned(), username: "alice".to_owned() });

    assert_eq!(end_session(&tokens, &api, &mut ui), "/login");
    assert_eq!(tokens.token(), None);
    assert_eq!(api.bearer(), None);
    assert!(!ui.is_authenticated());
}
