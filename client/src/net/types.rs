//! Wire DTOs for the portal's REST endpoints.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON exactly so responses decode without
//! per-field renames.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Status string the verification endpoint returns for a valid token.
pub const STATUS_OK: &str = "OK";

/// Identity returned by a successful token verification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub role: String,
    pub username: String,
}

/// Response body of `GET /api/testToken`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub status: String,
    #[serde(default)]
    pub userinfo: Option<UserInfo>,
}

impl VerifyResponse {
    /// The verified identity, present only when the status is `"OK"`.
    pub fn verified_user(&self) -> Option<&UserInfo> {
        if self.status == STATUS_OK { self.userinfo.as_ref() } else { None }
    }
}

/// Response body of `POST /api/token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}
