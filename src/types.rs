use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What the Spotify authorization server sent back to the callback route.
///
/// Exactly one variant holds per request. Empty query values count as
/// absent, and an error always wins over a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationResult {
    /// The user approved; the value is the short-lived authorization code.
    Code(String),
    /// The provider reported an error, e.g. `access_denied`.
    Error(String),
    /// Neither `code` nor `error` was present.
    Missing,
}

impl AuthorizationResult {
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        if let Some(error) = params.get("error").filter(|e| !e.is_empty()) {
            AuthorizationResult::Error(error.clone())
        } else if let Some(code) = params.get("code").filter(|c| !c.is_empty()) {
            AuthorizationResult::Code(code.clone())
        } else {
            AuthorizationResult::Missing
        }
    }
}

/// Token data returned by the accounts service.
///
/// Only `access_token` matters to this app; the remaining fields are kept
/// for logging/inspection and may be absent in malformed responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenInfo {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub scope: Option<String>,
    pub expires_in: Option<u64>,
    pub refresh_token: Option<String>,
    pub obtained_at: u64,
}

impl TokenInfo {
    /// Extracts token fields from the raw token-endpoint response without
    /// trusting its shape.
    pub fn from_json(json: &Value) -> Self {
        TokenInfo {
            access_token: json["access_token"].as_str().map(str::to_string),
            token_type: json["token_type"].as_str().map(str::to_string),
            scope: json["scope"].as_str().map(str::to_string),
            expires_in: json["expires_in"].as_u64(),
            refresh_token: json["refresh_token"].as_str().map(str::to_string),
            obtained_at: chrono::Utc::now().timestamp() as u64,
        }
    }

    /// The usable access token, or `None` when it is absent or empty.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Outcome of the fetch-user / create-playlist sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistOutcome {
    /// The playlist exists; the value is its public Spotify URL.
    Created(String),
    /// A response was missing required fields; the value is the user-facing
    /// message.
    Failed(String),
}

/// Body for the playlist-creation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}
