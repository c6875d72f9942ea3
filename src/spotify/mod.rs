//! # Spotify Integration Module
//!
//! Thin wrappers around the Spotify endpoints this app needs: the OAuth2
//! authorization-code handshake against the accounts service and the two
//! Web API calls of the playlist flow (fetch the current user, create a
//! playlist).
//!
//! API responses are handled as raw JSON and validated field-by-field at
//! the call site, because the Web API gives no compile-time guarantee of
//! shape. HTTP status errors are surfaced through `error_for_status` and
//! converted to the crate's typed errors by the handlers.
//!
//! ## Submodules
//!
//! - [`auth`] - Authorization URL construction and code-for-token exchange
//! - [`user`] - Current-user profile retrieval and validation
//! - [`playlist`] - Playlist creation and response validation

pub mod auth;
pub mod playlist;
pub mod user;
