//! # API Module
//!
//! HTTP handlers for the application's three routes.
//!
//! - [`login`] - `GET /`: starts the OAuth flow with a redirect to Spotify's
//!   authorization page.
//! - [`callback`] - `GET /callback`: receives Spotify's answer, exchanges
//!   the code for a token, creates the playlist and renders the result.
//!   This is the only non-trivial control flow in the application.
//! - [`health`] - `GET /health`: liveness endpoint returning status and
//!   version as JSON.
//!
//! Handlers are plain async functions wired into the axum router in
//! [`crate::server`]; the shared [`crate::report::Reporter`] reaches them
//! through an `Extension` layer.

mod callback;
mod health;
mod login;

pub use callback::callback;
pub use health::health;
pub use login::login;
