use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;
use serde_json::Value;

use crate::{config, types::TokenInfo};

/// Builds the URL of Spotify's authorization page for this application.
///
/// The user is redirected here to approve (or deny) the requested scope;
/// Spotify then redirects back to the configured redirect URI with either a
/// `code` or an `error` query parameter.
pub fn authorize_url() -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}",
        auth_url = &config::auth_url(),
        client_id = &config::client_id(),
        redirect_uri = &config::redirect_uri(),
        scope = config::SCOPE,
    )
}

/// Exchanges an authorization code for an access token.
///
/// Posts the code to the accounts service's token endpoint with the client
/// credentials as HTTP Basic authentication, per the OAuth2
/// authorization-code flow. The response body is picked apart tolerantly:
/// a reply without an `access_token` still yields a [`TokenInfo`], and the
/// caller decides what an unusable token means (restart the flow).
///
/// # Errors
///
/// Returns `reqwest::Error` for transport-level failures (connection,
/// TLS, malformed body). A well-formed error reply from the provider is
/// not a transport failure.
pub async fn exchange_code(code: &str) -> Result<TokenInfo, reqwest::Error> {
    let client = Client::new();
    let res = client
        .post(&config::token_url())
        .header(reqwest::header::AUTHORIZATION, basic_auth())
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &config::redirect_uri()),
        ])
        .send()
        .await?;

    let json: Value = res.json().await?;
    Ok(TokenInfo::from_json(&json))
}

/// `Authorization: Basic base64(client_id:client_secret)`, as the token
/// endpoint expects for confidential clients.
fn basic_auth() -> String {
    let credentials = format!("{}:{}", config::client_id(), config::client_secret());
    format!("Basic {}", STANDARD.encode(credentials))
}
