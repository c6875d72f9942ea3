use reqwest::Client;
use serde_json::Value;

use crate::config;

/// Fetches the profile of the user the access token belongs to.
///
/// # Errors
///
/// Returns `reqwest::Error` for network failures and for non-success HTTP
/// statuses (via `error_for_status`), e.g. an expired token or a scope the
/// user did not grant.
pub async fn current_user(token: &str) -> Result<Value, reqwest::Error> {
    let client = Client::new();
    let response = client
        .get(format!("{}/me", config::api_url()))
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<Value>().await
}

/// The user's ID from a profile response, or `None` when the response does
/// not carry one.
pub fn id_of(user: &Value) -> Option<&str> {
    user.get("id")?.as_str()
}
