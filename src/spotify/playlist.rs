use reqwest::Client;
use serde_json::Value;

use crate::{config, types::CreatePlaylistRequest};

/// Creates a public playlist owned by the given user.
///
/// # Errors
///
/// Returns `reqwest::Error` for network failures and for non-success HTTP
/// statuses (via `error_for_status`), e.g. missing `playlist-modify-public`
/// permission.
pub async fn create(token: &str, user_id: &str, name: &str) -> Result<Value, reqwest::Error> {
    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: String::new(),
        public: true,
        collaborative: false,
    };

    let client = Client::new();
    let response = client
        .post(format!("{}/users/{}/playlists", config::api_url(), user_id))
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    response.json::<Value>().await
}

/// The playlist's public URL from a creation response.
///
/// Requires both `id` and `external_urls.spotify` to be present; a response
/// missing either is treated as incomplete and yields `None`.
pub fn url_of(playlist: &Value) -> Option<&str> {
    playlist.get("id")?.as_str()?;
    playlist.get("external_urls")?.get("spotify")?.as_str()
}
