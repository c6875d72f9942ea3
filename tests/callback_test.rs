use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, http::StatusCode, response::IntoResponse};
use serde_json::json;
use serveolist::api::callback;
use serveolist::pages;
use serveolist::report::Reporter;
use serveolist::spotify::{playlist, user};
use serveolist::types::{AuthorizationResult, PlaylistOutcome, TokenInfo};

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

async fn body_of(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[test]
fn authorization_result_prefers_error_over_code() {
    let result = AuthorizationResult::from_params(&params(&[
        ("code", "AQC-some-code"),
        ("error", "access_denied"),
    ]));
    assert_eq!(result, AuthorizationResult::Error("access_denied".to_string()));
}

#[test]
fn authorization_result_parses_code() {
    let result = AuthorizationResult::from_params(&params(&[("code", "AQC-some-code")]));
    assert_eq!(result, AuthorizationResult::Code("AQC-some-code".to_string()));
}

#[test]
fn authorization_result_treats_empty_values_as_missing() {
    assert_eq!(
        AuthorizationResult::from_params(&params(&[("code", ""), ("error", "")])),
        AuthorizationResult::Missing
    );
    assert_eq!(
        AuthorizationResult::from_params(&params(&[])),
        AuthorizationResult::Missing
    );
}

#[tokio::test]
async fn callback_with_provider_error_renders_error_page() {
    let response = callback(
        Query(params(&[("error", "access_denied"), ("code", "AQC-x")])),
        Extension(Arc::new(Reporter::new())),
    )
    .await
    .expect("error path must not propagate")
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_of(response).await;
    assert!(body.contains("access_denied"));
    assert!(body.contains("Ocorreu um erro"));
}

#[tokio::test]
async fn callback_without_code_renders_error_page_with_fixed_message() {
    let response = callback(
        Query(params(&[])),
        Extension(Arc::new(Reporter::new())),
    )
    .await
    .expect("missing-code path must not propagate")
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_of(response).await;
    assert!(body.contains("Nenhum código de autorização recebido."));
}

#[test]
fn token_info_rejects_absent_or_empty_access_token() {
    let empty = TokenInfo::from_json(&json!({"access_token": ""}));
    assert_eq!(empty.access_token(), None);

    let absent = TokenInfo::from_json(&json!({"token_type": "Bearer"}));
    assert_eq!(absent.access_token(), None);

    let present = TokenInfo::from_json(&json!({
        "access_token": "BQC-token",
        "token_type": "Bearer",
        "scope": "playlist-modify-public",
        "expires_in": 3600
    }));
    assert_eq!(present.access_token(), Some("BQC-token"));
    assert_eq!(present.expires_in, Some(3600));
}

#[test]
fn user_id_requires_identity_field() {
    assert_eq!(user::id_of(&json!({"id": "alice"})), Some("alice"));
    assert_eq!(user::id_of(&json!({"display_name": "Alice"})), None);
}

#[test]
fn playlist_url_requires_id_and_external_url() {
    let complete = json!({
        "id": "XYZ",
        "external_urls": {"spotify": "https://open.spotify.com/playlist/XYZ"}
    });
    assert_eq!(
        playlist::url_of(&complete),
        Some("https://open.spotify.com/playlist/XYZ")
    );

    let no_id = json!({
        "external_urls": {"spotify": "https://open.spotify.com/playlist/XYZ"}
    });
    assert_eq!(playlist::url_of(&no_id), None);

    let no_url = json!({"id": "XYZ", "external_urls": {}});
    assert_eq!(playlist::url_of(&no_url), None);
}

#[test]
fn playlist_outcome_carries_url_or_message() {
    let created = PlaylistOutcome::Created("https://open.spotify.com/playlist/XYZ".to_string());
    assert_ne!(
        created,
        PlaylistOutcome::Failed("Resposta do Spotify não contém o ID do usuário.".to_string())
    );
}

#[test]
fn pages_render_their_single_field() {
    let error = pages::error_page("Token de acesso não foi obtido.").0;
    assert!(error.contains("Token de acesso não foi obtido."));

    let app = pages::app_page("https://open.spotify.com/playlist/XYZ").0;
    assert!(app.contains("https://open.spotify.com/playlist/XYZ"));
    assert!(app.contains("Playlist criada com sucesso!"));
}

#[test]
fn pages_escape_html() {
    let page = pages::error_page("<script>alert(1)</script>").0;
    assert!(!page.contains("<script>"));
    assert!(page.contains("&lt;script&gt;"));
}
