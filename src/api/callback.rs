use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{
    Error, Res, info, pages,
    report::{Level, Reporter},
    spotify,
    types::{AuthorizationResult, PlaylistOutcome, TokenInfo},
};

/// Name of the playlist created for the authenticated user.
const PLAYLIST_NAME: &str = "Minha Playlist via Serveo";

const NO_CODE_MSG: &str = "Nenhum código de autorização recebido.";
const NO_TOKEN_MSG: &str = "Token de acesso não foi obtido.";
const NO_USER_ID_MSG: &str = "Resposta do Spotify não contém o ID do usuário.";
const INCOMPLETE_PLAYLIST_MSG: &str =
    "Resposta do Spotify não contém informações completas da playlist.";

/// Handles Spotify's redirect back to the application.
///
/// The decision sequence is fixed: a provider error or a missing code
/// short-circuits to the error page before any network call; a failed token
/// exchange propagates (the web layer answers with a generic 500); a token
/// reply without a usable access token restarts the flow with a fresh
/// redirect to the authorization page; otherwise the playlist flow runs and
/// its outcome picks the page to render.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(reporter): Extension<Arc<Reporter>>,
) -> Res<Response> {
    info!("Recebida requisição de callback do Spotify.");

    match AuthorizationResult::from_params(&params) {
        AuthorizationResult::Error(error) => {
            reporter.report(
                &format!("Erro na autenticação do Spotify: {error}"),
                Level::Warning,
            );
            Ok(pages::error_page(&error).into_response())
        }
        AuthorizationResult::Missing => {
            let msg = reporter.report(NO_CODE_MSG, Level::Warning);
            Ok(pages::error_page(msg).into_response())
        }
        AuthorizationResult::Code(code) => {
            let token = exchange_code(&code, &reporter).await?;

            let Some(access_token) = token.access_token() else {
                reporter.report(NO_TOKEN_MSG, Level::Error);
                let auth_url = spotify::auth::authorize_url();
                return Ok(
                    (StatusCode::FOUND, [(header::LOCATION, auth_url)]).into_response()
                );
            };

            match create_playlist(access_token, &reporter).await? {
                PlaylistOutcome::Created(url) => {
                    info!("Playlist criada com sucesso: {url}");
                    Ok(pages::app_page(&url).into_response())
                }
                PlaylistOutcome::Failed(msg) => Ok(pages::error_page(&msg).into_response()),
            }
        }
    }
}

/// Exchanges the authorization code for a token. A transport failure here
/// is exceptional and propagates; no page of ours is rendered for it.
async fn exchange_code(code: &str, reporter: &Reporter) -> Res<TokenInfo> {
    info!("Obtendo token de acesso para o código recebido.");
    spotify::auth::exchange_code(code)
        .await
        .map_err(|e| reporter.fail(Error::TokenExchange(e)))
}

/// Runs the two Web API calls of the playlist flow, validating each
/// response's shape before trusting it. Incomplete responses become a
/// [`PlaylistOutcome::Failed`] with a user-facing message; API-level errors
/// propagate.
async fn create_playlist(access_token: &str, reporter: &Reporter) -> Res<PlaylistOutcome> {
    let user = spotify::user::current_user(access_token)
        .await
        .map_err(|e| reporter.fail(Error::Api(e)))?;

    let Some(user_id) = spotify::user::id_of(&user) else {
        let msg = reporter.report(NO_USER_ID_MSG, Level::Error);
        return Ok(PlaylistOutcome::Failed(msg.to_string()));
    };
    info!("Usuário autenticado: {user_id}");

    let playlist = spotify::playlist::create(access_token, user_id, PLAYLIST_NAME)
        .await
        .map_err(|e| reporter.fail(Error::Api(e)))?;

    let Some(url) = spotify::playlist::url_of(&playlist) else {
        let msg = reporter.report(INCOMPLETE_PLAYLIST_MSG, Level::Error);
        return Ok(PlaylistOutcome::Failed(msg.to_string()));
    };

    Ok(PlaylistOutcome::Created(url.to_string()))
}
