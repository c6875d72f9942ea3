use axum::{
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{info, spotify};

/// Starts the user's Spotify login flow with a redirect to the provider's
/// authorization page.
pub async fn login() -> impl IntoResponse {
    info!("Iniciando fluxo de login do usuário.");
    let auth_url = spotify::auth::authorize_url();
    info!("URL de autenticação gerada: {auth_url}");

    (StatusCode::FOUND, [(header::LOCATION, auth_url)])
}
