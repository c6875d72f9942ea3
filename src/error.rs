use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Typed failures for every component of the application.
///
/// Each variant corresponds to one branch of the error taxonomy: fatal
/// configuration problems, transport failures against the Spotify accounts
/// service, Spotify Web API failures, tunnel process failures and parsing
/// problems in the optional settings file. User-flow conditions (a denied
/// authorization, a missing code, an incomplete API response) are not errors
/// in this sense; they render a page and never unwind.
#[derive(Debug, Error)]
pub enum Error {
    /// A log level outside of `info`, `warning` or `error`.
    #[error("Nível de log inválido: {0}. Use 'info', 'warning' ou 'error'.")]
    InvalidLevel(String),

    /// One or more required environment variables are absent at startup.
    #[error("Variáveis de ambiente ausentes: {0}")]
    MissingConfig(String),

    /// The authorization code could not be exchanged for a token.
    #[error("Erro ao obter token de acesso do Spotify: {0}")]
    TokenExchange(#[source] reqwest::Error),

    /// A Spotify Web API call failed at the transport or HTTP-status level.
    #[error("Erro ao chamar a API do Spotify: {0}")]
    Api(#[source] reqwest::Error),

    /// The SSH client binary could not be found on this system.
    #[error("Executável SSH não encontrado: {0}")]
    ExecutableNotFound(String),

    /// An operating-system call failed: spawning or stopping the tunnel
    /// process, or reading the settings file. Call sites add their own
    /// context when reporting.
    #[error("Erro de sistema: {0}")]
    Os(#[source] std::io::Error),

    /// The settings file exists but could not be parsed.
    #[error("Arquivo de configurações inválido: {0}")]
    Settings(#[source] serde_yaml::Error),
}

/// Propagated handler failures become a generic 500 page. The specific
/// cause was already logged through the reporter at the point of failure.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<h4>Erro interno do servidor.</h4>"),
        )
            .into_response()
    }
}
