//! Configuration management for the playlist app.
//!
//! This module handles loading and accessing configuration values from
//! environment variables, `.env` files and an optional YAML settings file.
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory, falling back to the working
//!    directory
//! 3. Application defaults (where applicable)
//!
//! The three Spotify credentials are mandatory and validated once at startup
//! through [`validate`]; the process refuses to serve requests when any of
//! them is missing. Everything else has a default or is optional.

use std::{env, path::PathBuf};

use serde::Deserialize;

use crate::{Error, Res};

/// Environment variables that must be present for the app to start.
pub const REQUIRED_ENV: [&str; 3] = ["CLIENT_ID", "CLIENT_SECRET", "REDIRECT_URI"];

/// OAuth scope requested during authorization: permission to create and
/// modify the user's public playlists.
pub const SCOPE: &str = "playlist-modify-public";

const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";
const DEFAULT_SETTINGS_FILE: &str = "settings.yaml";

/// Loads environment variables from a `.env` file.
///
/// Looks for the file in the platform-specific local data directory under
/// `serveolist/.env` (creating the directory if needed) and falls back to a
/// `.env` in the current working directory. A missing file is not an error;
/// the variables may just as well come from the process environment.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/serveolist/.env`
/// - macOS: `~/Library/Application Support/serveolist/.env`
/// - Windows: `%LOCALAPPDATA%/serveolist/.env`
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("serveolist/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    } else {
        dotenv::dotenv().ok();
    }
    Ok(())
}

/// Checks that every required environment variable is present.
///
/// Returns [`Error::MissingConfig`] naming all absent variables at once, so
/// a user fixing their environment sees the full list instead of one name
/// per attempt. Must run before the server starts serving requests; the
/// accessor functions below assume it passed.
pub fn validate() -> Res<()> {
    let missing: Vec<&str> = REQUIRED_ENV
        .iter()
        .filter(|name| env::var(name).map(|v| v.is_empty()).unwrap_or(true))
        .copied()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingConfig(missing.join(", ")))
    }
}

/// Returns the Spotify application client ID.
///
/// # Panics
///
/// Panics if the `CLIENT_ID` environment variable is not set; startup
/// validation guarantees it is.
pub fn client_id() -> String {
    env::var("CLIENT_ID").expect("CLIENT_ID must be set")
}

/// Returns the Spotify application client secret.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
///
/// # Panics
///
/// Panics if the `CLIENT_SECRET` environment variable is not set; startup
/// validation guarantees it is.
pub fn client_secret() -> String {
    env::var("CLIENT_SECRET").expect("CLIENT_SECRET must be set")
}

/// Returns the OAuth redirect URI registered with the Spotify application.
///
/// This must match the redirect URI configured in the Spotify developer
/// dashboard, typically `https://<serveo-domain>/callback`.
///
/// # Panics
///
/// Panics if the `REDIRECT_URI` environment variable is not set; startup
/// validation guarantees it is.
pub fn redirect_uri() -> String {
    env::var("REDIRECT_URI").expect("REDIRECT_URI must be set")
}

/// Returns the Spotify OAuth authorization URL.
///
/// Overridable through `SPOTIFY_AUTH_URL`; defaults to the public accounts
/// service endpoint.
pub fn auth_url() -> String {
    env::var("SPOTIFY_AUTH_URL").unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string())
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Overridable through `SPOTIFY_TOKEN_URL`; defaults to the public accounts
/// service endpoint.
pub fn token_url() -> String {
    env::var("SPOTIFY_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Returns the Spotify Web API base URL.
///
/// Overridable through `SPOTIFY_API_URL`; defaults to the public v1 API.
pub fn api_url() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the address the HTTP server binds to.
///
/// Overridable through `SERVER_ADDRESS`; defaults to `127.0.0.1:5000`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Optional application settings read from a YAML file.
///
/// Only the tunnel manager consumes these; the file is allowed to be absent,
/// in which case no tunnel is opened.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub serveo: Option<ServeoSettings>,
}

#[derive(Debug, Deserialize)]
pub struct ServeoSettings {
    pub domain: String,
}

impl Settings {
    /// The Serveo domain to request, if one is configured.
    pub fn serveo_domain(&self) -> Option<&str> {
        self.serveo.as_ref().map(|s| s.domain.as_str())
    }
}

/// Loads the settings file named by `SETTINGS_FILE` (default
/// `settings.yaml`). An absent file yields default settings; an unparsable
/// one is an error, since silently ignoring a broken file would hide a
/// misconfigured tunnel.
pub async fn load_settings() -> Res<Settings> {
    let path = PathBuf::from(
        env::var("SETTINGS_FILE").unwrap_or_else(|_| DEFAULT_SETTINGS_FILE.to_string()),
    );
    if !path.is_file() {
        return Ok(Settings::default());
    }

    let content = async_fs::read_to_string(&path)
        .await
        .map_err(Error::Os)?;
    serde_yaml::from_str(&content).map_err(Error::Settings)
}
