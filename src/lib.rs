//! Spotify Playlist via Serveo
//!
//! This library backs a small web application that walks a user through the
//! Spotify OAuth2 authorization-code flow, creates a playlist on their behalf
//! and renders a link to it. An SSH reverse tunnel to serveo.net makes the
//! local server reachable from the public internet during development.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the login, callback and health routes
//! - `config` - Configuration management and environment variables
//! - `error` - Typed error taxonomy for the whole crate
//! - `pages` - Minimal HTML page rendering
//! - `report` - Logging and failure-raising facade shared by all components
//! - `server` - The axum HTTP server
//! - `spotify` - Spotify Web API calls (token exchange, user, playlist)
//! - `tunnel` - Serveo SSH tunnel lifecycle management
//! - `types` - Request-scoped data structures

pub mod api;
pub mod config;
pub mod error;
pub mod pages;
pub mod report;
pub mod server;
pub mod spotify;
pub mod tunnel;
pub mod types;

pub use error::Error;

/// A convenient Result type alias for operations that may fail.
///
/// Every fallible operation in this crate reports its failure through the
/// typed [`Error`] enum, so propagated errors keep their kind all the way
/// up to the web layer.
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Reserved for fatal startup conditions (missing configuration, unusable
/// bind address, failed tunnel spawn) where continuing to serve requests
/// would be wrong. Request handlers never use this; they record errors with
/// [`failure!`] and return a typed error instead.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints an error message with a red cross without terminating the process.
///
/// The per-request counterpart of [`error!`]: records an error-level event
/// for a single request/operation while the server keeps running.
#[macro_export]
macro_rules! failure {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "x".red().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Highlights potential issues or notices that don't require termination,
/// like a user denying the Spotify authorization prompt.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
