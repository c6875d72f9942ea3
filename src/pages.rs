//! Minimal HTML pages rendered by the handlers.
//!
//! Two page contracts exist: the error page takes a single `error` message,
//! the app page takes a single `playlist_url`. Interpolated values are
//! HTML-escaped.

use axum::response::Html;

/// Renders the error page with the given message.
pub fn error_page(error: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"pt-BR\">\n\
         <head><meta charset=\"utf-8\"><title>Erro</title></head>\n\
         <body>\n\
         <h2>Ocorreu um erro</h2>\n\
         <p>{}</p>\n\
         </body>\n\
         </html>",
        escape(error)
    ))
}

/// Renders the app page with a link to the created playlist.
pub fn app_page(playlist_url: &str) -> Html<String> {
    let url = escape(playlist_url);
    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"pt-BR\">\n\
         <head><meta charset=\"utf-8\"><title>Minha Playlist via Serveo</title></head>\n\
         <body>\n\
         <h2>Playlist criada com sucesso!</h2>\n\
         <p><a href=\"{url}\">{url}</a></p>\n\
         </body>\n\
         </html>"
    ))
}

/// Escapes the five HTML-significant characters. The provider echoes query
/// parameters back through the error page, so this is not optional.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
