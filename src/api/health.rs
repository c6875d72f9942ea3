use axum::response::Json;
use serde_json::{Value, json};

/// Liveness endpoint; handy for checking the tunnel end-to-end with
/// `curl https://<domain>/health`.
pub async fn health() -> Json<Value> {
    Json(json!({
        "app": env!("CARGO_PKG_NAME"),
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
