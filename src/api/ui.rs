//! Serves the compiled dashboard (`ui/dist`) from the binary.

use axum::{
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "ui/dist/"]
struct Assets;

/// Static asset lookup with an `index.html` fallback for client-side routes
pub async fn static_handler(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };

    if let Some(asset) = Assets::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return ([(header::CONTENT_TYPE, mime.as_ref().to_string())], asset.data).into_response();
    }

    match Assets::get("index.html") {
        Some(index) => Html(index.data).into_response(),
        None => (StatusCode::NOT_FOUND, "UI assets not built").into_response(),
    }
}
