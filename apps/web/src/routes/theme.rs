use axum::{
    http::{header, HeaderMap},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::debug;

use crate::theme::{CookieStore, ThemeController};

#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    #[serde(default)]
    pub return_to: String,
}

/// POST /theme/toggle
/// Flips the persisted theme and sends the visitor back where they came from.
pub async fn handle_toggle_theme(headers: HeaderMap, Form(form): Form<ToggleForm>) -> Response {
    let mut theme = ThemeController::mount(CookieStore::from_headers(&headers));
    let mode = theme.toggle();
    debug!("Theme switched to {}", mode.as_str());

    let mut response = Redirect::to(safe_return_path(&form.return_to)).into_response();
    for cookie in theme.store().set_cookie_headers() {
        response.headers_mut().append(header::SET_COOKIE, cookie);
    }
    response
}

/// Only same-site relative paths are followed; anything else goes to `/`.
/// The path must already be percent-encoded: visible ASCII only, so it is always a valid
/// `Location` value.
fn safe_return_path(raw: &str) -> &str {
    let local = raw.starts_with('/') && !raw.starts_with("//") && !raw.starts_with("/\\");
    if local && raw.bytes().all(|b| b.is_ascii_graphic()) {
        raw
    } else {
        "/"
    }
}
