//! Rendering templates into complete HTTP responses.
//!
//! Handlers in a vitrine site rarely want a `String`; they want the
//! finished response. [`TemplateGroup::render_response`] executes the
//! template into an in-memory buffer first and only then commits to a
//! status line, so a mid-render failure can still be reported as a clean
//! 500 instead of a truncated 200 body.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::RenderError;
use crate::group::TemplateGroup;

impl TemplateGroup {
    /// Renders the named template into a complete HTTP response.
    ///
    /// On success: HTTP 200 with `Content-Type: text/html` and a
    /// `Content-Length` equal to the exact buffered byte count, body
    /// written verbatim. On any failure (a fatal load error, the
    /// missing-template deployment fault, or a template execution error):
    /// an HTTP 500 whose body is the error's textual description, with
    /// none of the partial buffer written.
    ///
    /// Exactly one response per call; no retries.
    pub fn render_response<C: Serialize>(&self, name: &str, context: C) -> Response {
        match self.render(name, context) {
            Ok(body) => html_response(body),
            Err(err) => error_response(&err),
        }
    }
}

/// Wraps a finished HTML buffer in a 200 response.
pub fn html_response(body: String) -> Response {
    let length = body.len();
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("text/html")),
            (header::CONTENT_LENGTH, HeaderValue::from(length)),
        ],
        body,
    )
        .into_response()
}

/// Converts a render failure into a 500 response carrying the error text.
///
/// The raw error description is acceptable for a demo/diagnostic
/// application; this deliberately does not hide internals from clients.
pub fn error_response(err: &RenderError) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
}
