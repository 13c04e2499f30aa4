//! Response types.
//!
//! # Responsibilities
//! - Map handler output to status, content type, and body
//! - Map handler failures to 500 responses, verbose or opaque
//!
//! # Design Decisions
//! - Handlers pick the content type explicitly via the `Reply` variants
//!   rather than relying on a type-dispatched response transform
//! - JSON replies carry pre-serialized text so the struct field order
//!   fixes the byte layout of the document

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::templates::TemplateError;

/// A successful handler result with its content type made explicit.
#[derive(Debug)]
pub enum Reply {
    /// 200, `text/plain; charset=utf-8`.
    PlainText(String),
    /// 200, `text/html; charset=utf-8`.
    Html(String),
    /// 200, `application/json`; holds the serialized document.
    Json(String),
}

impl Reply {
    /// Serialize `value` into a JSON reply.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, AppError> {
        Ok(Self::Json(serde_json::to_string(value)?))
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::PlainText(body) => body.into_response(),
            Reply::Html(body) => Html(body).into_response(),
            Reply::Json(body) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                body,
            )
                .into_response(),
        }
    }
}

/// A handler failure destined for a 500 response.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Convert into a 500 response. With `verbose` set the failure
    /// detail is embedded in an HTML body for development use; the
    /// production shape is an opaque body.
    pub fn into_error_response(self, verbose: bool) -> Response {
        tracing::error!(error = %self, "request handler failed");

        if verbose {
            let body = format!(
                "<!DOCTYPE html>\n<html>\n<head><title>Internal Server Error</title></head>\n\
                 <body>\n<h1>Internal Server Error</h1>\n<pre>{}</pre>\n</body>\n</html>\n",
                escape(&self.to_string())
            );
            (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
        } else {
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        }
    }
}

/// Minimal escaping for the diagnostic page; error text may quote
/// template markup.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
