//! Route handlers and the per-request data model.
//!
//! Every value constructed here is request-local: built in the handler,
//! serialized, and discarded. No handler touches shared mutable state.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::http::response::{AppError, Reply};
use crate::http::server::AppState;

/// A key/value pair in the sample JSON document.
#[derive(Debug, Serialize, Deserialize)]
pub struct Item {
    pub key: String,
    pub value: String,
}

/// The sample JSON document. Field order here fixes the serialized
/// byte layout.
#[derive(Debug, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    pub items: Vec<Item>,
}

/// Optional `name` query parameter shared by `/greeting` and `/hello`.
#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: Option<String>,
}

/// GET `/` — fixed text, query string and headers ignored.
pub async fn index() -> Reply {
    Reply::PlainText("Hello, World!".to_string())
}

/// GET `/greeting?name=X` — echoes the query parameter. A missing
/// parameter is rejected outright rather than greeting a literal null.
pub async fn greeting(Query(query): Query<NameQuery>) -> Response {
    match query.name {
        Some(name) => Reply::PlainText(format!("Hello, {name}!")).into_response(),
        None => (StatusCode::BAD_REQUEST, "missing query parameter 'name'").into_response(),
    }
}

/// GET `/user/{login}` — echoes the captured path segment. The pattern
/// requires the segment, so extraction either succeeds or Axum rejects
/// the request before this handler runs.
pub async fn user(Path(login): Path<String>) -> Reply {
    Reply::PlainText(format!("OK, {login}"))
}

/// GET `/hello?name=X` — renders the `hello` template, defaulting the
/// name to "anonymous".
pub async fn hello_page(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> Response {
    let name = query.name.unwrap_or_else(|| "anonymous".to_string());
    let context = HashMap::from([("name".to_string(), name)]);

    match state.templates.render("hello", &context) {
        Ok(html) => Reply::Html(html).into_response(),
        Err(err) => AppError::from(err).into_error_response(state.templates.debug()),
    }
}

/// GET `/json` — a fixed document, byte-identical on every call.
pub async fn json_sample(State(state): State<AppState>) -> Response {
    let model = Model {
        name: "root".to_string(),
        items: vec![
            Item {
                key: "A".to_string(),
                value: "Apache".to_string(),
            },
            Item {
                key: "B".to_string(),
                value: "Bing".to_string(),
            },
        ],
    };

    match Reply::json(&model) {
        Ok(reply) => reply.into_response(),
        Err(err) => err.into_error_response(state.templates.debug()),
    }
}
