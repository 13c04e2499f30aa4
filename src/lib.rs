//! Minimal demonstration web server.
//!
//! Registers five GET routes (static text, query-parameter echo,
//! path-parameter echo, a server-rendered template page, and a JSON
//! endpoint) atop Axum, with compression, default headers, and request
//! logging applied to every request.

pub mod config;
pub mod http;
pub mod templates;

pub use config::ServerConfig;
pub use http::HttpServer;
