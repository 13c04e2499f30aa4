//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: compression, default
//!       headers, tracing, timeout)
//!     → route table match
//!     → handlers.rs (produce a Reply, optionally via templates)
//!     → response.rs (Reply → status + content type + body)
//!     → Send to client
//! ```

pub mod handlers;
pub mod response;
pub mod server;

pub use response::{AppError, Reply};
pub use server::HttpServer;
