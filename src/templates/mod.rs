//! HTML template subsystem.
//!
//! # Data Flow
//! ```text
//! render("hello", context)
//!     → store.rs (resolve source: local dir first, bundled set second)
//!     → render.rs (substitute {{ key }} placeholders, HTML-escape values)
//!     → HTML text
//! ```
//!
//! # Design Decisions
//! - Two-tier lookup: a filesystem directory shadows the bundled
//!   templates, so pages can be edited live during development while
//!   the defaults ship inside the binary via `include_str!`
//! - Substituted values are always HTML-escaped; templates are trusted,
//!   context values are not
//! - An unresolved placeholder is an error carrying the template name
//!   and the placeholder, not silently empty output

mod render;
mod store;

use thiserror::Error;

pub use store::TemplateStore;

/// Errors raised while resolving or rendering a template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// No file in the template directory and no bundled copy.
    #[error("template '{name}' not found in '{dir}' or the bundled set")]
    NotFound { name: String, dir: String },

    /// The template references a key absent from the context.
    #[error("template '{template}': no value for placeholder '{{{{{key}}}}}'")]
    MissingValue { template: String, key: String },

    /// The template file exists but could not be read.
    #[error("template '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}
