//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → consumed once at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All fields have defaults, so an empty or absent file is valid
//!   (port 8080, `templates/` directory, diagnostics off)

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::ServerConfig;
pub use schema::{ListenerConfig, TemplateConfig};
