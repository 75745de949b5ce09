//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! built-in defaults (or config file, TOML)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (PORT / HOST / DEBUG / LOG_LEVEL overrides)
//!     → validation.rs (semantic checks)
//!     → ComposerConfig (validated, immutable)
//!     → shared via Arc with the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load, load_with, ConfigError};
pub use schema::ComposerConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
