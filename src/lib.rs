//! Music Composer API Library

pub mod api;
pub mod composer;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ComposerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
