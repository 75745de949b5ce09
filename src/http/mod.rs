//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (request ID, trace span, timeout, panic guard)
//!     → api (route match, extract, handle)
//!     → server.rs (propagate request ID, security headers)
//!     → Send to client
//! ```

pub mod server;

pub use server::{HttpServer, ServerError, X_REQUEST_ID};
