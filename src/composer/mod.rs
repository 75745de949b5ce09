//! Composition domain: the data model and the (mock) operations behind the
//! API.
//!
//! # Data Flow
//! ```text
//! api handler
//!     → types.rs (Composition, Tempo)
//!     → midi.rs (placeholder payload + download filename)
//!     → library.rs (id for saves, sample record for loads)
//! ```

pub mod library;
pub mod midi;
pub mod types;

pub use types::{Composition, CompositionId, MidiFile, SavedComposition, Tempo};
pub use types::{value_text, DEFAULT_NAME, DEFAULT_TEMPO};
