//! Composition data model.

use std::fmt;

use base64::Engine;
use serde::{Deserialize, Serialize};

/// Tempo used when a request does not carry one.
pub const DEFAULT_TEMPO: u32 = 120;

/// Display name used when a saved composition has none.
pub const DEFAULT_NAME: &str = "Untitled";

/// Text form of an arbitrary JSON value: strings as-is, everything else
/// as its JSON text (`42`, `true`, `["C4"]`).
pub fn value_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Beats per minute, kept as the JSON value the client sent.
///
/// Nothing is checked: `96.5` renders as `96.5`, `"fast"` as `fast`, and
/// the value is echoed back unchanged when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tempo(serde_json::Value);

impl Default for Tempo {
    fn default() -> Self {
        Self(DEFAULT_TEMPO.into())
    }
}

impl From<u32> for Tempo {
    fn from(bpm: u32) -> Self {
        Self(bpm.into())
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&value_text(&self.0))
    }
}

/// A composition as submitted by the editor: uninterpreted note text plus
/// tempo and display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub notes: String,
    pub tempo: Tempo,
    pub name: String,
}

impl Composition {
    pub fn new(notes: impl Into<String>) -> Self {
        Self {
            notes: notes.into(),
            tempo: Tempo::default(),
            name: DEFAULT_NAME.to_string(),
        }
    }

    pub fn with_tempo(mut self, tempo: Tempo) -> Self {
        self.tempo = tempo;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for Composition {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// Identifier handed out for a saved composition (`comp_<unix-timestamp>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompositionId(String);

impl CompositionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored composition record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedComposition {
    pub id: CompositionId,
    pub composition: Composition,
}

/// Rendered MIDI payload and the filename offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MidiFile {
    pub bytes: Vec<u8>,
    pub filename: String,
}

impl MidiFile {
    /// Standard, padded base64 of the payload.
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }
}
