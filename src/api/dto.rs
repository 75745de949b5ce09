//! Request and response bodies for the JSON endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::composer::{value_text, Composition, MidiFile, SavedComposition, Tempo, DEFAULT_NAME};

/// Body of `POST /api/generate-midi`.
///
/// Fields take any JSON value; strings are used as-is and other values by
/// their JSON text. Unknown fields are ignored and `null` counts as absent.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerateMidiRequest {
    pub composition: Option<Value>,
    pub tempo: Option<Tempo>,
}

impl From<GenerateMidiRequest> for Composition {
    fn from(request: GenerateMidiRequest) -> Self {
        Composition::new(request.composition.as_ref().map(value_text).unwrap_or_default())
            .with_tempo(request.tempo.unwrap_or_default())
    }
}

/// Body of `POST /api/save-composition`. Same leniency as
/// [`GenerateMidiRequest`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SaveCompositionRequest {
    pub composition: Option<Value>,
    pub name: Option<Value>,
    pub tempo: Option<Tempo>,
}

impl From<SaveCompositionRequest> for Composition {
    fn from(request: SaveCompositionRequest) -> Self {
        let name = request
            .name
            .as_ref()
            .map(value_text)
            .unwrap_or_else(|| DEFAULT_NAME.to_string());

        Composition::new(request.composition.as_ref().map(value_text).unwrap_or_default())
            .with_name(name)
            .with_tempo(request.tempo.unwrap_or_default())
    }
}

/// Query of `GET /api/load-composition`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoadCompositionQuery {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateMidiResponse {
    pub success: bool,
    pub message: String,
    pub midi_data: String,
    pub filename: String,
}

impl From<MidiFile> for GenerateMidiResponse {
    fn from(file: MidiFile) -> Self {
        Self {
            success: true,
            message: "MIDI generated successfully".to_string(),
            midi_data: file.to_base64(),
            filename: file.filename,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SaveCompositionResponse {
    pub success: bool,
    pub message: String,
    pub id: String,
}

impl From<SavedComposition> for SaveCompositionResponse {
    fn from(saved: SavedComposition) -> Self {
        Self {
            success: true,
            message: "Composition saved successfully".to_string(),
            id: saved.id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoadCompositionResponse {
    pub success: bool,
    pub composition: String,
    pub name: String,
    pub tempo: Tempo,
}

impl From<SavedComposition> for LoadCompositionResponse {
    fn from(saved: SavedComposition) -> Self {
        Self {
            success: true,
            composition: saved.composition.notes,
            name: saved.composition.name,
            tempo: saved.composition.tempo,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
