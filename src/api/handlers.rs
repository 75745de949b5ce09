use axum::response::Html;
use axum::Json;

use crate::api::dto::{
    GenerateMidiRequest, GenerateMidiResponse, HealthResponse, LoadCompositionQuery,
    LoadCompositionResponse, SaveCompositionRequest, SaveCompositionResponse,
};
use crate::api::error::ApiError;
use crate::api::extract::{ApiJson, ApiQuery};
use crate::composer::{library, midi, Composition};

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub const SERVICE_NAME: &str = "Music Composer API";

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Render the composition into a base64 MIDI placeholder.
pub async fn generate_midi(
    ApiJson(request): ApiJson<GenerateMidiRequest>,
) -> Result<Json<GenerateMidiResponse>, ApiError> {
    let composition = Composition::from(request);
    let file = midi::render(&composition);

    tracing::debug!(
        notes = %composition.notes,
        tempo = %composition.tempo,
        "Rendering MIDI placeholder"
    );
    tracing::info!(
        filename = %file.filename,
        bytes = file.bytes.len(),
        "MIDI generated"
    );

    Ok(Json(file.into()))
}

pub async fn save_composition(
    ApiJson(request): ApiJson<SaveCompositionRequest>,
) -> Result<Json<SaveCompositionResponse>, ApiError> {
    let saved = library::save(Composition::from(request));

    tracing::info!(id = %saved.id, name = %saved.composition.name, "Composition saved");

    Ok(Json(saved.into()))
}

pub async fn load_composition(
    ApiQuery(query): ApiQuery<LoadCompositionQuery>,
) -> Result<Json<LoadCompositionResponse>, ApiError> {
    let loaded = library::load(query.id.as_deref());

    tracing::info!(requested = ?query.id, "Composition loaded");

    Ok(Json(loaded.into()))
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}
