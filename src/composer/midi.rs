//! MIDI payload rendering.
//!
//! The payload is a text placeholder, not a Standard MIDI File: the UTF-8
//! bytes of `Mock MIDI for: {notes} at {tempo} BPM`. Callers only see
//! [`render`], so a real encoder can replace the body without touching the
//! HTTP layer.

use chrono::{Local, NaiveDateTime};

use crate::composer::types::{Composition, MidiFile, Tempo};

/// Build the placeholder payload bytes for a composition.
pub fn placeholder_bytes(notes: &str, tempo: &Tempo) -> Vec<u8> {
    format!("Mock MIDI for: {notes} at {tempo} BPM").into_bytes()
}

/// Download filename for a payload rendered at `at` (local wall-clock time).
pub fn filename_at(at: NaiveDateTime) -> String {
    format!("composition_{}.mid", at.format("%Y%m%d_%H%M%S"))
}

/// Render a composition into a downloadable payload, stamped with the
/// current local time.
pub fn render(composition: &Composition) -> MidiFile {
    render_at(composition, Local::now().naive_local())
}

pub fn render_at(composition: &Composition, at: NaiveDateTime) -> MidiFile {
    MidiFile {
        bytes: placeholder_bytes(&composition.notes, &composition.tempo),
        filename: filename_at(at),
    }
}
