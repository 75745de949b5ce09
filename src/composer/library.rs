//! Saving and loading compositions.
//!
//! There is no storage behind this module. Saving hands out a
//! timestamp-derived id and keeps nothing; loading returns one fixed sample
//! whatever id is asked for.

use chrono::{DateTime, Utc};

use crate::composer::types::{Composition, CompositionId, SavedComposition, Tempo};

pub const SAMPLE_NOTES: &str = "C4 E4 G4 C5 | E4 G4 C5 E5";
pub const SAMPLE_NAME: &str = "Sample Composition";

/// Id for a composition saved at `at`: `comp_<seconds>.<microseconds>`.
///
/// Two saves within the same microsecond receive the same id.
pub fn id_at(at: DateTime<Utc>) -> CompositionId {
    CompositionId::new(format!(
        "comp_{}.{:06}",
        at.timestamp(),
        at.timestamp_subsec_micros()
    ))
}

/// Accept a composition for saving and return its id. The composition is
/// dropped.
pub fn save(composition: Composition) -> SavedComposition {
    let id = id_at(Utc::now());
    tracing::debug!(
        id = %id,
        name = %composition.name,
        notes_len = composition.notes.len(),
        "Composition accepted (not persisted)"
    );
    SavedComposition { id, composition }
}

/// Look up a composition. Always yields the sample record.
pub fn load(id: Option<&str>) -> SavedComposition {
    SavedComposition {
        id: CompositionId::new(id.unwrap_or("sample")),
        composition: sample(),
    }
}

/// The sample composition served by [`load`].
pub fn sample() -> Composition {
    Composition::new(SAMPLE_NOTES)
        .with_name(SAMPLE_NAME)
        .with_tempo(Tempo::from(120))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_id_format() {
        let at = Utc.timestamp_opt(1_700_000_000, 42_000).unwrap();
        assert_eq!(id_at(at).as_str(), "comp_1700000000.000042");
    }

    #[test]
    fn test_save_returns_id() {
        let saved = save(Composition::new("D4 F4").with_name("Etude"));
        assert!(saved.id.as_str().starts_with("comp_"));
        assert_eq!(saved.composition.name, "Etude");
    }

    #[test]
    fn test_load_ignores_id() {
        for id in [None, Some("comp_1"), Some(""), Some("does-not-exist")] {
            let loaded = load(id);
            assert_eq!(loaded.composition.notes, SAMPLE_NOTES);
            assert_eq!(loaded.composition.name, SAMPLE_NAME);
            assert_eq!(loaded.composition.tempo, Tempo::from(120));
        }
    }
}
