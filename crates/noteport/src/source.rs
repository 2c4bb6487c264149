//! Where notes come from.
//!
//! The pipeline never cares how notes arrive; it sees a single-method
//! capability that either yields records or reports the source as
//! unavailable. Production uses the AppleScript bridge, tests hand in
//! fixtures.

use crate::error::{CoreError, CoreResult};
use crate::note::{parse_notes, sample_notes, NoteRecord};

/// A provider of note records.
pub trait NoteSource: Send + Sync {
    fn fetch(&self) -> CoreResult<Vec<NoteRecord>>;
}

/// Reads notes out of Notes.app through `osascript`.
#[derive(Debug, Default, Clone)]
pub struct AppleScriptSource;

impl NoteSource for AppleScriptSource {
    fn fetch(&self) -> CoreResult<Vec<NoteRecord>> {
        let raw = platform_macos::dump_notes()
            .map_err(|error| CoreError::SourceUnavailable(error.to_string()))?;
        let notes = parse_notes(&raw);
        if notes.is_empty() {
            return Err(CoreError::SourceUnavailable("no notes found".to_string()));
        }
        Ok(notes)
    }
}

/// An in-memory source for tests and demos.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    notes: Vec<NoteRecord>,
}

impl FixtureSource {
    pub fn new(notes: Vec<NoteRecord>) -> Self {
        Self { notes }
    }
}

impl NoteSource for FixtureSource {
    fn fetch(&self) -> CoreResult<Vec<NoteRecord>> {
        if self.notes.is_empty() {
            return Err(CoreError::SourceUnavailable("no notes found".to_string()));
        }
        Ok(self.notes.clone())
    }
}

/// Always reports the source as unreachable.
#[derive(Debug, Clone)]
pub struct UnavailableSource;

impl NoteSource for UnavailableSource {
    fn fetch(&self) -> CoreResult<Vec<NoteRecord>> {
        Err(CoreError::SourceUnavailable(
            "note source is not reachable".to_string(),
        ))
    }
}

/// Fetches notes, substituting the built-in sample set when the source
/// is unavailable.
///
/// Only `SourceUnavailable` is recovered this way; any other failure
/// propagates. The CLI export path deliberately skips this helper and
/// calls [`NoteSource::fetch`] directly, because silently exporting
/// sample data in place of real notes would be misleading.
pub fn fetch_or_sample(source: &dyn NoteSource) -> Vec<NoteRecord> {
    match source.fetch() {
        Ok(notes) => notes,
        Err(CoreError::SourceUnavailable(reason)) => {
            tracing::info!("note source unavailable ({reason}); using sample notes");
            sample_notes()
        }
        Err(error) => {
            tracing::warn!("note fetch failed ({error}); using sample notes");
            sample_notes()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_source_returns_its_notes() {
        let notes = sample_notes();
        let source = FixtureSource::new(notes.clone());
        assert_eq!(source.fetch().expect("fetch"), notes);
    }

    #[test]
    fn empty_fixture_reports_source_unavailable() {
        let source = FixtureSource::new(Vec::new());
        assert!(matches!(
            source.fetch(),
            Err(CoreError::SourceUnavailable(_))
        ));
    }

    #[test]
    fn fetch_or_sample_falls_back_to_fixture_set() {
        let notes = fetch_or_sample(&UnavailableSource);
        assert_eq!(notes, sample_notes());
    }

    #[test]
    fn fetch_or_sample_prefers_real_notes() {
        let mine = vec![NoteRecord::new("Work", "Sync", "2024-11-02", "x")];
        let source = FixtureSource::new(mine.clone());
        assert_eq!(fetch_or_sample(&source), mine);
    }
}
