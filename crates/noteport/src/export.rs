//! Writes rendered notes into a per-folder directory layout.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::note::NoteRecord;
use crate::render::{render, ExportFormat};
use crate::text::slugify;

const DEFAULT_FOLDER: &str = "Uncategorized";

/// Exports every note under `output_dir` as
/// `<slug(folder)>/<slug(title)>-<timestamp>.<ext>`.
///
/// `overrides` forces specific notes (keyed by title) into a folder,
/// bypassing both the original and any suggestion. The timestamp is
/// taken once per call so one run's files group together by name and
/// separate runs never collide. Two notes with the same effective
/// folder and title within one run map to the same path; the last one
/// wins, which is accepted rather than detected.
///
/// Returns the written paths in input order. A failed directory
/// creation or write aborts the call; files written before the failure
/// stay on disk.
pub fn export_notes(
    notes: &[NoteRecord],
    output_dir: &Path,
    format: ExportFormat,
    overrides: &HashMap<String, String>,
) -> CoreResult<Vec<PathBuf>> {
    fs::create_dir_all(output_dir).map_err(|error| {
        CoreError::Filesystem(format!(
            "failed to create export directory {}: {error}",
            output_dir.display()
        ))
    })?;

    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();
    let mut created_paths = Vec::with_capacity(notes.len());

    for note in notes {
        let folder_name = overrides
            .get(&note.title)
            .map(String::as_str)
            .unwrap_or(&note.folder);
        let folder_name = if folder_name.is_empty() {
            DEFAULT_FOLDER
        } else {
            folder_name
        };

        let folder_dir = output_dir.join(slugify(folder_name));
        fs::create_dir_all(&folder_dir).map_err(|error| {
            CoreError::Filesystem(format!(
                "failed to create folder directory {}: {error}",
                folder_dir.display()
            ))
        })?;

        let filename = format!(
            "{}-{}.{}",
            slugify(&note.title),
            timestamp,
            format.extension()
        );
        let output_path = folder_dir.join(filename);
        fs::write(&output_path, render(note, format)).map_err(|error| {
            CoreError::Filesystem(format!(
                "failed to write {}: {error}",
                output_path.display()
            ))
        })?;
        created_paths.push(output_path);
    }

    tracing::info!(
        count = created_paths.len(),
        dir = %output_dir.display(),
        "exported notes"
    );
    Ok(created_paths)
}
