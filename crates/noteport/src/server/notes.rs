//! Notes API endpoints.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::assess::{assess_suggestions, known_folders, AssessmentSummary};
use crate::export::export_notes;
use crate::note::NoteRecord;
use crate::render::ExportFormat;
use crate::server::error::ApiError;
use crate::server::ServerState;
use crate::source::fetch_or_sample;

/// One note enriched with its classifier verdict.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedNote {
    pub title: String,
    pub folder: String,
    pub created: String,
    pub body_html: String,
    pub suggested_folder: String,
    pub confidence: f64,
    pub reason: String,
}

/// Response for the listing endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNotesResponse {
    pub notes: Vec<EnrichedNote>,
    pub folders: Vec<String>,
}

/// Request payload for exporting notes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    /// Directory files are written under. Defaults to "notes-export".
    pub output_dir: Option<PathBuf>,
    /// One of "markdown", "html", "text". Defaults to "markdown".
    pub format: Option<String>,
    /// Title-to-folder overrides applied before slugging.
    #[serde(default)]
    pub overrides: HashMap<String, String>,
}

/// Response for the export endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub count: usize,
    pub output_dir: String,
}

/// GET /api/notes
///
/// Lists every note with its suggested folder, plus the distinct
/// folder names of the collection. Falls back to the sample set when
/// the source is unavailable.
pub(crate) async fn list(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<ListNotesResponse>, ApiError> {
    let notes = fetch_notes(&state).await?;
    let folders = known_folders(&notes);

    let enriched = notes
        .into_iter()
        .map(|note| {
            let suggestion = state.classifier.suggest(&note, &folders);
            EnrichedNote {
                title: note.title,
                folder: note.folder,
                created: note.created,
                body_html: note.body_html,
                suggested_folder: suggestion.name,
                confidence: suggestion.confidence,
                reason: suggestion.reason,
            }
        })
        .collect();

    Ok(Json(ListNotesResponse {
        notes: enriched,
        folders,
    }))
}

/// GET /api/assess
///
/// Returns the bucketed classification summary for review before an
/// export.
pub(crate) async fn assess(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<AssessmentSummary>, ApiError> {
    let notes = fetch_notes(&state).await?;
    Ok(Json(assess_suggestions(&state.classifier, &notes)))
}

/// POST /api/export
///
/// Writes every note to disk and reports the file count and resolved
/// output directory.
pub(crate) async fn export(
    State(state): State<Arc<ServerState>>,
    Json(payload): Json<ExportRequest>,
) -> Result<Json<ExportResponse>, ApiError> {
    let output_dir = payload
        .output_dir
        .unwrap_or_else(|| PathBuf::from("notes-export"));
    let format: ExportFormat = payload
        .format
        .as_deref()
        .unwrap_or("markdown")
        .parse()
        .map_err(ApiError::from)?;
    let overrides = payload.overrides;

    let notes = fetch_notes(&state).await?;
    let (count, resolved) = tokio::task::spawn_blocking(move || {
        let paths = export_notes(&notes, &output_dir, format, &overrides)?;
        let resolved = std::fs::canonicalize(&output_dir).unwrap_or(output_dir);
        Ok::<_, crate::error::CoreError>((paths.len(), resolved))
    })
    .await
    .map_err(|e| ApiError::internal(format!("task failed: {e}")))??;

    Ok(Json(ExportResponse {
        count,
        output_dir: resolved.to_string_lossy().to_string(),
    }))
}

/// Fetches through the configured source on a blocking thread, with
/// the sample-set fallback shared by every endpoint.
async fn fetch_notes(state: &ServerState) -> Result<Vec<NoteRecord>, ApiError> {
    let source = state.source.clone();
    tokio::task::spawn_blocking(move || fetch_or_sample(source.as_ref()))
        .await
        .map_err(|e| ApiError::internal(format!("task failed: {e}")))
}
