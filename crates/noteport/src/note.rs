//! Note data model and wire-format parsing.

use serde::Serialize;

use platform_macos::{FIELD_SEPARATOR, RECORD_SEPARATOR};

/// One note as reported by the source application.
///
/// Immutable value; `created` is whatever date string the source emits
/// and is treated as opaque. `body_html` is the raw rich-text markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteRecord {
    pub folder: String,
    pub title: String,
    pub created: String,
    pub body_html: String,
}

impl NoteRecord {
    pub fn new(
        folder: impl Into<String>,
        title: impl Into<String>,
        created: impl Into<String>,
        body_html: impl Into<String>,
    ) -> Self {
        Self {
            folder: folder.into(),
            title: title.into(),
            created: created.into(),
            body_html: body_html.into(),
        }
    }
}

/// Parses the separator-delimited note dump into records.
///
/// Blank records and records with fewer than four fields are skipped
/// rather than failing the whole batch.
pub fn parse_notes(raw: &str) -> Vec<NoteRecord> {
    let mut notes = Vec::new();
    for record in raw.split(RECORD_SEPARATOR) {
        if record.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = record.split(FIELD_SEPARATOR).collect();
        let [folder, title, created, body_html, ..] = fields.as_slice() else {
            tracing::warn!("skipping malformed note record with missing fields");
            continue;
        };
        notes.push(NoteRecord::new(
            folder.trim(),
            title.trim(),
            created.trim(),
            body_html.trim(),
        ));
    }
    notes
}

/// Fixed fallback fixture used when the note source is unavailable.
pub fn sample_notes() -> Vec<NoteRecord> {
    vec![
        NoteRecord::new(
            "Inbox",
            "Client meeting follow-up",
            "2024-11-02",
            "<p>Send project timeline and updated budget to client.</p>\n\
             <p>Schedule next meeting for Thursday.</p>",
        ),
        NoteRecord::new(
            "Personal",
            "Weekend meal prep ideas",
            "2024-11-01",
            "<ul><li>Chicken bowls</li><li>Vegetarian chili</li></ul>",
        ),
        NoteRecord::new(
            "Ideas",
            "New product brainstorm",
            "2024-10-29",
            "<p>Focus on onboarding UX and real-time insights.</p>",
        ),
    ]
}
