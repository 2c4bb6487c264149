//! Single-note rendering for each export format.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::note::NoteRecord;
use crate::text::strip_html;

/// Output file format for an export run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Markdown,
    Html,
    Text,
}

impl ExportFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Html => "html",
            ExportFormat::Text => "txt",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Html => write!(f, "html"),
            ExportFormat::Text => write!(f, "text"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "markdown" => Ok(ExportFormat::Markdown),
            "html" => Ok(ExportFormat::Html),
            "text" => Ok(ExportFormat::Text),
            other => Err(CoreError::InvalidInput(format!(
                "unknown export format: {other} (expected markdown, html, or text)"
            ))),
        }
    }
}

/// Renders one note into the full file content for the chosen format.
///
/// The HTML variant escapes title, folder, and creation date (free
/// text) but emits the original body markup verbatim: the body already
/// is HTML from the source application and re-escaping it would
/// destroy it.
pub fn render(note: &NoteRecord, format: ExportFormat) -> String {
    match format {
        ExportFormat::Html => format!(
            "<h1>{}</h1>\n<p><strong>Folder:</strong> {}<br/><strong>Created:</strong> {}</p>\n{}\n",
            html_escape(&note.title),
            html_escape(&note.folder),
            html_escape(&note.created),
            note.body_html,
        ),
        ExportFormat::Text => format!(
            "{}\n{}\n{}\n\n{}\n",
            note.title,
            note.folder,
            note.created,
            strip_html(&note.body_html),
        ),
        ExportFormat::Markdown => format!(
            "# {}\n\nFolder: {}\nCreated: {}\n\n{}\n",
            note.title,
            note.folder,
            note.created,
            strip_html(&note.body_html),
        ),
    }
}

fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note() -> NoteRecord {
        NoteRecord::new(
            "Work",
            "Q1 <Plan> & Review",
            "2024-11-02",
            "<p>Ship the &amp; feature</p>",
        )
    }

    #[test]
    fn format_round_trips_through_strings() {
        for (name, format) in [
            ("markdown", ExportFormat::Markdown),
            ("html", ExportFormat::Html),
            ("text", ExportFormat::Text),
        ] {
            assert_eq!(name.parse::<ExportFormat>().unwrap(), format);
            assert_eq!(format.to_string(), name);
        }
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn extensions_match_formats() {
        assert_eq!(ExportFormat::Markdown.extension(), "md");
        assert_eq!(ExportFormat::Html.extension(), "html");
        assert_eq!(ExportFormat::Text.extension(), "txt");
    }

    #[test]
    fn html_escapes_metadata_but_not_body() {
        let rendered = render(&note(), ExportFormat::Html);
        assert!(rendered.contains("<h1>Q1 &lt;Plan&gt; &amp; Review</h1>"));
        // Body markup passes through untouched.
        assert!(rendered.contains("<p>Ship the &amp; feature</p>"));
    }

    #[test]
    fn markdown_has_heading_metadata_and_plain_body() {
        let rendered = render(&note(), ExportFormat::Markdown);
        assert!(rendered.starts_with("# Q1 <Plan> & Review\n\n"));
        assert!(rendered.contains("Folder: Work\nCreated: 2024-11-02\n\n"));
        assert!(rendered.ends_with("Ship the & feature\n"));
    }

    #[test]
    fn text_lists_metadata_lines_then_body() {
        let rendered = render(&note(), ExportFormat::Text);
        assert_eq!(
            rendered,
            "Q1 <Plan> & Review\nWork\n2024-11-02\n\nShip the & feature\n"
        );
    }
}
