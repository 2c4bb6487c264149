pub mod server;

pub mod assess;
pub mod classify;
pub mod error;
pub mod export;
pub mod note;
pub mod render;
pub mod source;
pub mod text;

pub use crate::assess::{assess_suggestions, known_folders, AssessmentSummary};
pub use crate::classify::{Classifier, KeywordTable, SuggestedFolder};
pub use crate::error::{CoreError, CoreResult};
pub use crate::export::export_notes;
pub use crate::note::{parse_notes, sample_notes, NoteRecord};
pub use crate::render::{render, ExportFormat};
pub use crate::source::{fetch_or_sample, AppleScriptSource, FixtureSource, NoteSource, UnavailableSource};
