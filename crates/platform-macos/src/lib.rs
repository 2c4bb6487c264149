mod applescript;
mod notes;

pub use applescript::{applescript_escape, run_applescript, ScriptError};
pub use notes::{dump_notes, FIELD_SEPARATOR, RECORD_SEPARATOR};
