//! Apple Notes dump script.
//!
//! Walks every folder in Notes.app and emits one record per note with
//! ASCII unit/record separators between fields and records, so bodies
//! containing newlines or commas survive the round trip.

use crate::applescript::{run_applescript, ScriptError};

/// ASCII record separator (0x1e) between notes.
pub const RECORD_SEPARATOR: char = '\u{1e}';
/// ASCII unit separator (0x1f) between fields of one note.
pub const FIELD_SEPARATOR: char = '\u{1f}';

const DUMP_SCRIPT: &str = r#"
set recordSeparator to ASCII character 30
set fieldSeparator to ASCII character 31
set output to ""

try
    tell application "Notes"
        repeat with f in folders
            set folderName to name of f
            repeat with n in notes of f
                set noteName to name of n
                set noteBody to body of n
                set noteDate to creation date of n as string
                set output to output & folderName & fieldSeparator & noteName & fieldSeparator & noteDate & fieldSeparator & noteBody & recordSeparator
            end repeat
        end repeat
    end tell
on error errMsg number errNum
    return "ERROR:" & errNum & ":" & errMsg
end try

return output
"#;

/// Dumps all notes as a separator-delimited stream of
/// `(folder, title, created, body)` records.
///
/// Notes.app reports script-level errors through its own `on error`
/// handler rather than a non-zero exit, so an `ERROR:` prefix on stdout
/// is mapped back to [`ScriptError::Failed`].
pub fn dump_notes() -> Result<String, ScriptError> {
    let raw = run_applescript(DUMP_SCRIPT)?;
    if let Some(message) = raw.strip_prefix("ERROR:") {
        tracing::warn!("notes dump script reported an error: {message}");
        return Err(ScriptError::Failed(message.to_string()));
    }
    Ok(raw)
}
