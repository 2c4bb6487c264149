use std::fmt;

/// Failure modes when driving `osascript`.
#[derive(Debug, Clone)]
pub enum ScriptError {
    /// The `osascript` binary could not be launched (missing on this host,
    /// permission denied, ...).
    Launch(String),
    /// The script ran but exited with a non-zero status.
    Failed(String),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Launch(msg) => write!(f, "failed to execute osascript: {msg}"),
            ScriptError::Failed(msg) => write!(f, "applescript failed: {msg}"),
        }
    }
}

impl std::error::Error for ScriptError {}

/// Runs an AppleScript source string through `osascript -e` and returns
/// trimmed stdout.
pub fn run_applescript(script: &str) -> Result<String, ScriptError> {
    let output = std::process::Command::new("osascript")
        .arg("-l")
        .arg("AppleScript")
        .arg("-e")
        .arg(script)
        .output()
        .map_err(|error| ScriptError::Launch(error.to_string()))?;
    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(ScriptError::Failed(if stderr.is_empty() {
            "osascript exited with a failure status".to_string()
        } else {
            stderr
        }))
    }
}

/// Escapes a value for embedding inside a double-quoted AppleScript string.
pub fn applescript_escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_quotes_and_newlines() {
        assert_eq!(applescript_escape("a \"b\"\nc"), "a \\\"b\\\"\\nc");
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(applescript_escape("plain text"), "plain text");
    }
}
