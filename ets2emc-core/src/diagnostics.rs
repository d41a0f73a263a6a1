// ============================================================================
// ets2emc-core/src/diagnostics.rs
// ============================================================================
//
// DIAGNOSTICS: Ordered log of translation messages
//
// Every lossy, approximated or impossible conversion is recorded here together
// with the structural path of the source node it concerns. The log is
// append-only and is handed back to the caller once the document has been
// translated. Records are mirrored to the `log` facade at debug level so a
// file log captures them in context.

use crate::path::Path;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    /// Behaviour changed but nothing was lost.
    Info,
    /// A setting was approximated, defaulted or dropped.
    Warn,
    /// A required target value could not be produced.
    Error,
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Info => write!(f, "INFO"),
            Level::Warn => write!(f, "WARN"),
            Level::Error => write!(f, "ERROR"),
        }
    }
}

/// A single translation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: Level,
    pub path: Path,
    pub message: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "[{}] {}", self.level, self.message)
        } else {
            write!(f, "[{}] {}: {}", self.level, self.path, self.message)
        }
    }
}

/// Append-only, ordered collection of diagnostics for one translation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics {
    messages: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a diagnostic and mirrors it to the log facade.
    pub fn record<S: Into<String>>(&mut self, level: Level, path: &Path, message: S) {
        let diagnostic = Diagnostic {
            level,
            path: path.clone(),
            message: message.into(),
        };
        log::debug!("{}", diagnostic);
        self.messages.push(diagnostic);
    }

    pub fn info<S: Into<String>>(&mut self, path: &Path, message: S) {
        self.record(Level::Info, path, message);
    }

    pub fn warn<S: Into<String>>(&mut self, path: &Path, message: S) {
        self.record(Level::Warn, path, message);
    }

    pub fn error<S: Into<String>>(&mut self, path: &Path, message: S) {
        self.record(Level::Error, path, message);
    }

    /// All diagnostics in the order they were recorded
    pub fn messages(&self) -> &[Diagnostic] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<Diagnostic> {
        self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Get all error diagnostics
    pub fn errors(&self) -> Vec<&Diagnostic> {
        self.at_level(Level::Error)
    }

    /// Get all warning diagnostics
    pub fn warnings(&self) -> Vec<&Diagnostic> {
        self.at_level(Level::Warn)
    }

    /// Get all info diagnostics
    pub fn infos(&self) -> Vec<&Diagnostic> {
        self.at_level(Level::Info)
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.level == Level::Error)
    }

    fn at_level(&self, level: Level) -> Vec<&Diagnostic> {
        self.messages.iter().filter(|m| m.level == level).collect()
    }

    /// Generate a plain-text summary, one diagnostic per line, followed by
    /// per-level counts.
    pub fn format(&self) -> String {
        let mut lines: Vec<String> = self.messages.iter().map(|m| m.to_string()).collect();
        lines.push(format!(
            "{} error(s), {} warning(s), {} info message(s)",
            self.errors().len(),
            self.warnings().len(),
            self.infos().len()
        ));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_keep_their_insertion_order() {
        let mut log = Diagnostics::new();
        let path = Path::from_keys(["job"]);
        log.warn(&path, "first");
        log.info(&path.key("inputs"), "second");
        log.error(&path.key("outputs").index(0), "third");

        let texts: Vec<&str> = log.messages().iter().map(|m| m.message.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(log.errors().len(), 1);
        assert_eq!(log.warnings().len(), 1);
        assert_eq!(log.infos().len(), 1);
        assert!(log.has_errors());
    }

    #[test]
    fn serializes_to_level_path_message_objects() {
        let mut log = Diagnostics::new();
        log.warn(&Path::from_keys(["preset", "p"]).key("audio"), "ignored");
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "level": "WARN",
                "path": ["preset", "p", "audio"],
                "message": "ignored"
            }])
        );
    }

    #[test]
    fn display_includes_path_when_present() {
        let mut log = Diagnostics::new();
        log.info(&Path::root(), "no path");
        log.error(&Path::from_keys(["job"]).key("outputs").index(1), "bad");
        assert_eq!(log.messages()[0].to_string(), "[INFO] no path");
        assert_eq!(log.messages()[1].to_string(), "[ERROR] job.outputs[1]: bad");
        assert!(log.format().ends_with("1 error(s), 0 warning(s), 1 info message(s)"));
    }
}
