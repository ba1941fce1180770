//! Error types for the widget crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while driving a widget.
///
/// Guarded preconditions that the site silently ignores (advancing the quiz
/// without a selection, for instance) are not errors; they are reported
/// through return values instead.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// The preference store could not be read or written.
    #[error("preference store I/O failed for {path}: {source}")]
    StoreIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The preference store file exists but is not a valid key-value document.
    #[error("preference store at {path} is corrupt: {source}")]
    StoreEncoding {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Site configuration could not be parsed.
    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Site configuration file could not be read.
    #[error("failed to read site configuration {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A question was defined with a correct index outside its choices.
    #[error("question '{prompt}' marks choice {index} as correct but only has {len} choices")]
    InvalidQuestion {
        prompt: String,
        index: usize,
        len: usize,
    },

    /// A quiz was built without any questions.
    #[error("a quiz needs at least one question")]
    EmptyQuestionBank,

    /// A stats carousel was built without any entries.
    #[error("a stats carousel needs at least one entry")]
    EmptyStats,

    /// A choice was selected while no question is on screen.
    #[error("the quiz is not in progress")]
    QuizNotInProgress,

    /// A choice was selected after the answer was already revealed.
    #[error("selection is locked until the next question is shown")]
    SelectionLocked,

    /// A choice index does not exist on the current question.
    #[error("choice {choice} is out of range for a question with {len} choices")]
    ChoiceOutOfRange { choice: usize, len: usize },
}

/// Result type for widget operations.
pub type Result<T> = std::result::Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_out_of_range_mentions_both_numbers() {
        let err = WidgetError::ChoiceOutOfRange { choice: 7, len: 4 };
        let msg = err.to_string();
        assert!(msg.contains('7'));
        assert!(msg.contains('4'));
    }

    #[test]
    fn store_io_keeps_source() {
        use std::error::Error as _;

        let err = WidgetError::StoreIo {
            path: PathBuf::from("/tmp/prefs.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("prefs.json"));
    }
}
