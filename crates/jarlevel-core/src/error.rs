//! Error types for language-level validation.

use std::path::PathBuf;
use thiserror::Error;

use crate::report::InvalidEntry;

/// Result type alias using `LevelError`.
pub type Result<T> = std::result::Result<T, LevelError>;

/// Errors that can occur while validating an archive.
///
/// Every variant aborts the run: there is no per-entry recovery.
#[derive(Error, Debug)]
pub enum LevelError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is neither a `.jar` nor an `.aar` file.
    #[error("invalid jar file: {path}")]
    UnsupportedArchive {
        /// The rejected path.
        path: PathBuf,
    },

    /// The archive could not be read as a zip file.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// An Android archive without a nested `classes.jar`.
    #[error("no classes.jar entry in {path}")]
    MissingClassesJar {
        /// The aar that was inspected.
        path: PathBuf,
    },

    /// The disassembler could not be started.
    #[error("failed to run disassembler {program}: {source}")]
    DisassemblerSpawn {
        /// Program that was invoked.
        program: PathBuf,
        /// Underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// The disassembler ran but exited unsuccessfully.
    #[error("disassembler failed for {class} ({}): {stderr}", describe_exit(.code))]
    DisassemblerFailed {
        /// Internal name of the class being disassembled.
        class: String,
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// Disassembler output did not contain exactly one major version.
    #[error("expected exactly one major version for {class} but found: {matches:?}")]
    VersionParse {
        /// Internal name of the class being disassembled.
        class: String,
        /// Every version captured from the output.
        matches: Vec<String>,
    },

    /// One or more classes target a different language level.
    #[error(
        "found invalid entries in {} that do not match the expected java language level ({expected}):\n    {}",
        .archive.display(),
        join_entries(.entries)
    )]
    LevelMismatch {
        /// Archive path as given by the caller.
        archive: PathBuf,
        /// Expected language level.
        expected: String,
        /// Mismatched entries in archive order.
        entries: Vec<InvalidEntry>,
    },
}

impl LevelError {
    /// Returns `true` if the caller supplied unusable input.
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(self, Self::UnsupportedArchive { .. })
    }

    /// Returns `true` if the disassembler failed or produced unusable output.
    #[must_use]
    pub const fn is_disassembler_error(&self) -> bool {
        matches!(
            self,
            Self::DisassemblerSpawn { .. }
                | Self::DisassemblerFailed { .. }
                | Self::VersionParse { .. }
        )
    }

    /// Returns the mismatched entries if this is a validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use jarlevel_core::InvalidEntry;
    /// use jarlevel_core::LevelError;
    ///
    /// let err = LevelError::LevelMismatch {
    ///     archive: "lib.jar".into(),
    ///     expected: "52".to_string(),
    ///     entries: vec![InvalidEntry::new("com/x/Z.class", "55")],
    /// };
    /// assert_eq!(err.invalid_entries().map(<[_]>::len), Some(1));
    /// ```
    #[must_use]
    pub fn invalid_entries(&self) -> Option<&[InvalidEntry]> {
        match self {
            Self::LevelMismatch { entries, .. } => Some(entries),
            _ => None,
        }
    }
}

fn join_entries(entries: &[InvalidEntry]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n    ")
}

#[allow(clippy::ref_option)]
fn describe_exit(code: &Option<i32>) -> String {
    code.map_or_else(
        || "terminated by signal".to_string(),
        |code| format!("exit code {code}"),
    )
}
