//! Validation reporting and progress callbacks.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use crate::LanguageLevel;
use crate::LevelError;
use crate::Result;

/// A class whose major version differs from the expected level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEntry {
    /// Entry name as stored in the archive.
    pub name: String,
    /// Major version the class declares.
    pub version: String,
}

impl InvalidEntry {
    /// Creates a record for a mismatched class.
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for InvalidEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.version)
    }
}

/// Outcome of checking one archive.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Archive path as supplied by the caller.
    pub archive: PathBuf,

    /// Level every class was compared against.
    pub expected: LanguageLevel,

    /// Number of entries in the scanned jar, skipped ones included.
    pub total_entries: usize,

    /// Number of classes handed to the disassembler.
    pub classes_checked: usize,

    /// Number of entries passed over (directories, non-class files and
    /// ignored prefixes).
    pub entries_skipped: usize,

    /// Distinct versions seen, in ascending string order.
    pub versions_seen: BTreeSet<String>,

    /// Mismatched classes in archive order.
    pub invalid_entries: Vec<InvalidEntry>,
}

impl ValidationReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new(archive: &Path, expected: LanguageLevel) -> Self {
        Self {
            archive: archive.to_path_buf(),
            expected,
            total_entries: 0,
            classes_checked: 0,
            entries_skipped: 0,
            versions_seen: BTreeSet::new(),
            invalid_entries: Vec::new(),
        }
    }

    /// Records the version extracted for `name`.
    pub fn record(&mut self, name: &str, version: String) {
        self.classes_checked += 1;
        if !self.expected.matches(&version) {
            self.invalid_entries.push(InvalidEntry::new(name, version.clone()));
        }
        self.versions_seen.insert(version);
    }

    /// Returns `true` if no class mismatched.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.invalid_entries.is_empty()
    }

    /// Turns a report with mismatches into [`LevelError::LevelMismatch`].
    ///
    /// # Errors
    ///
    /// Returns an error listing every mismatched entry.
    pub fn into_result(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(LevelError::LevelMismatch {
                archive: self.archive,
                expected: self.expected.to_string(),
                entries: self.invalid_entries,
            })
        }
    }
}

/// State of a run, passed to [`ProgressCallback::on_entry_start`].
#[derive(Debug, Clone, Copy)]
pub struct ProgressUpdate<'a> {
    /// Jar being scanned.
    pub jar: &'a Path,
    /// Entry about to be processed.
    pub entry: &'a str,
    /// Current entry number (1-indexed).
    pub current: usize,
    /// Total number of entries in the jar.
    pub total: usize,
    /// Level being checked for.
    pub expected: &'a LanguageLevel,
    /// Distinct versions seen before this entry.
    pub versions_seen: &'a BTreeSet<String>,
}

/// Callback trait for progress reporting during validation.
///
/// # Examples
///
/// ```
/// use jarlevel_core::ProgressCallback;
/// use jarlevel_core::ProgressUpdate;
///
/// struct PrintProgress;
///
/// impl ProgressCallback for PrintProgress {
///     fn on_entry_start(&mut self, update: &ProgressUpdate<'_>) {
///         println!("{} of {}: {}", update.current, update.total, update.entry);
///     }
///
///     fn on_complete(&mut self) {}
/// }
/// ```
pub trait ProgressCallback: Send {
    /// Called before each entry is processed, skipped entries included.
    fn on_entry_start(&mut self, update: &ProgressUpdate<'_>);

    /// Called once every entry has been processed.
    fn on_complete(&mut self);
}

/// No-op implementation of `ProgressCallback`.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _update: &ProgressUpdate<'_>) {}

    fn on_complete(&mut self) {}
}
