//! Enumeration of class entries inside a jar.

use std::fs::File;
use std::path::Path;

use crate::LevelError;
use crate::Result;
use crate::ValidationConfig;

const CLASS_SUFFIX: &str = ".class";

/// A compiled class selected for validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassEntry {
    name: String,
}

impl ClassEntry {
    /// Classifies a raw archive entry.
    ///
    /// Returns the class entry, or the reason the entry is skipped.
    pub fn classify(
        name: &str,
        is_dir: bool,
        config: &ValidationConfig,
    ) -> std::result::Result<Self, SkipReason> {
        if is_dir {
            Err(SkipReason::Directory)
        } else if !name.ends_with(CLASS_SUFFIX) {
            Err(SkipReason::NotAClass)
        } else if config.is_ignored(name) {
            Err(SkipReason::Ignored)
        } else {
            Ok(Self {
                name: name.to_string(),
            })
        }
    }

    /// Entry name as stored in the archive, e.g. `com/x/Y.class`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Internal class name handed to the disassembler, e.g. `com/x/Y`.
    #[must_use]
    pub fn internal_name(&self) -> &str {
        self.name.strip_suffix(CLASS_SUFFIX).unwrap_or(&self.name)
    }
}

/// Why an archive entry is not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Directory entry.
    Directory,
    /// Regular file without a `.class` suffix.
    NotAClass,
    /// Class under an ignored prefix.
    Ignored,
}

/// One entry of a scanned jar, in stored order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScannedEntry {
    /// A class to validate.
    Class(ClassEntry),
    /// An entry that is passed over.
    Skipped {
        /// Entry name as stored in the archive.
        name: String,
        /// Why it is passed over.
        reason: SkipReason,
    },
}

impl ScannedEntry {
    /// Entry name as stored in the archive.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Class(class) => class.name(),
            Self::Skipped { name, .. } => name,
        }
    }

    /// Returns the class entry, if this entry is validated.
    #[must_use]
    pub const fn as_class(&self) -> Option<&ClassEntry> {
        match self {
            Self::Class(class) => Some(class),
            Self::Skipped { .. } => None,
        }
    }
}

/// Every entry of a jar, classified.
#[derive(Debug, Clone, Default)]
pub struct JarIndex {
    /// Entries in the archive's stored order.
    pub entries: Vec<ScannedEntry>,
}

impl JarIndex {
    /// Total number of entries, skipped ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the jar has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the classes to validate.
    pub fn classes(&self) -> impl Iterator<Item = &ClassEntry> {
        self.entries.iter().filter_map(ScannedEntry::as_class)
    }
}

/// Reads the central directory of `jar` and classifies every entry.
///
/// The file handle is released before returning.
///
/// # Errors
///
/// Returns an error if the jar cannot be opened or is not a valid zip file.
pub fn scan_jar(jar: &Path, config: &ValidationConfig) -> Result<JarIndex> {
    let file = File::open(jar)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| LevelError::InvalidArchive(format!("failed to open {}: {e}", jar.display())))?;

    let mut index = JarIndex {
        entries: Vec::with_capacity(archive.len()),
    };

    for i in 0..archive.len() {
        let entry = archive.by_index_raw(i).map_err(|e| {
            LevelError::InvalidArchive(format!("failed to read entry {i} of {}: {e}", jar.display()))
        })?;
        let name = entry.name();

        let scanned = match ClassEntry::classify(name, entry.is_dir(), config) {
            Ok(class) => ScannedEntry::Class(class),
            Err(reason) => {
                tracing::trace!(entry = name, ?reason, "skipping entry");
                ScannedEntry::Skipped {
                    name: name.to_string(),
                    reason,
                }
            }
        };
        index.entries.push(scanned);
    }

    Ok(index)
}
