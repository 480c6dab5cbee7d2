//! Archive kind detection and resolution of the jar to scan.
//!
//! A `.jar` is scanned in place. An `.aar` carries its classes in a nested
//! `classes.jar`, which is extracted into a scratch directory owned by
//! [`ResolvedArchive`] and removed when the value is dropped or closed.

use std::fs::File;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::LevelError;
use crate::Result;
use crate::ValidationConfig;

/// Name of the jar nested inside an Android archive.
pub const CLASSES_JAR: &str = "classes.jar";

/// Supported archive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    /// Java archive, scanned directly.
    Jar,
    /// Android archive wrapping a `classes.jar`.
    Aar,
}

impl ArchiveKind {
    /// Detects the archive kind from the file name.
    ///
    /// Only the name is inspected; the file does not need to exist.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::UnsupportedArchive`] if the name ends in neither
    /// `.jar` nor `.aar`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jarlevel_core::ArchiveKind;
    ///
    /// assert_eq!(ArchiveKind::detect("lib.jar".as_ref()).ok(), Some(ArchiveKind::Jar));
    /// assert_eq!(ArchiveKind::detect("lib.aar".as_ref()).ok(), Some(ArchiveKind::Aar));
    /// assert!(ArchiveKind::detect("lib.zip".as_ref()).is_err());
    /// ```
    pub fn detect(path: &Path) -> Result<Self> {
        let name = path.to_string_lossy();
        if name.ends_with(".jar") {
            Ok(Self::Jar)
        } else if name.ends_with(".aar") {
            Ok(Self::Aar)
        } else {
            Err(LevelError::UnsupportedArchive {
                path: path.to_path_buf(),
            })
        }
    }
}

/// The jar selected for scanning, plus the scratch directory backing it.
#[derive(Debug)]
pub struct ResolvedArchive {
    kind: ArchiveKind,
    source: PathBuf,
    jar: PathBuf,
    scratch: Option<TempDir>,
}

impl ResolvedArchive {
    /// Resolves `path` to a scannable jar.
    ///
    /// For an `.aar`, `classes.jar` is extracted into a fresh scratch
    /// directory. If extraction fails the directory is removed before the
    /// error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is unsupported, the aar cannot be
    /// read as a zip file, or it has no `classes.jar` entry.
    pub fn resolve(path: &Path, config: &ValidationConfig) -> Result<Self> {
        match ArchiveKind::detect(path)? {
            ArchiveKind::Jar => Ok(Self {
                kind: ArchiveKind::Jar,
                source: path.to_path_buf(),
                jar: path.to_path_buf(),
                scratch: None,
            }),
            ArchiveKind::Aar => {
                let scratch = create_scratch_dir(config)?;
                let jar = extract_classes_jar(path, scratch.path())?;
                tracing::info!(
                    aar = %path.display(),
                    jar = %jar.display(),
                    "extracted classes.jar from android archive"
                );
                Ok(Self {
                    kind: ArchiveKind::Aar,
                    source: path.to_path_buf(),
                    jar,
                    scratch: Some(scratch),
                })
            }
        }
    }

    /// Kind of the original input.
    #[must_use]
    pub const fn kind(&self) -> ArchiveKind {
        self.kind
    }

    /// Path the caller supplied.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Path of the jar to scan.
    #[must_use]
    pub fn jar_path(&self) -> &Path {
        &self.jar
    }

    /// Scratch directory holding the extracted jar, for `.aar` inputs.
    #[must_use]
    pub fn scratch_dir(&self) -> Option<&Path> {
        self.scratch.as_ref().map(TempDir::path)
    }

    /// Removes the scratch directory, reporting failures.
    ///
    /// Dropping the value also removes it, but silently.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the scratch directory cannot be deleted.
    pub fn close(self) -> Result<()> {
        if let Some(scratch) = self.scratch {
            let path = scratch.path().to_path_buf();
            scratch.close()?;
            tracing::debug!(scratch = %path.display(), "removed scratch directory");
        }
        Ok(())
    }

    /// Removes the scratch directory on a failure path.
    ///
    /// A deletion error is logged as a warning instead of being returned, so
    /// the caller can propagate its own error.
    pub fn discard(self) {
        let Some(scratch) = self.scratch else {
            return;
        };
        let path = scratch.path().to_path_buf();
        match scratch.close() {
            Ok(()) => tracing::debug!(scratch = %path.display(), "removed scratch directory"),
            Err(e) => tracing::warn!(
                scratch = %path.display(),
                error = %e,
                "failed to remove scratch directory"
            ),
        }
    }
}

fn create_scratch_dir(config: &ValidationConfig) -> Result<TempDir> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("jarlevel-");
    let dir = match &config.scratch_root {
        Some(root) => builder.tempdir_in(root)?,
        None => builder.tempdir()?,
    };
    Ok(dir)
}

fn extract_classes_jar(aar: &Path, dest: &Path) -> Result<PathBuf> {
    let file = File::open(aar)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| LevelError::InvalidArchive(format!("failed to open {}: {e}", aar.display())))?;

    let mut entry = match archive.by_name(CLASSES_JAR) {
        Ok(entry) => entry,
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(LevelError::MissingClassesJar {
                path: aar.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(LevelError::InvalidArchive(format!(
                "failed to read {CLASSES_JAR} from {}: {e}",
                aar.display()
            )));
        }
    };

    let jar = dest.join(CLASSES_JAR);
    let mut out = File::create(&jar)?;
    io::copy(&mut entry, &mut out)?;
    Ok(jar)
}
