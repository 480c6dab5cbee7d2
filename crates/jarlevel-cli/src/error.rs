//! Error conversion utilities for CLI.
//!
//! Converts jarlevel-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use jarlevel_core::LevelError;
use std::path::Path;

/// Converts `LevelError` to user-friendly anyhow error with context
pub fn convert_level_error(err: LevelError, archive: &Path) -> anyhow::Error {
    match err {
        LevelError::UnsupportedArchive { path } => {
            anyhow!(
                "Invalid jar file: {}\n\
                 HINT: Pass a .jar or .aar file.",
                path.display()
            )
        }
        LevelError::MissingClassesJar { path } => {
            anyhow!(
                "Android archive '{}' has no classes.jar entry\n\
                 HINT: The aar may be corrupted or contain resources only.",
                path.display()
            )
        }
        LevelError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: The archive may be corrupted or malformed.",
                archive.display(),
                reason
            )
        }
        LevelError::DisassemblerSpawn { program, source } => {
            anyhow!(
                "Failed to run disassembler '{}': {}\n\
                 HINT: Install a JDK and put javap on PATH, or use --javap / JARLEVEL_JAVAP.",
                program.display(),
                source
            )
        }
        err @ (LevelError::DisassemblerFailed { .. } | LevelError::VersionParse { .. }) => {
            anyhow::Error::from(err).context(format!(
                "Could not read class versions from '{}'",
                archive.display()
            ))
        }
        LevelError::Io(io_err) => {
            anyhow!(
                "I/O error while processing '{}': {}",
                archive.display(),
                io_err
            )
        }
        err @ LevelError::LevelMismatch { .. } => anyhow::Error::from(err),
    }
}

/// Adds context to a validation result
pub fn add_archive_context<T>(
    result: Result<T, LevelError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_level_error(e, archive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jarlevel_core::InvalidEntry;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_convert_unsupported_archive() {
        let err = LevelError::UnsupportedArchive {
            path: PathBuf::from("lib.zip"),
        };
        let converted = convert_level_error(err, Path::new("lib.zip"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("Invalid jar file: lib.zip"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_spawn_error() {
        let err = LevelError::DisassemblerSpawn {
            program: PathBuf::from("javap"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let msg = format!("{:?}", convert_level_error(err, Path::new("lib.jar")));
        assert!(msg.contains("Failed to run disassembler 'javap'"));
        assert!(msg.contains("--javap"));
    }

    #[test]
    fn test_convert_version_parse_keeps_cause() {
        let err = LevelError::VersionParse {
            class: "com/x/Y".to_string(),
            matches: Vec::new(),
        };
        let msg = format!("{:?}", convert_level_error(err, Path::new("lib.jar")));
        assert!(msg.contains("Could not read class versions from 'lib.jar'"));
        assert!(msg.contains("com/x/Y"));
    }

    #[test]
    fn test_convert_mismatch_is_verbatim() {
        let err = LevelError::LevelMismatch {
            archive: PathBuf::from("lib.jar"),
            expected: "52".to_string(),
            entries: vec![InvalidEntry::new("com/x/Z.class", "55")],
        };
        let expected = err.to_string();
        let converted = convert_level_error(err, Path::new("lib.jar"));
        assert_eq!(converted.to_string(), expected);
    }

    #[test]
    fn test_convert_io_error() {
        let err = LevelError::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        let msg = format!("{:?}", convert_level_error(err, Path::new("lib.jar")));
        assert!(msg.contains("I/O error"));
    }
}
