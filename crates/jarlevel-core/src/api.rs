//! High-level public API for language-level validation.

use std::path::Path;

use crate::Javap;
use crate::LanguageLevel;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::ProgressUpdate;
use crate::Result;
use crate::ValidationConfig;
use crate::ValidationReport;
use crate::VersionExtractor;
use crate::archive::ResolvedArchive;
use crate::scan::ScannedEntry;
use crate::scan::scan_jar;

/// Validates an archive with the default configuration and `javap`.
///
/// # Errors
///
/// Returns an error if the archive is unsupported or unreadable, the
/// disassembler fails, or any class targets a different language level.
///
/// # Examples
///
/// ```no_run
/// use jarlevel_core::validate;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = validate("build/libs/lib.jar", "52")?;
/// println!("{} classes target level 52", report.classes_checked);
/// # Ok(())
/// # }
/// ```
pub fn validate<P: AsRef<Path>>(
    archive: P,
    expected: impl Into<LanguageLevel>,
) -> Result<ValidationReport> {
    let config = ValidationConfig::default();
    let javap = Javap::from_config(&config);
    validate_archive(
        archive.as_ref(),
        &expected.into(),
        &config,
        &javap,
        &mut NoopProgress,
    )
}

/// Validates an archive, failing if any class mismatches.
///
/// # Errors
///
/// Returns [`LevelError::LevelMismatch`](crate::LevelError::LevelMismatch)
/// listing every mismatched class, or the first error met while resolving,
/// scanning or disassembling.
pub fn validate_archive(
    archive: &Path,
    expected: &LanguageLevel,
    config: &ValidationConfig,
    extractor: &dyn VersionExtractor,
    progress: &mut dyn ProgressCallback,
) -> Result<ValidationReport> {
    check_archive(archive, expected, config, extractor, progress)?.into_result()
}

/// Checks every class of an archive and reports mismatches without failing
/// on them.
///
/// Processing is sequential and in archive order. The first resolution,
/// scan or disassembler error aborts the run. For `.aar` inputs the scratch
/// directory is removed on every exit path.
///
/// # Errors
///
/// Returns an error if the archive is unsupported or unreadable, or the
/// disassembler fails for any class.
pub fn check_archive(
    archive: &Path,
    expected: &LanguageLevel,
    config: &ValidationConfig,
    extractor: &dyn VersionExtractor,
    progress: &mut dyn ProgressCallback,
) -> Result<ValidationReport> {
    let resolved = ResolvedArchive::resolve(archive, config)?;
    match check_jar(&resolved, expected, config, extractor, progress) {
        Ok(report) => {
            resolved.close()?;
            Ok(report)
        }
        Err(e) => {
            resolved.discard();
            Err(e)
        }
    }
}

fn check_jar(
    resolved: &ResolvedArchive,
    expected: &LanguageLevel,
    config: &ValidationConfig,
    extractor: &dyn VersionExtractor,
    progress: &mut dyn ProgressCallback,
) -> Result<ValidationReport> {
    let jar = resolved.jar_path();
    let index = scan_jar(jar, config)?;

    let mut report = ValidationReport::new(resolved.source(), expected.clone());
    report.total_entries = index.len();

    for (i, entry) in index.entries.iter().enumerate() {
        progress.on_entry_start(&ProgressUpdate {
            jar,
            entry: entry.name(),
            current: i + 1,
            total: index.len(),
            expected,
            versions_seen: &report.versions_seen,
        });

        match entry {
            ScannedEntry::Class(class) => {
                let version = extractor.extract(jar, class.internal_name())?;
                tracing::debug!(class = class.name(), %version, "extracted major version");
                report.record(class.name(), version);
            }
            ScannedEntry::Skipped { .. } => report.entries_skipped += 1,
        }
    }

    progress.on_complete();
    tracing::info!(
        archive = %resolved.source().display(),
        classes = report.classes_checked,
        skipped = report.entries_skipped,
        invalid = report.invalid_entries.len(),
        "checked archive"
    );
    Ok(report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::LevelError;
    use crate::test_utils::FakeExtractor;
    use crate::test_utils::JarBuilder;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingProgress {
        updates: Vec<(usize, usize, String, Vec<String>)>,
        completed: bool,
    }

    impl ProgressCallback for RecordingProgress {
        fn on_entry_start(&mut self, update: &ProgressUpdate<'_>) {
            self.updates.push((
                update.current,
                update.total,
                update.entry.to_string(),
                update.versions_seen.iter().cloned().collect(),
            ));
        }

        fn on_complete(&mut self) {
            self.completed = true;
        }
    }

    fn sample_jar(dir: &Path) -> PathBuf {
        let jar = dir.join("lib.jar");
        JarBuilder::new()
            .add_directory("com/x/")
            .add_class("com/x/Y.class")
            .add_class("com/x/Z.class")
            .write_to(&jar);
        jar
    }

    #[test]
    fn test_check_reports_counts() {
        let temp = TempDir::new().unwrap();
        let jar = sample_jar(temp.path());
        let extractor = FakeExtractor::new("52").with_version("com/x/Z", "55");

        let report = check_archive(
            &jar,
            &LanguageLevel::new("52"),
            &ValidationConfig::default(),
            &extractor,
            &mut NoopProgress,
        )
        .unwrap();

        assert_eq!(report.total_entries, 3);
        assert_eq!(report.classes_checked, 2);
        assert_eq!(report.entries_skipped, 1);
        assert_eq!(report.invalid_entries.len(), 1);
        assert_eq!(report.invalid_entries[0].to_string(), "com/x/Z.class: 55");
    }

    #[test]
    fn test_progress_sees_every_entry() {
        let temp = TempDir::new().unwrap();
        let jar = sample_jar(temp.path());
        let extractor = FakeExtractor::new("52").with_version("com/x/Z", "55");
        let mut progress = RecordingProgress::default();

        check_archive(
            &jar,
            &LanguageLevel::new("52"),
            &ValidationConfig::default(),
            &extractor,
            &mut progress,
        )
        .unwrap();

        assert!(progress.completed);
        assert_eq!(
            progress.updates,
            vec![
                (1, 3, "com/x/".to_string(), vec![]),
                (2, 3, "com/x/Y.class".to_string(), vec![]),
                (3, 3, "com/x/Z.class".to_string(), vec!["52".to_string()]),
            ]
        );
    }

    #[test]
    fn test_validate_archive_mismatch() {
        let temp = TempDir::new().unwrap();
        let jar = sample_jar(temp.path());
        let extractor = FakeExtractor::new("52").with_version("com/x/Z", "55");

        let err = validate_archive(
            &jar,
            &LanguageLevel::new("52"),
            &ValidationConfig::default(),
            &extractor,
            &mut NoopProgress,
        )
        .unwrap_err();

        assert_eq!(
            err.invalid_entries().unwrap().to_vec(),
            vec![crate::InvalidEntry::new("com/x/Z.class", "55")]
        );
    }

    #[test]
    fn test_extractor_error_aborts_run() {
        let temp = TempDir::new().unwrap();
        let jar = sample_jar(temp.path());
        let extractor = FakeExtractor::new("52").with_output("com/x/Y", "no version here");

        let err = check_archive(
            &jar,
            &LanguageLevel::new("52"),
            &ValidationConfig::default(),
            &extractor,
            &mut NoopProgress,
        )
        .unwrap_err();

        assert!(matches!(err, LevelError::VersionParse { ref class, .. } if class == "com/x/Y"));
        assert_eq!(extractor.calls(), vec!["com/x/Y"]);
    }

    #[test]
    fn test_aar_scratch_removed_on_error() {
        let temp = TempDir::new().unwrap();
        let inner = JarBuilder::new().add_class("com/x/Y.class").build();
        let aar = temp.path().join("lib.aar");
        JarBuilder::new().add_file("classes.jar", &inner).write_to(&aar);

        let scratch_root = temp.path().join("scratch");
        std::fs::create_dir(&scratch_root).unwrap();
        let config = ValidationConfig::default().with_scratch_root(&scratch_root);
        let extractor = FakeExtractor::new("52").with_output("com/x/Y", "");

        let err = check_archive(
            &aar,
            &LanguageLevel::new("52"),
            &config,
            &extractor,
            &mut NoopProgress,
        )
        .unwrap_err();

        assert!(err.is_disassembler_error());
        assert_eq!(std::fs::read_dir(&scratch_root).unwrap().count(), 0);
    }

    #[test]
    fn test_unsupported_extension_skips_extractor() {
        let extractor = FakeExtractor::new("52");
        let err = validate_archive(
            Path::new("lib.zip"),
            &LanguageLevel::new("52"),
            &ValidationConfig::default(),
            &extractor,
            &mut NoopProgress,
        )
        .unwrap_err();

        assert!(err.is_usage_error());
        assert!(extractor.calls().is_empty());
    }
}
