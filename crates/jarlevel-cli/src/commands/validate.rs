//! Validate command implementation.

use crate::cli::Cli;
use crate::error::add_archive_context;
use crate::progress::CliProgress;
use anyhow::Result;
use jarlevel_core::Javap;
use jarlevel_core::NoopProgress;
use jarlevel_core::ValidationConfig;
use jarlevel_core::validate_archive;

pub fn execute(cli: &Cli) -> Result<()> {
    let config = cli
        .ignore_prefixes
        .iter()
        .fold(
            ValidationConfig::default().with_disassembler(&cli.javap),
            |config, prefix| config.with_ignored_prefix(prefix),
        );
    let javap = Javap::from_config(&config);

    tracing::debug!(
        archive = %cli.archive.display(),
        expected = %cli.expected_level,
        javap = %javap.program().display(),
        "validating archive"
    );

    // Progress line only on a terminal, and never when quiet
    let report = if !cli.quiet && CliProgress::should_show() {
        let mut progress = CliProgress::new();
        add_archive_context(
            validate_archive(&cli.archive, &cli.expected_level, &config, &javap, &mut progress),
            &cli.archive,
        )?
    } else {
        add_archive_context(
            validate_archive(&cli.archive, &cli.expected_level, &config, &javap, &mut NoopProgress),
            &cli.archive,
        )?
    };

    tracing::debug!(
        classes = report.classes_checked,
        skipped = report.entries_skipped,
        "all classes match"
    );

    Ok(())
}
