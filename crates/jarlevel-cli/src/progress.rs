//! Progress line for validation runs.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressDrawTarget;
use indicatif::ProgressStyle;
use jarlevel_core::ProgressCallback;
use jarlevel_core::ProgressUpdate;
use std::collections::BTreeSet;

/// Single-line progress display implementing `ProgressCallback`.
///
/// Renders `Processing <jar> (<i> of <n>): Expected <level> - Found {..}`
/// and clears itself on drop.
pub struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    /// Creates a progress line drawn on stdout.
    #[must_use]
    pub fn new() -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stdout());
        bar.set_style(
            ProgressStyle::default_bar()
                .template("Processing {prefix} ({pos} of {len}): {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar }
    }

    /// Checks if we should show progress (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stdout().is_term()
    }
}

impl Default for CliProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressCallback for CliProgress {
    fn on_entry_start(&mut self, update: &ProgressUpdate<'_>) {
        if self.bar.length() != Some(update.total as u64) {
            self.bar.set_length(update.total as u64);
            self.bar.set_prefix(update.jar.display().to_string());
        }
        self.bar.set_position(update.current as u64);
        self.bar.set_message(status_message(
            update.expected.as_str(),
            update.versions_seen,
        ));
    }

    fn on_complete(&mut self) {
        self.bar.finish_and_clear();
    }
}

fn status_message(expected: &str, versions_seen: &BTreeSet<String>) -> String {
    let mut versions: Vec<&str> = versions_seen.iter().map(String::as_str).collect();
    // Numeric order, so 100 follows 52
    versions.sort_by_key(|v| (v.parse::<u64>().ok(), *v));
    let found = versions.join(", ");
    format!("Expected {expected} - Found {{{found}}}")
}
