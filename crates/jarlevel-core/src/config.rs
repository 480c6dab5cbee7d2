//! Validation configuration.

use std::path::PathBuf;

/// Disassembler invoked when none is configured.
pub const DEFAULT_DISASSEMBLER: &str = "javap";

/// Entry prefixes skipped by default.
///
/// These hold vendored, shaded dependencies that ship with their own
/// bytecode level and are not subject to the library's language level.
pub const DEFAULT_IGNORED_PREFIXES: [&str; 2] = ["dagger/spi/internal/shaded/", "dagger/grpc/shaded/"];

/// Configuration for a validation run.
///
/// # Examples
///
/// ```
/// use jarlevel_core::ValidationConfig;
///
/// let config = ValidationConfig::default()
///     .with_disassembler("/opt/jdk/bin/javap")
///     .with_ignored_prefix("com/example/shaded/");
///
/// assert!(config.is_ignored("com/example/shaded/Foo.class"));
/// assert!(config.is_ignored("dagger/grpc/shaded/Bar.class"));
/// assert!(!config.is_ignored("com/example/Foo.class"));
/// ```
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Disassembler executable, resolved through `PATH` when relative.
    ///
    /// Read only by [`Javap::from_config`](crate::Javap::from_config); the
    /// validation pipeline itself runs whichever extractor it is handed.
    pub disassembler: PathBuf,

    /// Entry name prefixes excluded from validation.
    pub ignored_prefixes: Vec<String>,

    /// Directory under which the scratch directory for `.aar` inputs is
    /// created. `None` uses the system temporary directory.
    pub scratch_root: Option<PathBuf>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            disassembler: PathBuf::from(DEFAULT_DISASSEMBLER),
            ignored_prefixes: DEFAULT_IGNORED_PREFIXES
                .iter()
                .map(ToString::to_string)
                .collect(),
            scratch_root: None,
        }
    }
}

impl ValidationConfig {
    /// Sets the disassembler executable.
    #[must_use]
    pub fn with_disassembler(mut self, program: impl Into<PathBuf>) -> Self {
        self.disassembler = program.into();
        self
    }

    /// Adds an ignored entry prefix on top of the existing ones.
    #[must_use]
    pub fn with_ignored_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.ignored_prefixes.push(prefix.into());
        self
    }

    /// Sets the directory that holds scratch directories.
    #[must_use]
    pub fn with_scratch_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.scratch_root = Some(root.into());
        self
    }

    /// Returns `true` if `name` starts with any ignored prefix.
    #[must_use]
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored_prefixes
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()))
    }
}
