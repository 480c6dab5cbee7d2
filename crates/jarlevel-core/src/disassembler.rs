//! Adapter around the external bytecode disassembler.
//!
//! The disassembler's text output is the only source of class versions. All
//! knowledge of that output format is confined to [`parse_major_version`].

use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use std::sync::LazyLock;

use regex::Regex;

use crate::LevelError;
use crate::Result;
use crate::ValidationConfig;

#[allow(clippy::expect_used)]
static MAJOR_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"major version: (\d+)").expect("major version pattern is valid"));

/// Extracts the declared major version of one class.
pub trait VersionExtractor {
    /// Returns the major version of `class` (an internal name such as
    /// `com/x/Y`) found on the classpath `jar`.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be determined.
    fn extract(&self, jar: &Path, class: &str) -> Result<String>;
}

/// `javap`-compatible disassembler invoked as
/// `<program> -cp <jar> -v <class>`.
#[derive(Debug, Clone)]
pub struct Javap {
    program: PathBuf,
}

impl Javap {
    /// Creates an extractor running `program`.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Creates an extractor running the disassembler named by `config`.
    #[must_use]
    pub fn from_config(config: &ValidationConfig) -> Self {
        Self::new(config.disassembler.clone())
    }

    /// Program that is invoked.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for Javap {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DISASSEMBLER)
    }
}

impl VersionExtractor for Javap {
    fn extract(&self, jar: &Path, class: &str) -> Result<String> {
        let output = Command::new(&self.program)
            .arg("-cp")
            .arg(jar)
            .arg("-v")
            .arg(class)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| LevelError::DisassemblerSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(LevelError::DisassemblerFailed {
                class: class.to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_major_version(&stdout).map_err(|matches| LevelError::VersionParse {
            class: class.to_string(),
            matches,
        })
    }
}

/// Finds the single `major version: N` declaration in disassembler output.
///
/// On failure, returns every version that was captured (none, or more than
/// one).
///
/// # Examples
///
/// ```
/// use jarlevel_core::parse_major_version;
///
/// let output = "  minor version: 0\n  major version: 52\n  flags: (0x0021)";
/// assert_eq!(parse_major_version(output), Ok("52".to_string()));
/// assert_eq!(parse_major_version("no header"), Err(vec![]));
/// ```
pub fn parse_major_version(output: &str) -> std::result::Result<String, Vec<String>> {
    let mut matches: Vec<String> = MAJOR_VERSION
        .captures_iter(output)
        .map(|caps| caps[1].to_string())
        .collect();

    if matches.len() == 1 {
        Ok(matches.remove(0))
    } else {
        Err(matches)
    }
}
