//! Test utilities for building jars and faking the disassembler.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Cursor;
use std::io::Write;
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::write::ZipWriter;

use crate::LevelError;
use crate::Result;
use crate::VersionExtractor;
use crate::parse_major_version;

/// Class file header (`CAFEBABE`, minor 0, major 52) used as entry content.
const CLASS_HEADER: [u8; 8] = [0xCA, 0xFE, 0xBA, 0xBE, 0x00, 0x00, 0x00, 0x34];

/// Builder for in-memory jar (and aar) archives.
///
/// # Examples
///
/// ```
/// use jarlevel_core::test_utils::JarBuilder;
///
/// let jar = JarBuilder::new()
///     .add_directory("com/x/")
///     .add_class("com/x/Y.class")
///     .build();
/// assert!(!jar.is_empty());
/// ```
pub struct JarBuilder {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl JarBuilder {
    /// Creates an empty archive builder. Entries are deflated, as in jars
    /// produced by build tools.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            options: SimpleFileOptions::default()
                .compression_method(zip::CompressionMethod::Deflated)
                .unix_permissions(0o644),
        }
    }

    /// Adds a directory entry.
    #[must_use]
    pub fn add_directory(mut self, name: &str) -> Self {
        self.zip.add_directory(name, self.options).unwrap();
        self
    }

    /// Adds a file entry with the given content.
    #[must_use]
    pub fn add_file(mut self, name: &str, data: &[u8]) -> Self {
        self.zip.start_file(name, self.options).unwrap();
        self.zip.write_all(data).unwrap();
        self
    }

    /// Adds a class entry holding a class file header.
    #[must_use]
    pub fn add_class(self, name: &str) -> Self {
        self.add_file(name, &CLASS_HEADER)
    }

    /// Finishes the archive and returns its bytes.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.zip.finish().unwrap().into_inner()
    }

    /// Finishes the archive and writes it to `path`.
    pub fn write_to(self, path: &Path) {
        std::fs::write(path, self.build()).unwrap();
    }
}

impl Default for JarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Disassembler stand-in answering from a table.
///
/// Classes without an entry report the default version. Every call is
/// recorded in order.
pub struct FakeExtractor {
    default_version: String,
    outputs: HashMap<String, String>,
    calls: RefCell<Vec<String>>,
}

impl FakeExtractor {
    /// Creates an extractor reporting `default_version` for every class.
    #[must_use]
    pub fn new(default_version: &str) -> Self {
        Self {
            default_version: default_version.to_string(),
            outputs: HashMap::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Reports `version` for the internal name `class`.
    #[must_use]
    pub fn with_version(self, class: &str, version: &str) -> Self {
        self.with_output(class, &format!("  major version: {version}\n"))
    }

    /// Uses `output` as the raw disassembler text for `class`.
    #[must_use]
    pub fn with_output(mut self, class: &str, output: &str) -> Self {
        self.outputs.insert(class.to_string(), output.to_string());
        self
    }

    /// Internal names requested so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl VersionExtractor for FakeExtractor {
    fn extract(&self, _jar: &Path, class: &str) -> Result<String> {
        self.calls.borrow_mut().push(class.to_string());
        let output = self.outputs.get(class).cloned().unwrap_or_else(|| {
            format!("  minor version: 0\n  major version: {}\n", self.default_version)
        });
        parse_major_version(&output).map_err(|matches| LevelError::VersionParse {
            class: class.to_string(),
            matches,
        })
    }
}
