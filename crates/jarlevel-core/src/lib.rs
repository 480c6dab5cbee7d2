//! Bytecode language-level validation for jar and aar archives.
//!
//! `jarlevel-core` checks that every compiled class in a Java archive (or in
//! the `classes.jar` nested in an Android archive) declares one expected
//! bytecode major version. Versions are read through an external
//! disassembler (`javap` by default).
//!
//! # Examples
//!
//! ```no_run
//! use jarlevel_core::Javap;
//! use jarlevel_core::LanguageLevel;
//! use jarlevel_core::NoopProgress;
//! use jarlevel_core::ValidationConfig;
//! use jarlevel_core::validate_archive;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ValidationConfig::default();
//! let javap = Javap::from_config(&config);
//! let report = validate_archive(
//!     Path::new("lib.aar"),
//!     &LanguageLevel::new("52"),
//!     &config,
//!     &javap,
//!     &mut NoopProgress,
//! )?;
//! println!("{} classes checked", report.classes_checked);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod archive;
pub mod config;
pub mod disassembler;
pub mod error;
pub mod level;
pub mod report;
pub mod scan;

#[doc(hidden)]
pub mod test_utils;

// Re-export main API types
pub use api::check_archive;
pub use api::validate;
pub use api::validate_archive;
pub use archive::ArchiveKind;
pub use archive::ResolvedArchive;
pub use config::ValidationConfig;
pub use disassembler::Javap;
pub use disassembler::VersionExtractor;
pub use disassembler::parse_major_version;
pub use error::LevelError;
pub use error::Result;
pub use level::LanguageLevel;
pub use report::InvalidEntry;
pub use report::NoopProgress;
pub use report::ProgressCallback;
pub use report::ProgressUpdate;
pub use report::ValidationReport;
pub use scan::ClassEntry;
pub use scan::SkipReason;
