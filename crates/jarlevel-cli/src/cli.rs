//! CLI argument parsing using clap.

use clap::Parser;
use jarlevel_core::LanguageLevel;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jarlevel")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Every class in the archive must declare exactly the expected major version \
                  (for example 52 for Java 8). Versions are read with javap."
)]
pub struct Cli {
    /// Jar or aar file to validate
    #[arg(value_name = "JAR_OR_AAR")]
    pub archive: PathBuf,

    /// Expected bytecode major version, compared verbatim (e.g. 52)
    #[arg(value_name = "LANGUAGE_LEVEL")]
    pub expected_level: LanguageLevel,

    /// Disassembler executable used to read class versions
    #[arg(long, value_name = "PATH", env = "JARLEVEL_JAVAP", default_value = "javap")]
    pub javap: PathBuf,

    /// Additional entry prefix to skip (can be repeated)
    #[arg(long = "ignore-prefix", value_name = "PREFIX")]
    pub ignore_prefixes: Vec<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the progress line
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_two_positionals() {
        let cli = Cli::try_parse_from(["jarlevel", "lib.jar", "52"]).unwrap();
        assert_eq!(cli.archive, PathBuf::from("lib.jar"));
        assert_eq!(cli.expected_level, LanguageLevel::new("52"));
        assert!(cli.ignore_prefixes.is_empty());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_extra_positional_rejected() {
        let result = Cli::try_parse_from(["jarlevel", "lib.jar", "52", "55"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_level_rejected() {
        let result = Cli::try_parse_from(["jarlevel", "lib.jar"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "jarlevel",
            "--javap",
            "/opt/jdk/bin/javap",
            "--ignore-prefix",
            "a/shaded/",
            "--ignore-prefix",
            "b/shaded/",
            "-q",
            "lib.aar",
            "61",
        ])
        .unwrap();
        assert_eq!(cli.javap, PathBuf::from("/opt/jdk/bin/javap"));
        assert_eq!(cli.ignore_prefixes, vec!["a/shaded/", "b/shaded/"]);
        assert!(cli.quiet);
        assert_eq!(cli.expected_level.as_str(), "61");
    }
}
