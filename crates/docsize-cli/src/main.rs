//! Estimates the stored size of JSON documents.
//!
//! Usage: `docsize [--fields] [--validate] <file.json>...`
//!
//! A path of `-` reads standard input.

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use docsize::{IngestError, classify_json, estimate, field_sizes, validate_value};

// =============================================================================
// ARGUMENTS
// =============================================================================

#[derive(Debug)]
struct Args {
    fields: bool,
    validate: bool,
    paths: Vec<String>,
}

impl Args {
    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            fields: matches.get_flag("fields"),
            validate: matches.get_flag("validate"),
            paths: matches
                .get_many::<String>("paths")
                .map(|paths| paths.cloned().collect())
                .unwrap_or_default(),
        }
    }
}

fn command() -> Command {
    Command::new("docsize")
        .version(docsize::VERSION)
        .about("Estimates the stored size of JSON documents.")
        .arg(
            Arg::new("fields")
                .long("fields")
                .action(ArgAction::SetTrue)
                .help("Print the size of each top-level field"),
        )
        .arg(
            Arg::new("validate")
                .long("validate")
                .action(ArgAction::SetTrue)
                .help("Warn about timestamps and points a document store would reject"),
        )
        .arg(
            Arg::new("paths")
                .value_name("FILE")
                .num_args(1..)
                .required(true)
                .help("JSON files to estimate (`-` reads stdin)"),
        )
}

// =============================================================================
// REPORTING
// =============================================================================

fn read_input(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(path)
    }
}

fn report(path: &str, args: &Args) -> Result<(), String> {
    let text = read_input(path).map_err(|e| format!("{path}: {e}"))?;
    let json: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| format!("{path}: {}", IngestError::from(e)))?;
    let value = classify_json(&json).map_err(|e| format!("{path}: {e}"))?;

    println!("{path}: {} bytes", estimate(&value));

    if args.fields {
        for (key, size) in field_sizes(&value) {
            println!("  {key}: {size}");
        }
    }

    if args.validate {
        if let Err(e) = validate_value(&value) {
            println!("  warning: {e}");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::from_matches(&command().get_matches());

    let mut failed = false;
    for path in &args.paths {
        if let Err(msg) = report(path, &args) {
            eprintln!("error: {msg}");
            failed = true;
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    fn parse(list: &[&str]) -> Result<Args, clap::Error> {
        let argv = std::iter::once("docsize").chain(list.iter().copied());
        command().try_get_matches_from(argv).map(|m| Args::from_matches(&m))
    }

    #[test]
    fn test_command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn test_parse_flags_and_paths() {
        let parsed = parse(&["--fields", "a.json", "--validate", "-"]).unwrap();
        assert!(parsed.fields);
        assert!(parsed.validate);
        assert_eq!(parsed.paths, vec!["a.json", "-"]);
    }

    #[test]
    fn test_parse_defaults() {
        let parsed = parse(&["a.json"]).unwrap();
        assert!(!parsed.fields);
        assert!(!parsed.validate);
        assert_eq!(parsed.paths, vec!["a.json"]);
    }

    #[test]
    fn test_parse_requires_path() {
        let err = parse(&["--fields"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_option() {
        let err = parse(&["--bogus", "a.json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_report_missing_file() {
        let args = Args {
            fields: false,
            validate: false,
            paths: Vec::new(),
        };
        let err = report("/nonexistent/docsize-test.json", &args).unwrap_err();
        assert!(err.starts_with("/nonexistent/docsize-test.json: "));
    }
}
