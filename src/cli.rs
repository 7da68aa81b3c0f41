use std::path::PathBuf;

use crate::check::check_dataset;
use crate::data::dataset::default_data_path;
use crate::populate::populate_to;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Populate,
    Check,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("populate") => Some(Command::Populate),
        Some("check") => Some(Command::Check),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Populate) => handle_populate(args),
        Some(Command::Check) => handle_check(args),
        None => {
            eprintln!("usage: tarot-data <populate [path] [output]|check [path]>");
            2
        }
    }
}

/// Dataset path from the argument after the command, else the default location.
pub fn data_path_arg(raw: Option<&String>) -> PathBuf {
    raw.map(PathBuf::from).unwrap_or_else(default_data_path)
}

// Failures are reported as text by the populator; the exit status stays 0.
fn handle_populate(args: &[String]) -> i32 {
    let path = data_path_arg(args.get(2));
    let output = args.get(3).map(PathBuf::from).unwrap_or_else(|| path.clone());
    populate_to(&path, &output);
    0
}

fn handle_check(args: &[String]) -> i32 {
    let path = data_path_arg(args.get(2));
    let report = match check_dataset(&path) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("check failed for '{}': {err}", path.display());
            return 1;
        }
    };

    match serde_json::to_string_pretty(&report) {
        Ok(payload) => println!("{payload}"),
        Err(err) => {
            eprintln!("failed to serialize check report: {err}");
            return 1;
        }
    }

    if report.is_complete() {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_command_recognises_known_commands() {
        assert_eq!(parse_command(&args(&["tarot-data", "populate"])), Some(Command::Populate));
        assert_eq!(parse_command(&args(&["tarot-data", "check", "x.json"])), Some(Command::Check));
        assert_eq!(parse_command(&args(&["tarot-data", "serve"])), None);
        assert_eq!(parse_command(&args(&["tarot-data"])), None);
    }

    #[test]
    fn data_path_arg_prefers_explicit_path() {
        let explicit = "fixtures/cards.json".to_string();
        assert_eq!(data_path_arg(Some(&explicit)), PathBuf::from("fixtures/cards.json"));
    }

    #[test]
    fn unknown_command_returns_usage_code() {
        assert_eq!(run_with_args(&args(&["tarot-data", "shuffle"])), 2);
    }
}
