mod debug_report;

use std::io::{self, IsTerminal, Read};

use jobfill::snapshot::SnapshotDocument;
use jobfill::{Profile, fill_fields_verbose};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let document = match load_document(config.form.as_deref()) {
        Ok(document) => document,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };
    let profile = match load_profile(config.profile.as_deref()) {
        Ok(profile) => profile,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    let report = fill_fields_verbose(&document, &profile);
    debug_report::print_run(&report, config.color);
}

struct CliConfig {
    form: Option<String>,
    profile: Option<String>,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut form: Option<String> = None;
    let mut profile: Option<String> = None;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("jobfill {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--form" | "-f" => {
                let value = args.next().ok_or_else(|| "error: --form expects a path".to_string())?;
                form = Some(value);
            }
            "--profile" | "-p" => {
                let value =
                    args.next().ok_or_else(|| "error: --profile expects a path".to_string())?;
                profile = Some(value);
            }
            _ if arg.starts_with("--form=") => {
                form = Some(arg.trim_start_matches("--form=").to_string());
            }
            _ if arg.starts_with("--profile=") => {
                profile = Some(arg.trim_start_matches("--profile=").to_string());
            }
            _ => {
                return Err(format!("error: unrecognized argument \"{arg}\" (try --help)"));
            }
        }
    }

    Ok(CliConfig { form, profile, color })
}

/// Load the form snapshot from a path, or from stdin when no path is given.
fn load_document(path: Option<&str>) -> Result<SnapshotDocument, String> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| format!("cannot read form snapshot {path}: {err}"))?,
        None => {
            if io::stdin().is_terminal() {
                return Err("no form snapshot: pass --form <path> or pipe JSON on stdin".to_string());
            }
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|err| format!("cannot read stdin: {err}"))?;
            buf
        }
    };
    SnapshotDocument::from_json(&json).map_err(|err| format!("invalid form snapshot: {err}"))
}

/// Load the profile JSON; with no path the pass dry-runs on an empty
/// profile (matched fields report "no saved value").
fn load_profile(path: Option<&str>) -> Result<Profile, String> {
    let Some(path) = path else {
        return Ok(Profile::default());
    };
    let json = std::fs::read_to_string(path)
        .map_err(|err| format!("cannot read profile {path}: {err}"))?;
    serde_json::from_str(&json).map_err(|err| format!("invalid profile: {err}"))
}

fn print_help() {
    println!(
        "jobfill {} - dry-run the form autofill engine against a document snapshot

Usage:
  jobfill --form <snapshot.json> [--profile <profile.json>] [options]
  cat snapshot.json | jobfill [--profile <profile.json>]

Options:
  -f, --form <path>      Document snapshot JSON (stdin when omitted)
  -p, --profile <path>   Profile JSON, camelCase keys (empty when omitted)
      --color            Force ANSI colors on
      --no-color         Force ANSI colors off
  -h, --help             Show this help
  -V, --version          Show version

Environment:
  RUST_LOG               tracing filter, e.g. RUST_LOG=jobfill=debug",
        env!("CARGO_PKG_VERSION")
    );
}
