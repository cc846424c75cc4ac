//! Command-line interface for mdhtml
//! Converts a markdown file to HTML, or dumps one of the intermediate stages.
//!
//! Usage:
//!   mdhtml `<path>` [--output `<file>`] [--stdout] [--format `<format>`] [--config `<file>`]
//!   mdhtml --list-formats                      - List all available formats
//!
//! On a syntax error nothing is written, the diagnostic goes to stderr and the
//! exit status is non-zero.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use mdhtml::processor::{process_file, OutputFormat, ProcessingError};
use mdhtml::settings::{Loader, Settings};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Picked up from the working directory when --config is not given
const LOCAL_CONFIG: &str = "mdhtml.toml";

/// Errors surfaced to the user. Display is the whole diagnostic after "error: ".
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Processing(#[from] ProcessingError),

    #[error("cannot write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn main() -> ExitCode {
    init_logging();

    let matches = build_cli().get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return ExitCode::SUCCESS;
    }

    let path = matches
        .get_one::<PathBuf>("path")
        .expect("path is required unless listing formats");

    match handle_convert_command(path, &matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn build_cli() -> Command {
    Command::new("mdhtml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert markdown files to HTML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the markdown file")
                .value_parser(value_parser!(PathBuf))
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("File to write (default: output.html, or output.path from the config)")
                .value_parser(value_parser!(PathBuf))
                .conflicts_with("stdout"),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Print the result instead of writing a file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (see --list-formats)")
                .value_parser(|s: &str| s.parse::<OutputFormat>()),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults (default: ./mdhtml.toml if present)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .help("How many italic/bold spans may be open at once")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
}

/// Logs go to stderr so they never mix with --stdout output
fn init_logging() {
    let filter = EnvFilter::try_from_env("MDHTML_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_settings(matches: &ArgMatches) -> Result<Settings, CliError> {
    let mut loader = Loader::new();
    loader = match matches.get_one::<PathBuf>("config") {
        Some(config_path) => loader.with_file(config_path),
        None => loader.with_optional_file(LOCAL_CONFIG),
    };
    if let Some(depth) = matches.get_one::<u32>("max-depth") {
        loader = loader.set_override("parser.max_nesting_depth", i64::from(*depth))?;
    }
    Ok(loader.build()?)
}

/// Handle the default convert command
fn handle_convert_command(path: &Path, matches: &ArgMatches) -> Result<(), CliError> {
    let settings = load_settings(matches)?;
    let format = matches
        .get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or(settings.output.format);

    // Render everything before touching the output so a failure leaves no partial file
    let output = process_file(path, format, &settings.parser)?;

    if matches.get_flag("stdout") {
        print!("{}", output);
        return Ok(());
    }

    let target = matches
        .get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or(settings.output.path);
    fs::write(&target, &output).map_err(|source| CliError::Write {
        path: target.clone(),
        source,
    })?;

    tracing::info!(path = %target.display(), bytes = output.len(), %format, "wrote output");
    Ok(())
}

/// Handle the --list-formats flag
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for format in OutputFormat::all() {
        println!("  {}", format.name());
        println!("    {}", format.description());
        println!();
    }
}
