//! SLC CLI library
//!
//! This module contains the core CLI logic for the SLC scene tool:
//! checking SLC files and creating new ones from the starter template.

pub mod error_adapter;

mod args;
mod config;
mod error;
mod report;

pub use args::{Args, CheckArgs, Command, NewArgs};
pub use config::{AppConfig, CheckConfig, OutputConfig, OutputFormat};
pub use error::SlcError;

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::{info, warn};

use slc_core::template;

use error_adapter::DiagnosticAdapter;
use report::CheckReport;

/// Run the SLC CLI application
///
/// Loads the configuration and dispatches to the selected subcommand,
/// writing results to standard output.
///
/// # Errors
///
/// Returns `SlcError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - JSON serialization errors
/// - An existing file in the way of `slc new`
pub fn run(args: &Args) -> Result<(), SlcError> {
    let app_config = config::load_config(args.config.as_ref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &args.command {
        Command::Check(check_args) => check(check_args, &app_config, &mut out),
        Command::New(new_args) => {
            let path = create(new_args)?;
            writeln!(out, "Created {}", path.display())?;
            Ok(())
        }
    }
}

/// Parse and validate one SLC file, writing the result to `out`.
///
/// In text mode the document summary goes to `out` and lint warnings are
/// logged; in JSON mode a single report holding the document (or error) and
/// the warnings goes to `out`.
///
/// # Errors
///
/// Returns [`SlcError::Parse`] when the file is not a valid document, after
/// the output has been written.
pub fn check(args: &CheckArgs, config: &AppConfig, out: &mut impl Write) -> Result<(), SlcError> {
    info!(input_path = args.input; "Checking file");

    let source = fs::read_to_string(&args.input)?;

    let enforce_filename = config.check.enforce_filename && !args.no_filename_check;
    let result = slc_parser::parse(&source, enforce_filename.then_some(args.input.as_str()));
    let warnings = if config.check.lint {
        slc_parser::lint(&source)
    } else {
        Vec::new()
    };

    match args.format.unwrap_or(config.output.format) {
        OutputFormat::Json => {
            CheckReport::new(&args.input, result.as_ref(), &warnings).write_json(out)?;
        }
        OutputFormat::Text => {
            for warning in &warnings {
                let rendered = error_adapter::render(&DiagnosticAdapter::new(warning, &source));
                warn!("{}:{}\n{rendered}", args.input, warning.position());
            }
            if let Ok(document) = &result {
                report::write_summary(document, out)?;
            }
        }
    }

    match result {
        Ok(document) => {
            info!(list_name = document.list_name(), shapes = document.len(); "File is valid");
            Ok(())
        }
        Err(diagnostic) => Err(SlcError::new_parse_error(diagnostic, source)),
    }
}

/// Create `<dir>/<Name>.slc` from the starter template.
///
/// The generated document is parsed before anything is written, so an
/// invalid list name is reported like any other naming error.
///
/// # Errors
///
/// Returns [`SlcError::AlreadyExists`] instead of overwriting a file, and
/// [`SlcError::Parse`] when `name` is not a valid list name.
pub fn create(args: &NewArgs) -> Result<PathBuf, SlcError> {
    let path = Path::new(&args.dir).join(format!("{}.{}", args.name, template::EXTENSION));
    let content = template::new_document(&args.name);

    if let Err(diagnostic) = slc_parser::parse(&content, path.to_str()) {
        return Err(SlcError::new_parse_error(diagnostic, content));
    }

    fs::create_dir_all(&args.dir)?;
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|err| match err.kind() {
            io::ErrorKind::AlreadyExists => SlcError::AlreadyExists(path.clone()),
            _ => SlcError::Io(err),
        })?;
    file.write_all(content.as_bytes())?;

    info!(path = path.display().to_string(); "Created new document");
    Ok(path)
}
