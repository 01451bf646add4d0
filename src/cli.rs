/*!
 * Command line parsing.
 *
 * `parse_args` is a pure function from the argument tokens to a
 * [`CliCommand`]. clap does the tokenizing; the file list is then rebuilt in
 * command-line order from clap's argument indices, since `-s <us> <file>`
 * pairs and bare file names interleave.
 */

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser, ValueEnum};
use std::path::PathBuf;

use crate::app_config::{InputFile, LogLevel, MergeConfig};
use crate::errors::CliError;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

/// assmerge - merge ASS subtitle files
///
/// Merges several ASS subtitle files into one, written to standard output.
#[derive(Parser, Debug)]
#[command(name = "assmerge")]
#[command(version)]
#[command(about = "Merge ASS subtitle files into one")]
#[command(
    override_usage = "assmerge [-h] [-r] [-t TITLE] [-g MICROSECONDS] ([-s MICROSECONDS] FILE)..."
)]
#[command(args_override_self = true)]
#[command(long_about = "assmerge merges ASS subtitle files into a single document written to \
    standard output.

EXAMPLES:
    assmerge a.ass b.ass > both.ass                  # Merge two files
    assmerge -r a.ass b.ass > both.ass               # Rename styles so they cannot collide
    assmerge -g 2000000 a.ass b.ass                  # Delay every file by 2 seconds
    assmerge -g 1000 -s 5000 a.ass b.ass             # a.ass by 5000us, b.ass by 1000us
    assmerge -t \"Signs & Songs\" a.ass b.ass          # Set the merged title

Script Info metadata is taken from the first file only.")]
struct CliArgs {
    /// Rename styles to per-file digests so styles from different files never collide
    #[arg(short = 'r', action = ArgAction::SetTrue)]
    rename_styles: bool,

    /// Title of the merged document
    #[arg(short = 't', value_name = "TITLE", allow_hyphen_values = true)]
    title: Option<String>,

    /// Sync for files without -s, in microseconds (may be negative)
    #[arg(short = 'g', value_name = "MICROSECONDS", allow_hyphen_values = true)]
    global_sync: Option<String>,

    /// Sync for the following file only, in microseconds (may be negative)
    #[arg(
        short = 's',
        num_args = 2,
        value_names = ["MICROSECONDS", "FILE"],
        allow_hyphen_values = true,
        action = ArgAction::Append
    )]
    sync: Vec<String>,

    /// Set logging level
    #[arg(long = "log-level", value_enum, value_name = "LEVEL")]
    log_level: Option<CliLogLevel>,

    /// Subtitle files to merge, using the global sync
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

/// What the command line asks for
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Print this usage text to standard error and exit successfully
    Help(String),
    /// Print this version text and exit successfully
    Version(String),
    /// Run a merge
    Merge(MergeConfig),
}

/// Parse command line tokens (including the program name) into a command
pub fn parse_args<I, T>(tokens: I) -> Result<CliCommand, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = match CliArgs::command().try_get_matches_from(tokens) {
        Ok(matches) => matches,
        Err(err) => return classify_error(err),
    };
    let args = CliArgs::from_arg_matches(&matches).map_err(|e| CliError::Usage(e.to_string()))?;

    let mut ordered: Vec<(usize, InputFile)> = Vec::new();

    let file_indices = matches.indices_of("files").into_iter().flatten();
    for (path, index) in args.files.iter().zip(file_indices) {
        ordered.push((index, InputFile::new(path.clone())));
    }

    let sync_indices: Vec<usize> = matches.indices_of("sync").into_iter().flatten().collect();
    for (pair, indices) in args.sync.chunks(2).zip(sync_indices.chunks(2)) {
        if let [micros, file] = pair {
            let sync_us = parse_micros("-s", micros)?;
            ordered.push((indices[0], InputFile::with_sync(file, sync_us)));
        }
    }

    ordered.sort_by_key(|(index, _)| *index);
    if ordered.is_empty() {
        return Err(CliError::NoInputFiles);
    }

    let global_sync_us = match &args.global_sync {
        Some(value) => parse_micros("-g", value)?,
        None => 0,
    };

    Ok(CliCommand::Merge(MergeConfig {
        inputs: ordered.into_iter().map(|(_, input)| input).collect(),
        rename_styles: args.rename_styles,
        title: args.title,
        global_sync_us,
        log_level: args.log_level.map(LogLevel::from).unwrap_or_default(),
    }))
}

fn parse_micros(flag: &str, value: &str) -> Result<i64, CliError> {
    value.trim().parse::<i64>().map_err(|_| CliError::InvalidNumber {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

fn context_string(err: &clap::Error, kind: ContextKind) -> Option<String> {
    match err.get(kind) {
        Some(ContextValue::String(value)) => Some(value.clone()),
        _ => None,
    }
}

// @maps: clap errors onto this crate's error variants
fn classify_error(err: clap::Error) -> Result<CliCommand, CliError> {
    let flag = context_string(&err, ContextKind::InvalidArg).unwrap_or_default();

    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            Ok(CliCommand::Help(err.render().to_string()))
        }
        ErrorKind::DisplayVersion => Ok(CliCommand::Version(err.render().to_string())),
        ErrorKind::UnknownArgument => Err(CliError::UnknownFlag(flag)),
        ErrorKind::WrongNumberOfValues | ErrorKind::TooFewValues => {
            Err(CliError::MissingValue { flag })
        }
        ErrorKind::InvalidValue => {
            // clap reports a missing value as an empty invalid one
            match context_string(&err, ContextKind::InvalidValue) {
                Some(value) if !value.is_empty() => Err(CliError::Usage(err.render().to_string())),
                _ => Err(CliError::MissingValue { flag }),
            }
        }
        _ => Err(CliError::Usage(err.render().to_string())),
    }
}
