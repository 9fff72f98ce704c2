//! CLI argument definitions for the typed CSV decoder.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use typed_csv_core::{CsvConfig, Schema};

#[derive(Parser)]
#[command(
    name = "typed-csv",
    version,
    about = "Decode CSV rows into typed records",
    long_about = "Decode a CSV file row by row into strongly-typed records.\n\n\
                  Every row must have exactly one cell per declared column type.\n\
                  Decoding stops at the first malformed row and reports its\n\
                  row and column."
)]
pub struct Cli {
    #[command(flatten)]
    pub decode: DecodeArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct DecodeArgs {
    /// Path to the CSV file to decode.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Number of leading rows to skip.
    #[arg(value_name = "SKIP", default_value_t = 0)]
    pub skip: usize,

    /// Column delimiter.
    #[arg(value_name = "COLUMN_DELIMITER", default_value = ",", value_parser = parse_symbol)]
    pub column_delimiter: char,

    /// Row delimiter (escapes such as \n, \r and \t are accepted).
    #[arg(value_name = "ROW_DELIMITER", default_value = "\\n", value_parser = parse_symbol)]
    pub row_delimiter: char,

    /// Escape symbol that toggles literal column delimiters.
    #[arg(value_name = "ESCAPE", default_value = "\"", value_parser = parse_symbol)]
    pub escape_symbol: char,

    /// Comma-separated column types (string, int, float, bool).
    #[arg(long = "columns", value_name = "TYPES", default_value = "string,int,string")]
    pub columns: Schema,

    /// Record output format.
    #[arg(long = "output", value_enum, default_value = "text")]
    pub output: OutputFormatArg,
}

impl DecodeArgs {
    /// Session configuration from the positional arguments.
    pub fn csv_config(&self) -> CsvConfig {
        CsvConfig::default()
            .with_row_skip_offset(self.skip)
            .with_column_delimiter(self.column_delimiter)
            .with_row_delimiter(self.row_delimiter)
            .with_escape_symbol(self.escape_symbol)
    }
}

/// Parse a delimiter argument: one character or a backslash escape.
pub fn parse_symbol(raw: &str) -> Result<char, String> {
    match raw {
        "\\n" => return Ok('\n'),
        "\\r" => return Ok('\r'),
        "\\t" => return Ok('\t'),
        "\\\\" => return Ok('\\'),
        _ => {}
    }
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(format!("expected a single character, got '{raw}'")),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Fields joined by ", ".
    Text,
    /// One JSON array per record.
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
