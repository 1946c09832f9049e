//! CLI argument definitions for `icm`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use icm_cli::config::SeparatorOverrides;
use icm_cli::input::MAX_ARGS;
use icm_report::OutputMode;
use icm_validate::PatternKind;

#[derive(Parser)]
#[command(
    name = "icm",
    version,
    about = "Validate or generate intermodal container markings",
    long_about = "Validate or generate intermodal container markings.\n\n\
                  Separators, pattern and output defaults are read from config.toml,\n\
                  which is created on first use. Set ICM_HOME to relocate the\n\
                  configuration and the data directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate intermodal container markings.
    ///
    /// A single line is printed as annotated fancy output, multiple lines
    /// as CSV, e.g. `icm generate --count 1000 | icm validate`.
    Validate(ValidateArgs),

    /// Generate container numbers with valid check digits.
    Generate(GenerateArgs),

    /// Download the owner registry and write it as CSV.
    #[command(alias = "update")]
    DownloadOwners(DownloadOwnersArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Marking to validate, joined by spaces; lines are read from stdin when omitted.
    #[arg(value_name = "MARKING", num_args = 0..=MAX_ARGS)]
    pub input: Vec<String>,

    /// Pattern to match: auto, container-number, owner,
    /// owner-equipment-category or size-type.
    #[arg(short = 'p', long = "pattern", value_name = "PATTERN")]
    pub pattern: Option<PatternKind>,

    /// Output: auto (fancy for a single line, csv otherwise), fancy or csv.
    #[arg(long = "output", value_name = "OUTPUT")]
    pub output: Option<OutputMode>,

    /// Omit the header of CSV output.
    #[arg(long = "no-header")]
    pub no_header: bool,

    #[command(flatten)]
    pub separators: SeparatorArgs,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Number of container numbers to generate.
    #[arg(short = 'c', long = "count", default_value_t = 1)]
    pub count: usize,

    /// Use this owner code instead of random registered ones.
    #[arg(long = "owner", value_name = "CODE")]
    pub owner: Option<String>,

    /// First serial number of a sequence.
    #[arg(long = "start", value_name = "SERIAL")]
    pub start: Option<u32>,

    /// Last serial number of a sequence; with --start the count is ignored.
    #[arg(long = "end", value_name = "SERIAL")]
    pub end: Option<u32>,

    /// Skip serial numbers whose check digit calculates to 10.
    #[arg(long = "exclude-check-digit-10")]
    pub exclude_check_digit_10: bool,

    /// Skip container numbers with possible transposition errors.
    #[arg(long = "exclude-transposition-errors")]
    pub exclude_transposition_errors: bool,

    #[command(flatten)]
    pub separators: SeparatorArgs,
}

#[derive(Parser)]
pub struct DownloadOwnersArgs {
    /// URL of the owner list (semicolon separated code;company;city;country).
    #[arg(long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Output file (default: owner.csv in the data directory).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct SeparatorArgs {
    /// ABC(x)U1234560   20G1  (x) separates owner code and equipment category id.
    #[arg(long = "sep-owner-equip", value_name = "SEP", allow_hyphen_values = true)]
    pub owner_equip: Option<String>,

    /// ABCU(x)1234560   20G1  (x) separates equipment category id and serial number.
    #[arg(long = "sep-equip-serial", value_name = "SEP", allow_hyphen_values = true)]
    pub equip_serial: Option<String>,

    /// ABCU123456(x)0   20G1  (x) separates serial number and check digit.
    #[arg(long = "sep-serial-check", value_name = "SEP", allow_hyphen_values = true)]
    pub serial_check: Option<String>,

    /// ABCU1234560 (x)  20G1  (x) separates check digit and size.
    #[arg(long = "sep-check-size", value_name = "SEP", allow_hyphen_values = true)]
    pub check_size: Option<String>,

    /// ABCU1234560   20(x)G1  (x) separates size and type.
    #[arg(long = "sep-size-type", value_name = "SEP", allow_hyphen_values = true)]
    pub size_type: Option<String>,
}

impl SeparatorArgs {
    pub fn overrides(&self) -> SeparatorOverrides {
        SeparatorOverrides {
            owner_equip: self.owner_equip.clone(),
            equip_serial: self.equip_serial.clone(),
            serial_check: self.serial_check.clone(),
            check_size: self.check_size.clone(),
            size_type: self.size_type.clone(),
        }
    }
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_validate_accepts_at_most_six_args() {
        let parsed = Cli::try_parse_from(["icm", "validate", "a", "b", "c", "d", "e", "f"]);
        assert!(parsed.is_ok());
        let parsed = Cli::try_parse_from(["icm", "validate", "a", "b", "c", "d", "e", "f", "g"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_update_alias() {
        let cli = Cli::try_parse_from(["icm", "update", "--url", "http://localhost/owners"])
            .unwrap();
        assert!(matches!(cli.command, Command::DownloadOwners(_)));
    }

    #[test]
    fn test_pattern_and_empty_separator() {
        let cli = Cli::try_parse_from([
            "icm",
            "validate",
            "--pattern",
            "size-type",
            "--sep-owner-equip",
            "",
            "20G1",
        ])
        .unwrap();
        let Command::Validate(args) = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(args.pattern, Some(PatternKind::SizeType));
        assert_eq!(args.separators.owner_equip.as_deref(), Some(""));
        assert_eq!(args.input, ["20G1"]);
    }

    #[test]
    fn test_unknown_output_is_rejected() {
        assert!(Cli::try_parse_from(["icm", "validate", "--output", "xml"]).is_err());
    }
}
