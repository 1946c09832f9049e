//! `icm`: validate or generate intermodal container markings.

use std::io::{self, BufWriter, IsTerminal};

use anyhow::Result;
use chrono::Utc;
use clap::{ColorChoice, Parser};
use icm_cli::commands::{
    AppContext, GenerateOptions, ValidateOptions, owner_source, run_download_owners,
    run_generate, run_validate,
};
use icm_cli::input::PeekedInput;
use icm_cli::logging::{LogConfig, LogFormat, init_logging};
use icm_standards::AppDirs;
use icm_standards::owners::OWNER_FILENAME;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("icm: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("icm: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<i32> {
    let context = AppContext::load(AppDirs::discover()?)?;
    let config = &context.config;
    match &cli.command {
        Command::Validate(args) => {
            let lookups = context.lookups()?;
            let options = ValidateOptions {
                pattern: args.pattern.unwrap_or(config.pattern),
                output: args.output.unwrap_or(config.output),
                no_header: args.no_header || config.no_header,
                separators: config.separators(&args.separators.overrides()),
                color: stdout_colors(cli.color.color),
            };
            colored::control::set_override(options.color);
            let writer = BufWriter::new(io::stdout().lock());
            let failed = if args.input.is_empty() {
                run_validate(PeekedInput::new(io::stdin().lock())?, writer, &lookups, &options)?
            } else {
                run_validate(PeekedInput::from_args(&args.input), writer, &lookups, &options)?
            };
            Ok(if failed { 1 } else { 0 })
        }
        Command::Generate(args) => {
            let lookups = context.lookups()?;
            let options = GenerateOptions {
                count: args.count,
                owner: args.owner.clone(),
                start: args.start,
                end: args.end,
                exclude_check_digit_10: args.exclude_check_digit_10,
                exclude_transposition_errors: args.exclude_transposition_errors,
                separators: config.separators(&args.separators.overrides()),
            };
            let writer = BufWriter::new(io::stdout().lock());
            run_generate(rand::thread_rng(), lookups.owners.as_ref(), &options, writer)?;
            Ok(0)
        }
        Command::DownloadOwners(args) => {
            let source = owner_source(args.url.as_deref(), config)?;
            let output = args
                .output
                .clone()
                .unwrap_or_else(|| context.dirs.data_dir.join(OWNER_FILENAME));
            run_download_owners(&source, &context.dirs.data_dir, &output, Utc::now())?;
            Ok(0)
        }
    }
}

/// Whether fancy output on stdout is colorized.
fn stdout_colors(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal(),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
