//! Implementations of `validate`, `generate` and `download-owners`.

use std::io::{Read, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use icm_model::{
    Generator, GeneratorOptions, OwnerCode, OwnerLookup, Separators, SerialNumber, SerialRange,
};
use icm_report::{CsvPrinter, FancyPrinter, OutputMode, Palette, Printer};
use icm_standards::{
    AppDirs, HttpOwnerSource, OwnerSource, Tables, TimestampGate, load_tables, update_owner_file,
};
use icm_validate::{FieldSet, Lookups, Pattern, PatternKind, select_pattern};
use rand::Rng;
use tracing::{debug, info, info_span};

use crate::config::Config;
use crate::input::PeekedInput;

/// Indent of fancy output.
pub const FANCY_INDENT: &str = "  ";

/// Directories and configuration shared by all commands.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub dirs: AppDirs,
    pub config: Config,
}

impl AppContext {
    /// Create the directories and load the configuration, writing the
    /// default one on first use.
    pub fn load(dirs: AppDirs) -> Result<Self> {
        dirs.create().context("create application directories")?;
        let config = Config::load_or_init(&dirs.config_file())?;
        Ok(Self { dirs, config })
    }

    pub fn lookups(&self) -> Result<Lookups> {
        let tables = load_tables(&self.dirs.data_dir)
            .with_context(|| format!("load tables from {}", self.dirs.data_dir.display()))?;
        Ok(lookups_from_tables(tables))
    }
}

pub fn lookups_from_tables(tables: Tables) -> Lookups {
    Lookups {
        owners: Arc::new(tables.owners),
        categories: Arc::new(tables.categories),
        sizes: Arc::new(tables.sizes),
        types: Arc::new(tables.types),
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    pub pattern: PatternKind,
    pub output: OutputMode,
    pub no_header: bool,
    pub separators: Separators,
    /// Colorize fancy output.
    pub color: bool,
}

/// Validate each line of `input` and print its result right away.
///
/// The pattern is selected once from the first line. Returns whether the
/// last line had a field error.
pub fn run_validate<R: Read, W: Write>(
    input: PeekedInput<R>,
    writer: W,
    lookups: &Lookups,
    options: &ValidateOptions,
) -> Result<bool> {
    let fields = FieldSet::new(lookups, &options.separators);
    let patterns = fields.patterns(options.pattern);
    let pattern = select_pattern(&input.first_line(), &patterns)
        .ok_or_else(|| anyhow!("no pattern available for {}", options.pattern))?;
    let output = options.output.resolve(input.is_single_line());
    let span = info_span!("validate", pattern = pattern.name(), output = %output);
    let _guard = span.enter();

    match output {
        OutputMode::Csv => {
            let mut printer = CsvPrinter::new(writer);
            if options.no_header {
                printer = printer.without_header();
            }
            validate_lines(input, pattern, &mut printer)
        }
        OutputMode::Auto | OutputMode::Fancy => {
            let mut printer = FancyPrinter::new(writer)
                .with_indent(FANCY_INDENT)
                .with_separators(options.separators.clone())
                .with_palette(Palette::new(options.color));
            validate_lines(input, pattern, &mut printer)
        }
    }
}

fn validate_lines<R: Read>(
    input: PeekedInput<R>,
    pattern: &Pattern,
    printer: &mut impl Printer,
) -> Result<bool> {
    let mut last_failed = false;
    let mut count = 0usize;
    for line in input.lines() {
        let line = line.context("read input")?;
        let result = pattern.validate(&line);
        printer.print(&result).context("write output")?;
        last_failed = !result.is_valid();
        count += 1;
    }
    debug!(lines = count, last_failed, "validated input");
    Ok(last_failed)
}

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub count: usize,
    pub owner: Option<String>,
    pub start: Option<u32>,
    pub end: Option<u32>,
    pub exclude_check_digit_10: bool,
    pub exclude_transposition_errors: bool,
    pub separators: Separators,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            count: 1,
            owner: None,
            start: None,
            end: None,
            exclude_check_digit_10: false,
            exclude_transposition_errors: false,
            separators: Separators::default(),
        }
    }
}

fn serial(value: u32, flag: &str) -> Result<SerialNumber> {
    SerialNumber::new(value).with_context(|| format!("invalid {flag}"))
}

/// Serial number strategy for the `--start` and `--end` flags.
pub fn serial_range(start: Option<u32>, end: Option<u32>) -> Result<SerialRange> {
    Ok(match (start, end) {
        (None, None) => SerialRange::Random,
        (Some(start), None) => SerialRange::From(serial(start, "--start")?),
        (None, Some(end)) => SerialRange::Until(serial(end, "--end")?),
        (Some(start), Some(end)) => {
            SerialRange::Between(serial(start, "--start")?, serial(end, "--end")?)
        }
    })
}

/// Write generated container numbers, one per line.
///
/// Returns the number of lines written.
pub fn run_generate<R: Rng, W: Write>(
    rng: R,
    owners: &dyn OwnerLookup,
    options: &GenerateOptions,
    mut writer: W,
) -> Result<usize> {
    let owner = options
        .owner
        .as_deref()
        .map(OwnerCode::new)
        .transpose()
        .context("invalid --owner")?;
    let generator_options = GeneratorOptions {
        count: options.count,
        owner,
        range: serial_range(options.start, options.end)?,
        exclude_check_digit_10: options.exclude_check_digit_10,
        exclude_transposition_errors: options.exclude_transposition_errors,
    };
    let generator = Generator::new(rng, owners.owner_codes(), generator_options)?;

    let mut written = 0;
    for number in generator {
        writeln!(writer, "{}", number.format_with(&options.separators))
            .context("write output")?;
        written += 1;
    }
    writer.flush().context("write output")?;
    debug!(count = written, "generated container numbers");
    Ok(written)
}

/// HTTP source for `url`, falling back to the configured one.
pub fn owner_source(url: Option<&str>, config: &Config) -> Result<HttpOwnerSource> {
    let url = url.or(config.owner_url.as_deref()).ok_or_else(|| {
        anyhow!("no owner URL, pass --url or set owner-url in the config file")
    })?;
    Ok(HttpOwnerSource::new(url)?)
}

/// Download the owner registry into `output`, rate limited by the
/// timestamp file in `data_dir`.
pub fn run_download_owners(
    source: &dyn OwnerSource,
    data_dir: &Path,
    output: &Path,
    now: DateTime<Utc>,
) -> Result<usize> {
    let mut gate = TimestampGate::open(data_dir)?;
    debug!(last_update = %gate.last_update(), "checking download timestamp");
    let count = update_owner_file(source, &mut gate, now, output)?;
    info!(count, path = %output.display(), "downloaded owners");
    Ok(count)
}
