/*
 * gobucket: classify the statements of Go functions
 *
 * Usage:
 *   gobucket --func main ./cmd
 *   gobucket --func Open,Close --func Flush --extract-assignments ./pkg ./internal
 *
 * Output formats:
 *   --format text    Human-readable output (default)
 *   --format json    JSON output
 *
 * Exit codes:
 *   0  success (functions that are not found are reported, not fatal)
 *   1  load, parse or configuration failure
 *   2  usage error (no function names given)
 */

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use gobucket_core::config::ToolConfig;
use gobucket_core::logging::{init_logging, LogFormat, LogLevel};
use gobucket_core::{
    extract_assignments, validate_names, BucketError, ClassificationReport, CorpusLoader,
    FunctionLocator, GoSyntaxProvider, ParseFunctionsUseCase,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Classify the statements of Go functions by kind
#[derive(Debug, Parser)]
#[command(name = "gobucket", version)]
struct Cli {
    /// Directories to search (recursively)
    #[arg(default_value = ".")]
    dirs: Vec<PathBuf>,

    /// Function names, comma separated; may be repeated
    #[arg(short = 'f', long = "func", value_name = "NAMES")]
    functions: Vec<String>,

    /// YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report where each function was found
    #[arg(short, long)]
    verbose: bool,

    /// Print assignment statements and drop them from the listing
    #[arg(long)]
    extract_assignments: bool,

    /// Keep files with syntax errors
    #[arg(long)]
    allow_malformed: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// error, warn, info, debug or trace
    #[arg(long, value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// text or json
    #[arg(long, value_parser = parse_log_format)]
    log_format: Option<LogFormat>,
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    LogLevel::parse(value).ok_or_else(|| format!("unknown log level '{}'", value))
}

fn parse_log_format(value: &str) -> Result<LogFormat, String> {
    LogFormat::parse(value).ok_or_else(|| format!("unknown log format '{}'", value))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            match err.downcast_ref::<BucketError>() {
                Some(bucket_err) if bucket_err.is_usage() => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => ToolConfig::from_yaml(path)
            .map_err(BucketError::from)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ToolConfig::default(),
    };
    config.verbose |= cli.verbose;
    config.loader.allow_malformed |= cli.allow_malformed;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }

    init_logging(config.logging.level, config.logging.format);

    // Usage errors end the run before any file is read
    let names = validate_names(&cli.functions)?;

    let provider = GoSyntaxProvider::new().allow_malformed(config.loader.allow_malformed);
    let loader = CorpusLoader::new(provider, config.loader.clone());
    let corpus = loader.load(&cli.dirs).context("loading Go sources")?;

    let use_case = ParseFunctionsUseCase::new(FunctionLocator::new().verbose(config.verbose));
    let results = use_case.execute(&corpus, &names)?;

    let mut reports = Vec::with_capacity(results.len());
    for result in results {
        let Some(parsed) = result.parsed else {
            match cli.format {
                OutputFormat::Text => println!("func {}: not found\n", result.name),
                OutputFormat::Json => reports.push(serde_json::json!({
                    "function": result.name,
                    "found": false,
                })),
            }
            continue;
        };

        let report = if cli.extract_assignments {
            let extraction = extract_assignments(parsed.classification);
            ClassificationReport::build(parsed.definition, &extraction.classification)
                .with_extracted(extraction.rendered)
        } else {
            ClassificationReport::build(parsed.definition, &parsed.classification)
        };

        match cli.format {
            OutputFormat::Text => println!("{}", report.render_text()),
            OutputFormat::Json => reports.push(serde_json::to_value(&report)?),
        }
    }

    if cli.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}
