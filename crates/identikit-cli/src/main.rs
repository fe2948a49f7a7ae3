use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use identikit_config::{config_json_schema, load_config, ConfigError, ProbabilityConfig};
use identikit_eval::{evaluate_dataset, load_dataset, render_report, EvalError};
use identikit_generate::{
    GenerateOptions, GenerationEngine, GenerationError, LocaleKey,
};

#[derive(Debug, Error)]
enum CliError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("eval error: {0}")]
    Eval(#[from] EvalError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("dataset verification failed with {0} violation(s)")]
    Violations(u64),
}

#[derive(Parser, Debug)]
#[command(name = "identikit", version, about = "Synthetic ID-card NER data generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a labeled dataset.
    Generate(GenerateArgs),
    /// Verify span offsets of an emitted dataset.
    Verify(VerifyArgs),
    /// Print the configuration JSON Schema.
    Schema,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Output JSON file path.
    #[arg(long, short = 'o')]
    output: PathBuf,
    /// Number of records to generate.
    #[arg(long, short = 'c', default_value_t = 100)]
    count: u64,
    /// Configuration file; built-in defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Noise preset (clean, light, medium, heavy); the configuration
    /// decides when omitted.
    #[arg(long)]
    noise_level: Option<String>,
    /// Comma-separated locale list.
    #[arg(long, default_value = "fr_FR,pt_BR,en_US")]
    locales: String,
    /// Use every supported locale.
    #[arg(long, default_value_t = false)]
    all_locales: bool,
    /// List supported locales and exit.
    #[arg(long, default_value_t = false)]
    list_locales: bool,
    /// Seed for reproducible output.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Args, Debug)]
struct VerifyArgs {
    /// Dataset file to verify.
    input: PathBuf,
    /// Maximum violation examples to print.
    #[arg(long, default_value_t = 20)]
    max_examples: usize,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Verify(args) => run_verify(args),
        Command::Schema => run_schema(),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    if args.list_locales {
        println!("Supported locales:");
        for locale in LocaleKey::ALL {
            println!("  {:8} - {}", locale.as_str(), locale.language_name());
        }
        return Ok(());
    }

    let locales = if args.all_locales {
        LocaleKey::ALL.to_vec()
    } else {
        parse_locales(&args.locales)?
    };

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ProbabilityConfig::default(),
    };

    let options = GenerateOptions {
        seed: args.seed,
        locales,
        noise_level: args.noise_level.clone(),
        ..GenerateOptions::default()
    };
    let engine = GenerationEngine::new(config, options)?;
    let result = engine.generate_batch(args.count)?;

    let file = File::create(&args.output)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &result.records)?;

    info!(
        records = result.report.records_generated,
        entities = result.report.entities_total,
        output = %args.output.display(),
        "dataset written"
    );
    println!(
        "Generated {} records ({} entities, {:.1} per record) to {}",
        result.report.records_generated,
        result.report.entities_total,
        if result.report.records_generated > 0 {
            result.report.entities_total as f64 / result.report.records_generated as f64
        } else {
            0.0
        },
        args.output.display()
    );
    Ok(())
}

fn run_verify(args: VerifyArgs) -> Result<(), CliError> {
    let records = load_dataset(&args.input)?;
    let (metrics, violations) = evaluate_dataset(&records);

    println!("{}", render_report(&metrics, &violations, args.max_examples));

    if metrics.violations > 0 {
        return Err(CliError::Violations(metrics.violations));
    }
    Ok(())
}

fn run_schema() -> Result<(), CliError> {
    let schema = config_json_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn parse_locales(raw: &str) -> Result<Vec<LocaleKey>, CliError> {
    let mut locales = Vec::new();
    let mut invalid = Vec::new();
    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        match LocaleKey::parse(entry) {
            Some(locale) => locales.push(locale),
            None => invalid.push(entry.to_string()),
        }
    }

    if !invalid.is_empty() {
        return Err(CliError::InvalidArgs(format!(
            "unknown locales: {} (use --list-locales)",
            invalid.join(", ")
        )));
    }
    if locales.is_empty() {
        return Err(CliError::InvalidArgs(
            "at least one locale is required".to_string(),
        ));
    }
    Ok(locales)
}
