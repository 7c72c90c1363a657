// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use plainmed::app_config::{Config, LogLevel};
use plainmed::pipeline::TranslationPipeline;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
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

fn level_filter(level: &LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for plainmed
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// plainmed - medical translation and plain-language pipeline
///
/// Translates a Spanish medical document into English through four AI stages:
/// a literal baseline, a technical translation, a plain-language
/// simplification, and a model-judged quality score.
#[derive(Parser, Debug)]
#[command(name = "plainmed")]
#[command(version = "0.1.0")]
#[command(about = "AI-assisted medical translation and plain-language pipeline")]
#[command(long_about = "plainmed translates Spanish medical documents into English and adapts \
them for lay readers using an LLM generation service.

EXAMPLES:
    plainmed report.txt                          # Translate using default config
    plainmed -m gpt-4o report.txt                # Use a specific model
    plainmed --temp-plain-language 1.2 report.txt
    plainmed -o result.txt report.txt            # Write the result to a file
    plainmed completions bash > plainmed.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different file with --config. If the config file doesn't exist, a default
    one will be created automatically. The API key can also be supplied via
    the OPENAI_API_KEY environment variable.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input text file (.txt, UTF-8) to translate
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Model name to use for all stages
    #[arg(short, long)]
    model: Option<String>,

    /// API key for the generation service
    #[arg(short, long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Temperature for the literal translator stage (0.0 to 2.0)
    #[arg(long, value_name = "TEMP")]
    temp_literal: Option<f32>,

    /// Temperature for the technical translator stage (0.0 to 2.0)
    #[arg(long, value_name = "TEMP")]
    temp_technical: Option<f32>,

    /// Temperature for the plain-language editor stage (0.0 to 2.0)
    #[arg(long, value_name = "TEMP")]
    temp_plain_language: Option<f32>,

    /// Temperature for the quality estimator stage (0.0 to 2.0)
    #[arg(long, value_name = "TEMP")]
    temp_quality: Option<f32>,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Custom logger writing timestamped, colored lines to stderr
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    fn color_code(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                Self::color_code(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default;
    // the level is updated after loading the config
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "plainmed", &mut std::io::stdout());
            Ok(())
        }
        None => run_translate(cli).await,
    }
}

async fn run_translate(options: CommandLineOptions) -> Result<()> {
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    let input_path = options
        .input_path
        .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

    // Load or create configuration, then apply CLI overrides
    let mut config = Config::load_or_create(&options.config_path)?;

    if let Some(model) = &options.model {
        config.model = model.clone();
    }
    if let Some(api_key) = &options.api_key {
        config.api_key = api_key.clone();
    }
    if let Some(temp) = options.temp_literal {
        config.temperatures.literal = temp;
    }
    if let Some(temp) = options.temp_technical {
        config.temperatures.technical = temp;
    }
    if let Some(temp) = options.temp_plain_language {
        config.temperatures.plain_language = temp;
    }
    if let Some(temp) = options.temp_quality {
        config.temperatures.quality = temp;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    log::set_max_level(level_filter(&config.log_level));

    config
        .validate()
        .context("Configuration validation failed")?;

    let is_txt = input_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("txt"))
        .unwrap_or(false);
    if !is_txt {
        warn!(
            "Input file {} does not have a .txt extension, reading it as plain text anyway",
            input_path.display()
        );
    }

    let source_text = fs::read_to_string(&input_path)
        .context(format!("Failed to read input file: {}", input_path.display()))?;

    info!(
        "Translating {} ({} chars) with model {}",
        input_path.display(),
        source_text.chars().count(),
        config.model
    );

    // One spinner for the whole run; the progress callback relabels it as
    // the pipeline moves through its stages
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));

    let spinner_handle = spinner.clone();
    let pipeline = TranslationPipeline::from_config(config).with_progress_callback(Box::new(
        move |progress| {
            if !progress.state.is_terminal() {
                spinner_handle.set_message(format!(
                    "[{}/{}] {}",
                    progress.stages_completed + 1,
                    progress.total_stages,
                    progress.status
                ));
            }
        },
    ));

    let result = pipeline.run(&source_text).await;
    spinner.finish_and_clear();

    let result = result?;
    info!("{}", result.summary());

    let report = format!(
        "=== Literal translation ===\n{}\n\n\
         === Technical translation ===\n{}\n\n\
         === Plain-language version ===\n{}\n\n\
         === Quality score ===\n{}\n",
        result.literal_translation,
        result.technical_translation,
        result.simplified_translation,
        result.quality_score
    );

    match options.output {
        Some(path) => {
            fs::write(&path, &report)
                .context(format!("Failed to write output file: {}", path.display()))?;
            info!("Result written to {}", path.display());
        }
        None => {
            print!("{}", report);
        }
    }

    Ok(())
}
