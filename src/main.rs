//! CLI for multilingual social-media sentiment analysis
//!
//! Usage:
//! ```bash
//! cargo run -- --help
//! cargo run -- analyze --text "I love this phone"
//! cargo run -- report --keyword phone
//! cargo run -- report --input items.json --json
//! cargo run -- interactive
//! ```

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use social_sentiment::{
    load_items, AuditLog, Config, ItemCollector, RecordUnifier, ReportAggregator,
    SentimentError, TextAnalysis,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Configuration file picked up from the working directory when present
const DEFAULT_CONFIG_PATH: &str = "social-sentiment.toml";

#[derive(Parser)]
#[command(name = "social-sentiment")]
#[command(version)]
#[command(about = "Sentiment analysis for English, Hindi and Tamil social-media text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (overrides the configuration)
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single text
    Analyze {
        /// Text to analyze
        #[arg(short, long)]
        text: String,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Aggregate items into a sentiment report
    Report {
        /// JSON file with items (built-in sample feed when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Keyword for the sample feed
        #[arg(short, long, default_value = "phone")]
        keyword: String,

        /// Maximum items per source
        #[arg(long, default_value = "200")]
        limit: usize,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Append processed records to this CSV audit log
        #[arg(long)]
        audit: Option<PathBuf>,
    },

    /// Analyze lines from stdin until `exit`
    Interactive,

    /// Run the sample feed end to end
    Demo,

    /// Write a default configuration file
    InitConfig {
        /// Output path
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, config_error) = load_config(cli.config.as_deref())?;

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    let log_level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Some(e) = config_error {
        warn!(
            "Using default configuration, {} not loaded: {}",
            DEFAULT_CONFIG_PATH, e
        );
    }

    match cli.command {
        Commands::Analyze { text, json } => run_analyze(&config, &text, json)?,
        Commands::Report {
            input,
            keyword,
            limit,
            json,
            audit,
        } => run_report(&config, input.as_deref(), &keyword, limit, json, audit)?,
        Commands::Interactive => run_interactive(&config)?,
        Commands::Demo => run_demo(&config)?,
        Commands::InitConfig { path } => {
            Config::default()
                .save(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Default configuration written to {}", path.display());
        }
    }

    Ok(())
}

/// Explicit `--config` must load; the working-directory file falls back to defaults
fn load_config(path: Option<&Path>) -> Result<(Config, Option<SentimentError>)> {
    match path {
        Some(path) => {
            let config = Config::load(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            Ok((config, None))
        }
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            Ok(Config::load_with_fallback(DEFAULT_CONFIG_PATH))
        }
        None => Ok((Config::default(), None)),
    }
}

fn print_analysis(analysis: &TextAnalysis) {
    println!("Cleaned:   {}", analysis.cleaned_text);
    println!("Language:  {}", analysis.language());
    println!("Sentiment: {}", analysis.sentiment());
    println!("Detection: {:?}", analysis.detection);
    println!("Verdict:   {:?}", analysis.verdict);
}

fn run_analyze(config: &Config, text: &str, json: bool) -> Result<()> {
    let unifier = RecordUnifier::from_config(config);
    let analysis = unifier.analyze_text(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_analysis(&analysis);
    }
    Ok(())
}

fn run_report(
    config: &Config,
    input: Option<&Path>,
    keyword: &str,
    limit: usize,
    json: bool,
    audit: Option<PathBuf>,
) -> Result<()> {
    let items = match input {
        Some(path) => load_items(path)
            .with_context(|| format!("Failed to read items from {}", path.display()))?,
        None => ItemCollector::with_samples().with_limit(limit).collect(keyword),
    };

    let unifier = RecordUnifier::from_config(config);
    let records = unifier.unify(&items);
    let report = ReportAggregator::from_config(&config.report).aggregate(&records);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    let audit_path = audit.or_else(|| config.audit.enabled.then(|| PathBuf::from(&config.audit.path)));
    if let Some(path) = audit_path {
        let run_id = Utc::now().format("%Y%m%dT%H%M%S").to_string();
        let written = AuditLog::open(&path)
            .append(&run_id, &records)
            .with_context(|| format!("Failed to append audit log {}", path.display()))?;
        info!("Audit: {} rows in {}", written, path.display());
    }

    Ok(())
}

fn run_interactive(config: &Config) -> Result<()> {
    let unifier = RecordUnifier::from_config(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("\nEnter text (or 'exit' to quit): ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim();
        if text.eq_ignore_ascii_case("exit") {
            break;
        }

        print_analysis(&unifier.analyze_text(text));
    }

    Ok(())
}

fn run_demo(config: &Config) -> Result<()> {
    println!("\nSocial Sentiment Demo\n");

    let samples = [
        "I love this product!! https://x.co",
        "यह बहुत बुरा है",
        "ठीक है",
        "இந்த படம் அருமை",
    ];

    let unifier = RecordUnifier::from_config(config);
    println!("1. SINGLE TEXTS");
    println!("───────────────");
    for text in samples {
        let analysis = unifier.analyze_text(text);
        println!(
            "   {:40} -> {:8} {}",
            text,
            analysis.language().as_str(),
            analysis.sentiment()
        );
    }

    println!("\n2. SAMPLE FEED");
    println!("──────────────");
    let items = ItemCollector::with_samples().collect("phone");
    let records = unifier.unify(&items);
    let report = ReportAggregator::from_config(&config.report).aggregate(&records);
    println!("{}", report);

    Ok(())
}
