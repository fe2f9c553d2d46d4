//! recognize - command-line interface for the hosted Recognize OCR service.
//!
//! Reads an image, submits it for recognition, and prints the result as
//! plain text or JSON. Configuration comes from an explicit `--config` file,
//! a discovered `recognize.toml`, or built-in defaults; command-line flags
//! always win.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use recognize::{RecognizeClient, RecognizeConfig};

#[derive(Debug, Parser)]
#[command(
    name = "recognize",
    version,
    about = "Recognize text (including LaTeX math) in images via the hosted Recognize service"
)]
struct Cli {
    /// Path to the image file to recognize
    image: PathBuf,

    /// Type of OCR to perform ("format" returns LaTeX for math)
    #[arg(long, value_name = "TYPE")]
    ocr_type: Option<String>,

    /// Bounding-box hint for the recognition region
    #[arg(long, value_name = "BOX")]
    ocr_box: Option<String>,

    /// Color hint for the recognition region
    #[arg(long, value_name = "COLOR")]
    ocr_color: Option<String>,

    /// Also request a rendered HTML view (visible with --format json)
    #[arg(long)]
    render: bool,

    /// Recognition endpoint URL
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Config file (TOML or JSON); when omitted, recognize.toml is discovered
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing(verbosity: u8) {
    let default_directive = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve configuration: file (explicit or discovered), then flag overrides.
fn load_config(cli: &Cli) -> anyhow::Result<RecognizeConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let is_json = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("json"));
            let loaded = if is_json {
                RecognizeConfig::from_json_file(path)
            } else {
                RecognizeConfig::from_toml_file(path)
            };
            loaded.with_context(|| format!("failed to load config from {}", path.display()))?
        }
        None => RecognizeConfig::discover()
            .context("config discovery failed")?
            .unwrap_or_default(),
    };

    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(ocr_type) = &cli.ocr_type {
        config.options.ocr_type = ocr_type.clone();
    }
    if let Some(ocr_box) = &cli.ocr_box {
        config.options.ocr_box = ocr_box.clone();
    }
    if let Some(ocr_color) = &cli.ocr_color {
        config.options.ocr_color = ocr_color.clone();
    }
    if cli.render {
        config.options.render = true;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    tracing::debug!(endpoint = %config.endpoint, timeout_secs = config.timeout_secs, "resolved configuration");

    let client = RecognizeClient::with_config(&config)?;
    let result = client
        .recognize_file(&cli.image, &config.options)
        .await
        .with_context(|| format!("recognition of {} failed", cli.image.display()))?;

    match cli.format {
        OutputFormat::Text => println!("{}", result.text),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(())
}
