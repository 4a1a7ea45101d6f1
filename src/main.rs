//! nlp-pipeline - run the text preprocessing pipeline from the command line
//!
//! Reads text from `--text`, `--file` or stdin and prints the results as JSON
//! on stdout. Logs go to stderr.

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use nlp_text_pipeline::{Options, Pipeline, PipelineConfig, ProcessRequest};

/// Text preprocessing pipeline
#[derive(Parser)]
#[command(name = "nlp-pipeline")]
#[command(author, version, about = "Text preprocessing pipeline", long_about = None)]
struct Cli {
    /// Text to process
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,

    /// Read the text from a file (stdin when neither --text nor --file is given)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Processing options, comma separated and repeatable (e.g. tokenization,tf)
    #[arg(short, long = "option", value_name = "NAME[,NAME...]")]
    options: Vec<String>,

    /// Run every stage
    #[arg(long)]
    full: bool,

    /// Extra stopword for this request (repeatable)
    #[arg(long = "stopword", value_name = "WORD")]
    stopwords: Vec<String>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Single-line JSON output
    #[arg(long)]
    compact: bool,
}

impl Cli {
    fn read_text(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            return fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()));
        }
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        Ok(text)
    }

    fn build_options(&self) -> Result<Options> {
        let mut options = Options::parse_list(&self.options.join(","))?;
        if self.full {
            options.full_preprocessing = true;
        }
        Ok(options)
    }
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    init_logging(&config.log_level);
    debug!(?config, "configuration loaded");

    let options = cli.build_options()?;
    let text = cli.read_text()?;
    let custom_stopwords = (!cli.stopwords.is_empty()).then(|| cli.stopwords.clone());
    let request = ProcessRequest {
        text,
        options,
        custom_stopwords,
    };

    let pipeline = Pipeline::from_config(&config);
    let results = pipeline.handle(&request)?;
    info!(stages = results.keys().len(), "request processed");

    let json = if cli.compact {
        serde_json::to_string(&results)?
    } else {
        serde_json::to_string_pretty(&results)?
    };
    println!("{json}");
    Ok(())
}
