//! # sema-cli
//!
//! Command-line interface for the sema intent engine: loads the model
//! bundle, runs the pipeline, and prints the predicted intent.

#![deny(unsafe_code)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sema_intent::{BundlePaths, IntentError, IntentPipeline, PipelineConfig};
use sema_settings::SemaSettings;

/// sema — on-device intent prediction.
#[derive(Parser, Debug)]
#[command(name = "sema", about = "On-device intent prediction")]
struct Cli {
    /// Bundle directory override (defaults to settings).
    #[arg(long)]
    bundle_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Predict the intent of a sentence.
    Predict {
        /// The sentence to classify.
        text: String,
        /// Emit the prediction as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Verify that the model bundle is complete and loadable.
    Check,
}

fn init_logging(settings: &SemaSettings) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(settings.logging.level.as_filter_str())
        });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn pipeline_config(settings: &SemaSettings, bundle_dir: Option<String>) -> PipelineConfig {
    let mut config = PipelineConfig::from_settings(&settings.pipeline);
    if let Some(dir) = bundle_dir {
        config.bundle_dir = dir;
    }
    config
}

fn run_predict(config: PipelineConfig, text: &str, json: bool) -> Result<()> {
    let pipeline = IntentPipeline::new(config);
    pipeline
        .initialize()
        .context("failed to initialize the intent pipeline")?;

    match pipeline.predict(text) {
        Ok(prediction) => {
            if json {
                println!("{}", serde_json::to_string(&prediction)?);
            } else {
                println!(
                    "intent: {} (confidence {:.3})",
                    prediction.label, prediction.confidence
                );
            }
            Ok(())
        }
        Err(IntentError::NotReady) => anyhow::bail!("intent pipeline not ready"),
        Err(e) => Err(e).context("prediction failed"),
    }
}

fn run_check(config: PipelineConfig) -> Result<()> {
    let paths = BundlePaths::resolve(&config);
    let missing = paths.missing_files();
    if !missing.is_empty() {
        for path in &missing {
            eprintln!("missing: {}", path.display());
        }
        anyhow::bail!("bundle incomplete ({} file(s) missing)", missing.len());
    }

    let pipeline = IntentPipeline::new(config);
    pipeline
        .initialize()
        .context("bundle present but failed to load")?;

    let labels = pipeline.labels().unwrap_or_default();
    println!("bundle ok: {} labels ({})", labels.len(), labels.join(", "));
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let settings = sema_settings::load_settings().unwrap_or_else(|e| {
        eprintln!("warning: settings load failed, using defaults: {e}");
        SemaSettings::default()
    });
    init_logging(&settings);

    let config = pipeline_config(&settings, args.bundle_dir);
    tracing::debug!(bundle_dir = %config.bundle_dir, "resolved pipeline config");
    match args.command {
        Command::Predict { text, json } => run_predict(config, &text, json),
        Command::Check => run_check(config),
    }
}
