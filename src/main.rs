//! Main entry point for the Reverso Translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reverso_translator::ReversoTranslator;

/// Reverso Translator - translate text from the command line
#[derive(Parser, Debug)]
#[command(name = "reverso-translate", version, about, long_about = None)]
struct Args {
    /// Text to translate
    text: String,

    /// Source language code
    #[arg(long, default_value = "eng")]
    from: String,

    /// Target language code
    #[arg(long, default_value = "fra")]
    to: String,

    /// Let the service detect the source language
    #[arg(short, long)]
    detect: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("reverso_translator={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut translator = ReversoTranslator::new()?;
    translator
        .set_language_from(&args.from)
        .set_language_to(&args.to)
        .set_language_detection(args.detect);

    let translation = translator.translate(&args.text).await?;
    println!("{translation}");

    Ok(())
}
