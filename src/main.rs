use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imgm::models::{ProcessOptions, DEFAULT_OUTPUT};
use imgm::services::process;
use palette_map::Strategy;

#[derive(Parser)]
#[command(name = "imgm")]
#[command(about = "Remap images onto a color palette")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace every pixel with the nearest color of a palette
    Bg {
        /// Image to convert (PNG or JPEG)
        #[arg(short, long)]
        image: PathBuf,

        /// Path to colorscheme (JSON array of hex colors, e.g. ["#000", "#ffffff"])
        #[arg(short, long)]
        schema: PathBuf,

        /// Processor type (see `imgm strategies`)
        #[arg(short, long, default_value = "nn")]
        processor: String,

        /// Output file (always PNG)
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Keep the source alpha channel instead of writing opaque pixels
        #[arg(long)]
        preserve_alpha: bool,
    },
    /// List the registered processors
    Strategies,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imgm=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Bg {
            image,
            schema,
            processor,
            output,
            preserve_alpha,
        } => {
            let options = ProcessOptions::new(image, schema)
                .strategy(processor)
                .output(output)
                .preserve_alpha(preserve_alpha);
            run_bg_command(&options)
        }
        Commands::Strategies => {
            run_strategies_command();
            Ok(())
        }
    }
}

/// Remap one image. Every failure goes through the same log-and-exit path.
fn run_bg_command(options: &ProcessOptions) -> anyhow::Result<()> {
    if let Err(e) = process(options) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    Ok(())
}

fn run_strategies_command() {
    println!("Processors:");
    for strategy in Strategy::ALL {
        let marker = if *strategy == Strategy::default() {
            " (default)"
        } else {
            ""
        };
        println!(
            "  {:<6}{}{marker}",
            strategy.name(),
            strategy.description()
        );
    }
}
