use std::path::PathBuf;

use clap::Parser;
use sc_downgrade::{BatchOpts, DEFAULT_EXTENSION, RequestedTier};

#[derive(Parser, Debug)]
#[command(name = "sc-downgrade", version)]
/// Downgrade SC containers one or more format tiers (2.0 -> 1.0 -> 0.5).
struct Cli {
    /// Input container, or a directory of containers.
    input: PathBuf,

    /// Output container, or output directory when INPUT is a directory.
    output: PathBuf,

    /// Target tier: auto, 0.5, 1.0 or 2.0. `auto` steps one tier down.
    #[arg(long, default_value = "auto")]
    target: String,

    /// File extension matched in directory mode.
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    extension: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let opts = BatchOpts {
        target: RequestedTier::parse(&cli.target)?,
        extension: cli.extension,
    };

    let report = sc_downgrade::run(&cli.input, &cli.output, &opts)?;

    for item in &report.succeeded {
        eprintln!(
            "{} ({} -> {}) wrote {}",
            item.input.display(),
            item.outcome.source,
            item.outcome.target,
            item.output.display()
        );
    }
    for failure in &report.failed {
        eprintln!("{} failed: {}", failure.path.display(), failure.error);
    }
    if cli.input.is_dir() {
        eprintln!(
            "{} of {} files downgraded",
            report.succeeded.len(),
            report.total()
        );
    }
    Ok(())
}
