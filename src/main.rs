use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use code_samples::{
    config::SamplesConfig,
    runner::{RunnerBuilder, RunnerSettings},
    samples::{RepositorySample, StructureSample},
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Runs the code samples and prints their reports")]
struct Cli {
    /// Path to a samples YAML file (built-in defaults when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run only the named sample; repeat to run several
    #[arg(long = "sample")]
    samples: Vec<String>,

    /// Override the random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print reports as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SamplesConfig::from_yaml(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SamplesConfig::standard(),
    };
    if !cli.samples.is_empty() {
        config.samples = cli.samples.clone();
    }
    if let Some(seed) = cli.seed {
        config.random_seed = seed;
    }
    config.validate().context("Invalid command line overrides")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = RunnerSettings {
        run_name: config.name.clone(),
        seed: config.random_seed,
        enabled: config.samples.clone(),
    };

    let mut runner = RunnerBuilder::new(settings)
        .with_sample(StructureSample::new())
        .with_sample(RepositorySample::new(config.repository.clone()))
        .build();

    let reports = runner.run()?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}", report.render_text());
        }
    }
    Ok(())
}
