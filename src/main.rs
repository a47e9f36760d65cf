use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use unary_sub::{run_session, LogReporter, RunConfig, UnaryNetwork};

/// Trains a unary subtraction network, measures it, then answers queries.
#[derive(Parser)]
#[command(name = "unary-sub", version, about)]
struct Cli {
    /// JSON run configuration; flags below override its values
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Largest input with a dedicated weight
    #[arg(long)]
    capacity: Option<usize>,
    /// Training iterations
    #[arg(long)]
    epochs: Option<usize>,
    /// Evaluation samples
    #[arg(long = "tests")]
    num_tests: Option<usize>,
    /// Iterations between progress reports
    #[arg(long)]
    report_every: Option<usize>,
    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Skip the interactive prompt
    #[arg(long)]
    no_interactive: bool,
    /// Print the learned weights as JSON after testing
    #[arg(long)]
    print_weights: bool,
}

impl Cli {
    fn run_config(&self) -> anyhow::Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load_json(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => RunConfig::default(),
        };
        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }
        if let Some(epochs) = self.epochs {
            config.epochs = epochs;
        }
        if let Some(num_tests) = self.num_tests {
            config.num_tests = num_tests;
        }
        if let Some(report_every) = self.report_every {
            config.report_every = report_every;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.no_interactive {
            config.interactive = false;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.run_config()?;
    info!(
        "capacity {}, {} epochs, {} tests",
        config.capacity, config.epochs, config.num_tests
    );

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut network = UnaryNetwork::new(config.capacity);
    network.train_model(&config.train_config(), &mut rng, LogReporter);
    network
        .test(config.num_tests, &mut rng, LogReporter)
        .context("evaluation failed")?;

    if cli.print_weights {
        let json = serde_json::to_string(network.weights()).context("failed to encode weights")?;
        println!("{json}");
    }

    if config.interactive {
        let stdin = io::stdin();
        run_session(&network, stdin.lock(), io::stdout().lock())
            .context("interactive session failed")?;
    }
    Ok(())
}
