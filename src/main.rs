use clap::Parser;
use std::path::Path;

use pathbench::bench;
use pathbench::config::Config;
use pathbench::report;
use pathbench::utils::logging;

#[derive(Parser)]
#[clap(version = "0.1.0", author = "PathBench Contributors")]
enum Cli {
    /// Run the benchmark sweep
    Run {
        #[clap(short, long, default_value = "pathbench.toml")]
        config: String,
        /// Override the configured RNG seed
        #[clap(long)]
        seed: Option<u64>,
        /// Override the configured iteration count
        #[clap(long)]
        iterations: Option<usize>,
        /// Override the configured size sweep, comma-separated
        #[clap(long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,
    },
    /// Write the default configuration file
    InitConfig {
        #[clap(short, long, default_value = "pathbench.toml")]
        path: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    match Cli::parse() {
        Cli::Run {
            config,
            seed,
            iterations,
            sizes,
        } => {
            let mut config = if Path::new(&config).exists() {
                Config::load(&config)?
            } else {
                Config::default()
            };
            if let Some(seed) = seed {
                config.bench.seed = Some(seed);
            }
            if let Some(iterations) = iterations {
                config.bench.iterations = iterations;
            }
            if let Some(sizes) = sizes {
                config.bench.sizes = sizes;
            }
            config.validate()?;

            logging::init(&config.log)?;
            let records = bench::run_sweep(&config.bench)?;
            report::print_summary(&records);
            logging::shutdown();
        }
        Cli::InitConfig { path } => {
            Config::default().save(&path)?;
            println!("Wrote default config to {path}");
        }
    }

    Ok(())
}
