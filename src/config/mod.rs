//! TOML-backed configuration for the benchmark binary.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::{BenchError, BenchResult};
use crate::graph::WeightPolicy;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub bench: BenchConfig,
    pub log: LogConfig,
}

/// Sweep parameters consumed by the harness.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BenchConfig {
    /// Graph sizes to sweep, benchmarked in this order
    pub sizes: Vec<usize>,
    /// Trials per engine per size
    pub iterations: usize,
    /// Master RNG seed; generated (and logged) when absent
    pub seed: Option<u64>,
    /// Edge weight assignment policy
    pub weights: WeightPolicy,
    /// Fan independent sizes out on the rayon pool
    pub parallel: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bench: BenchConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![10, 100, 200, 500, 1000, 1500],
            iterations: 20,
            seed: None,
            weights: WeightPolicy::Unit,
            parallel: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "pathbench".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_files: 5,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> BenchResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> BenchResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> BenchResult<()> {
        self.bench.validate()
    }
}

impl BenchConfig {
    pub fn validate(&self) -> BenchResult<()> {
        if self.sizes.is_empty() {
            return Err(BenchError::Config("sweep sizes must not be empty".into()));
        }
        if self.sizes.iter().any(|&size| size == 0) {
            return Err(BenchError::Config("sweep sizes must be positive".into()));
        }
        if self.iterations == 0 {
            return Err(BenchError::Config("iterations must be positive".into()));
        }
        if let WeightPolicy::UniformInt { min, max } = self.weights {
            if min == 0 {
                return Err(BenchError::Config(
                    "uniform weights must be positive integers".into(),
                ));
            }
            if min > max {
                return Err(BenchError::Config(format!(
                    "uniform weight range is inverted: min {min} > max {max}"
                )));
            }
        }
        Ok(())
    }
}
