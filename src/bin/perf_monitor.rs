//! Host performance sampler
//!
//! Records CPU and memory utilization on a fixed interval and persists the
//! series to a JSON file. Runs independently of the gateway process.

use anyhow::Context;
use clap::Parser;
use llama_gateway::core::metrics::{cpu_usage_percent, memory_usage_percent};
use serde::Serialize;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Sample host CPU/memory usage and write the series to a JSON file
#[derive(Debug, Parser)]
#[command(name = "perf-monitor", version, about)]
struct Args {
    /// Total monitoring duration in seconds
    #[arg(long, default_value_t = 60)]
    duration: u64,

    /// Seconds between samples
    #[arg(long, default_value_t = 1)]
    interval: u64,

    /// Output file for the collected samples
    #[arg(long, default_value = "performance_metrics.json")]
    output: PathBuf,
}

#[derive(Debug, Serialize)]
struct Sample {
    timestamp: String,
    cpu_percent: f64,
    memory_percent: f64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    anyhow::ensure!(args.interval > 0, "interval must be greater than 0");

    println!("Monitoring performance for {} seconds...", args.duration);

    let started = Instant::now();
    let mut samples = Vec::new();
    while started.elapsed().as_secs() < args.duration {
        samples.push(Sample {
            timestamp: chrono::Utc::now().to_rfc3339(),
            cpu_percent: cpu_usage_percent(),
            memory_percent: memory_usage_percent(),
        });
        std::thread::sleep(Duration::from_secs(args.interval));
    }

    let json = serde_json::to_string_pretty(&samples)?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("Performance metrics saved to {}", args.output.display());
    Ok(())
}
