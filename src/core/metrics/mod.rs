//! Per-request performance metrics
//!
//! Wall-clock latency and host resource usage recorded around each call to
//! the inference engine.

mod system;

pub use system::{cpu_usage_percent, memory_usage_percent};

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::info;

/// Performance snapshot attached to every generation response
///
/// Token counts are whitespace word counts, not tokenizer output; the
/// approximation is intentional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Wall-clock latency of the backend call in milliseconds, rounded to
    /// two decimals
    pub inference_latency_ms: f64,
    /// Whitespace-separated word count of the prompt
    pub input_token_count: u64,
    /// Whitespace-separated word count of the generated text
    pub output_token_count: u64,
    /// Host CPU utilization sampled when the request started
    pub cpu_usage_percent: f64,
    /// Host memory utilization sampled when the request started
    pub memory_usage_percent: f64,
}

/// Measures one unit of inference work
///
/// `start` captures a monotonic timestamp together with the host CPU and
/// memory utilization at that instant; consuming `finish` produces the
/// snapshot and emits it as a structured log line. Sampling never fails: an
/// unavailable probe reports 0.
#[derive(Debug)]
pub struct MetricsRecorder {
    started_at: Instant,
    cpu_usage_percent: f64,
    memory_usage_percent: f64,
}

impl MetricsRecorder {
    /// Begin recording a unit of work
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
            cpu_usage_percent: cpu_usage_percent(),
            memory_usage_percent: memory_usage_percent(),
        }
    }

    /// Finish recording and emit the metrics log line
    pub fn finish(self, input_text: &str, output_text: &str) -> MetricsSnapshot {
        let elapsed_ms = self.started_at.elapsed().as_secs_f64() * 1000.0;

        let snapshot = MetricsSnapshot {
            inference_latency_ms: round2(elapsed_ms),
            input_token_count: count_tokens(input_text),
            output_token_count: count_tokens(output_text),
            cpu_usage_percent: self.cpu_usage_percent,
            memory_usage_percent: self.memory_usage_percent,
        };

        info!(
            latency_ms = snapshot.inference_latency_ms,
            input_tokens = snapshot.input_token_count,
            output_tokens = snapshot.output_token_count,
            cpu_percent = snapshot.cpu_usage_percent,
            memory_percent = snapshot.memory_usage_percent,
            "Performance metrics"
        );

        snapshot
    }
}

/// Whitespace word count, the gateway's token approximation
fn count_tokens(text: &str) -> u64 {
    text.split_whitespace().count() as u64
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
