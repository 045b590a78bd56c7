//! Host CPU and memory sampling
//!
//! Real readings come from the sysinfo crate when the metrics feature is
//! enabled; without it every probe reports the 0 sentinel.

#[cfg(feature = "metrics")]
use once_cell::sync::Lazy;
#[cfg(feature = "metrics")]
use sysinfo::System;

#[cfg(feature = "metrics")]
static SYSTEM: Lazy<parking_lot::Mutex<System>> =
    Lazy::new(|| parking_lot::Mutex::new(System::new_all()));

/// Global CPU utilization in percent
#[cfg(feature = "metrics")]
pub fn cpu_usage_percent() -> f64 {
    let mut sys = SYSTEM.lock();
    sys.refresh_cpu_usage();
    (sys.global_cpu_usage() as f64).clamp(0.0, 100.0)
}

#[cfg(not(feature = "metrics"))]
pub fn cpu_usage_percent() -> f64 {
    0.0
}

/// Used memory as a percentage of total memory
#[cfg(feature = "metrics")]
pub fn memory_usage_percent() -> f64 {
    let mut sys = SYSTEM.lock();
    sys.refresh_memory();
    let total = sys.total_memory();
    if total == 0 {
        return 0.0;
    }
    (sys.used_memory() as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}

#[cfg(not(feature = "metrics"))]
pub fn memory_usage_percent() -> f64 {
    0.0
}
