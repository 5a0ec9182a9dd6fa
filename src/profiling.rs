//! Phase timing for comparison runs.
//!
//! Checkpoints are reported through the `log` facade at debug level.

use log::debug;

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

pub struct Profiler {
    label: String,
    start: f64,
    checkpoints: Vec<(String, f64)>,
}

impl Profiler {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            start: now_ms(),
            checkpoints: Vec::with_capacity(8),
        }
    }

    /// Record a checkpoint with a label
    pub fn checkpoint(&mut self, label: impl Into<String>) {
        self.checkpoints.push((label.into(), now_ms()));
    }

    /// Elapsed time since start in milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        now_ms() - self.start
    }

    /// Time spent in each phase, in milliseconds
    pub fn checkpoint_times(&self) -> Vec<(String, f64)> {
        let mut times = Vec::with_capacity(self.checkpoints.len());
        let mut prev = self.start;
        for (label, at) in &self.checkpoints {
            times.push((label.clone(), at - prev));
            prev = *at;
        }
        times
    }

    pub fn log(&self) {
        debug!("{}: {:.2}ms total", self.label, self.elapsed_ms());
        for (label, duration) in self.checkpoint_times() {
            debug!("  {}: {:.2}ms", label, duration);
        }
    }
}
