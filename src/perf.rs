//! Frame timing and scoped profiling instrumentation.
//!
//! A canvas that stutters while dragging is worse than one missing
//! features, so the hot paths carry lightweight timers. Enable the
//! `profiling` feature to get per-scope trace output; without it the
//! macros only warn when a scope blows past its threshold.

use std::collections::VecDeque;
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// Target frame time for 60 FPS.
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Samples kept for the rolling average.
const SAMPLE_COUNT: usize = 60;

/// Multiplier over target before a frame is counted as slow.
const WARN_THRESHOLD: f64 = 2.0;

/// Time a scope with the given name.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::TARGET_FRAME_MS);
    };
    ($name:expr, $threshold_ms:expr) => {
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
    };
}

pub use profile_scope;

/// Rolling frame-time tracker for the host's display loop.
#[derive(Default)]
pub struct FrameMonitor {
    frame_times: VecDeque<f64>,
    frame_start: Option<Instant>,
    slow_frames: u64,
    total_frames: u64,
}

impl FrameMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    /// Record the frame that `begin_frame` opened. Returns its duration in
    /// milliseconds, or `None` when no frame was open.
    pub fn end_frame(&mut self) -> Option<f64> {
        let start = self.frame_start.take()?;
        let ms = start.elapsed().as_secs_f64() * 1000.0;

        if self.frame_times.len() >= SAMPLE_COUNT {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(ms);
        self.total_frames += 1;

        if ms > TARGET_FRAME_MS * WARN_THRESHOLD {
            self.slow_frames += 1;
            warn!(
                frame_time_ms = format!("{ms:.2}"),
                target_ms = format!("{TARGET_FRAME_MS:.2}"),
                "Slow frame detected"
            );
        }

        Some(ms)
    }

    pub fn average_frame_time(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f64>() / self.frame_times.len() as f64
    }

    pub fn slow_frame_percentage(&self) -> f64 {
        if self.total_frames == 0 {
            return 0.0;
        }
        (self.slow_frames as f64 / self.total_frames as f64) * 100.0
    }

    pub fn reset(&mut self) {
        self.frame_times.clear();
        self.frame_start = None;
        self.slow_frames = 0;
        self.total_frames = 0;
    }
}

/// Logs its scope's duration on drop when it exceeds the threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();

        #[cfg(feature = "profiling")]
        if elapsed_ms > 0.0 {
            trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);
        }

        if elapsed_ms > self.threshold_ms {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{elapsed_ms:.2}"),
                "Slow operation"
            );
        }
    }
}

/// Run a closure and return its result with the elapsed milliseconds.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64() * 1000.0)
}
