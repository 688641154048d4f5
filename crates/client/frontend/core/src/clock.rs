//! Measured frame rate and per-frame elapsed time.
use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(1);

/// Measures actual ticks per second over one-second windows.
///
/// Movement is scaled by `1 / actual_tps`, so a frontend that cannot keep up
/// with the nominal rate still moves the player at the configured speed.
#[derive(Clone, Debug)]
pub struct FrameClock {
    nominal_tps: f64,
    window_start: Option<Instant>,
    ticks_in_window: u32,
    measured_tps: Option<f64>,
}

impl FrameClock {
    pub fn new(nominal_tps: u32) -> Self {
        Self {
            nominal_tps: f64::from(nominal_tps),
            window_start: None,
            ticks_in_window: 0,
            measured_tps: None,
        }
    }

    /// Nominal interval between ticks. Zero rate yields one second.
    pub fn period(&self) -> Duration {
        if self.nominal_tps > 0.0 {
            Duration::from_secs_f64(1.0 / self.nominal_tps)
        } else {
            WINDOW
        }
    }

    /// Records a tick at `now` and returns the elapsed seconds for this frame.
    pub fn tick_at(&mut self, now: Instant) -> f64 {
        let Some(start) = self.window_start else {
            // the opening tick starts the window without counting in it
            self.window_start = Some(now);
            return self.elapsed_seconds();
        };
        self.ticks_in_window += 1;

        let span = now.saturating_duration_since(start);
        if span >= WINDOW {
            self.measured_tps = Some(f64::from(self.ticks_in_window) / span.as_secs_f64());
            self.window_start = Some(now);
            self.ticks_in_window = 0;
        }

        self.elapsed_seconds()
    }

    /// Last measured rate, or the nominal rate before the first window closes.
    pub fn actual_tps(&self) -> f64 {
        self.measured_tps.unwrap_or(self.nominal_tps)
    }

    /// `1 / actual_tps`, or 0 when the rate is 0.
    pub fn elapsed_seconds(&self) -> f64 {
        let tps = self.actual_tps();
        if tps > 0.0 && tps.is_finite() {
            1.0 / tps
        } else {
            0.0
        }
    }
}
