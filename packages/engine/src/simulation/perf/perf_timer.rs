//! Lap timer for per-phase tick metrics.

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    start_ms: f64,
    lap_start_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        let now = now_ms();
        PerfTimer {
            start_ms: now,
            lap_start_ms: now,
        }
    }

    /// Milliseconds since `start`.
    pub(crate) fn elapsed_ms(&self) -> f64 {
        now_ms() - self.start_ms
    }

    /// Milliseconds since the previous lap (or `start`), then begin a new lap.
    pub(crate) fn lap_ms(&mut self) -> f64 {
        let now = now_ms();
        let lap = now - self.lap_start_ms;
        self.lap_start_ms = now;
        lap
    }
}
