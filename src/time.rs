//! Fixed-timestep drill clock using an accumulator pattern.
//!
//! `draw_web()` calls at ~60fps with variable delta. DrillClock converts
//! this into a fixed number of discrete ticks per second so the
//! auto-advance delay is counted in ticks and stays testable.

pub struct DrillClock {
    /// Milliseconds per tick (e.g. 100ms = 10 ticks/sec)
    ms_per_tick: f64,
    /// Accumulated milliseconds not yet consumed as ticks
    accumulator: f64,
    /// Total elapsed ticks since creation
    pub total_ticks: u64,
    /// Timestamp of the last update (ms), None if first frame
    last_timestamp: Option<f64>,
}

impl DrillClock {
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec.max(1) as f64,
            accumulator: 0.0,
            total_ticks: 0,
            last_timestamp: None,
        }
    }

    /// Feed a `performance.now()` timestamp; returns whole ticks elapsed.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            // Clamp so a backgrounded tab doesn't flush a burst of ticks.
            Some(prev) => (now_ms - prev).clamp(0.0, 500.0),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        self.total_ticks += ticks as u64;
        ticks
    }
}

/// Number of ticks covering `ms` milliseconds, rounded up.
pub fn ms_to_ticks(ms: u32, ticks_per_sec: u32) -> u32 {
    let ticks_per_sec = ticks_per_sec.max(1) as u64;
    ((ms as u64 * ticks_per_sec).div_ceil(1000)) as u32
}

/// Milliseconds since the Unix epoch.
///
/// `std::time::SystemTime::now()` panics on wasm32-unknown-unknown, so the
/// browser build reads `Date.now()` instead.
#[cfg(target_arch = "wasm32")]
pub fn wall_clock_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
pub fn wall_clock_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// `performance.now()` in the browser; `None` when unavailable.
pub fn performance_now() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
}
