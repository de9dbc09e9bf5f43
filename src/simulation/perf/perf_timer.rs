//! Millisecond stopwatch: `Date.now()` in the browser, `Instant` natively.

#[cfg(not(target_arch = "wasm32"))]
use std::sync::OnceLock;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

#[cfg(target_arch = "wasm32")]
#[inline]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
#[inline]
fn now_ms() -> f64 {
    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    mark_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        Self { mark_ms: now_ms() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.mark_ms).max(0.0)
    }

    /// Elapsed time since the last mark, then re-mark
    pub(crate) fn lap_ms(&mut self) -> f64 {
        let now = now_ms();
        let lap = (now - self.mark_ms).max(0.0);
        self.mark_ms = now;
        lap
    }
}

/// Run `f`, adding its duration to `slot` when a timer is requested
#[inline]
pub(crate) fn timed<R>(enabled: bool, slot: &mut f64, f: impl FnOnce() -> R) -> R {
    if !enabled {
        return f();
    }
    let t0 = PerfTimer::start();
    let out = f();
    *slot += t0.elapsed_ms();
    out
}
