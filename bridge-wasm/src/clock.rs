//! Monotonic clock backed by the High Resolution Time API.

use crate::error::{WasmError, WasmResult};
use bridge_traits::time::MonotonicClock;
use web_sys::Performance;

/// Reads `window.performance.now()`.
#[derive(Debug, Clone)]
pub struct PerformanceClock {
    performance: Performance,
}

impl PerformanceClock {
    /// Bind to the current window's `performance` object.
    pub fn new() -> WasmResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| WasmError::Unavailable("window".to_string()))?;
        let performance = window
            .performance()
            .ok_or_else(|| WasmError::Unavailable("window.performance".to_string()))?;
        Ok(Self { performance })
    }
}

impl MonotonicClock for PerformanceClock {
    fn now_millis(&self) -> f64 {
        self.performance.now()
    }
}
