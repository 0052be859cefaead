//! Contains constants & the runtime configuration used throughout this crate

use std::time::Duration;


/// `2^n` is clamped to `2^min(n, EXPONENTIAL_CLAMP_CEILING)` so the "exponential" growth curve stays finite & plottable
/// alongside the polynomial ones -- this is a deliberate clamp, not true exponential growth.
pub const EXPONENTIAL_CLAMP_CEILING: f64 = 20.0;

/// Default hard ceiling for the simulator's input size -- the quadratic workload runs `n²` iterations,
/// so this keeps every simulation finishing in well under a second on release builds
pub const MAX_SIMULATION_INPUT_SIZE: i64 = 10_000;

/// Smallest `n` a growth check accepts: the logarithmic reference ratio, `log2(2n) / log2(n)`, is undefined for `n = 1`
pub const MIN_GROWTH_CHECK_INPUT_SIZE: i64 = 2;

/// Delay between reattempts of a growth check whose time measurements were disturbed by the environment
pub const GROWTH_CHECK_RETRY_DELAY: Duration = Duration::from_millis(50);


/// Runtime parameters for [crate::runners::simulator]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// the maximum accepted `input_size` -- larger sizes are rejected with [crate::EngineError::InvalidInputSize]
    pub max_input_size: i64,
}

impl SimulatorConfig {

    pub const fn new() -> Self {
        Self { max_input_size: MAX_SIMULATION_INPUT_SIZE }
    }

    /// Overrides the input size ceiling. Values below `1` would reject every simulation and are raised to `1`
    pub const fn with_max_input_size(mut self, max_input_size: i64) -> Self {
        self.max_input_size = if max_input_size < 1 { 1 } else { max_input_size };
        self
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
