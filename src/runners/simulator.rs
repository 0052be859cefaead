//! Knows how to run & measure the toy algorithms of the explainer: bounded, deterministic workloads
//! mimicking the operation counts of a linear scan, a binary halving, a fully nested double loop
//! and the merge levels of a merge sort.\
//! Operation counts are deterministic; elapsed times are only an illustrative -- and noisy -- proxy for the growth class.

use std::{
    fmt::{Display, Formatter},
    hint::black_box,
    str::FromStr,
};
use tracing::debug;
use crate::{
    configs::SimulatorConfig,
    errors::{EngineError, EngineResult},
    growth::types::ComplexityClass,
    runners::common::run_sync_pass,
    utils::presentable_measurements::{duration_measurement, operations_measurement},
};


/// The toy algorithms the simulator knows how to run
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Algorithm {
    /// one unit of work per element -- a single pass
    Linear,
    /// discards half of the search space on each step
    Binary,
    /// two fully nested passes over the elements -- no early exits
    Bubble,
    /// the total work across all merge levels, without the actual recursion
    Merge,
}

/// A workload receives the input size and returns the number of operations it performed
type Workload = fn(u64) -> u64;

impl Algorithm {

    pub const ALL: [Algorithm; 4] = [Self::Linear, Self::Binary, Self::Bubble, Self::Merge];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Binary => "Binary",
            Self::Bubble => "Bubble",
            Self::Merge  => "Merge",
        }
    }

    /// the growth class of this algorithm's operation count
    pub fn modeled_class(&self) -> ComplexityClass {
        match self {
            Self::Linear => ComplexityClass::Linear,
            Self::Binary => ComplexityClass::Logarithmic,
            Self::Bubble => ComplexityClass::Quadratic,
            Self::Merge  => ComplexityClass::Linearithmic,
        }
    }

    fn workload(&self) -> Workload {
        match self {
            Self::Linear => linear_scan,
            Self::Binary => binary_halving,
            Self::Bubble => nested_double_loop,
            Self::Merge  => merge_levels,
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Algorithm {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" | "linear search" => Ok(Self::Linear),
            "binary" | "binary search" => Ok(Self::Binary),
            "bubble" | "bubble sort"   => Ok(Self::Bubble),
            "merge"  | "merge sort"    => Ok(Self::Merge),
            _ => Err(EngineError::UnknownName { kind: "algorithm", name: s.to_string() }),
        }
    }
}


/// The outcome of a single simulation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    pub algorithm:            Algorithm,
    pub input_size:           u64,
    pub operation_count:      u64,
    pub elapsed_time_seconds: f64,
}

impl Display for SimulationResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(n={}): {} in {} -- {}",
               self.algorithm, self.input_size,
               operations_measurement(self.operation_count as f64),
               duration_measurement(self.elapsed_time_seconds),
               self.algorithm.notation())
    }
}


/// Runs `algorithm` on `input_size` elements, using the default [SimulatorConfig].\
/// See [simulate_with_config()].
pub fn simulate(algorithm: Algorithm, input_size: i64) -> EngineResult<SimulationResult> {
    simulate_with_config(algorithm, input_size, &SimulatorConfig::default())
}

/// Runs `algorithm` on `input_size` elements, performing real work proportional to its modeled operation count.\
/// Sizes outside of `1..=config.max_input_size` are rejected with [EngineError::InvalidInputSize].
pub fn simulate_with_config(algorithm: Algorithm, input_size: i64, config: &SimulatorConfig) -> EngineResult<SimulationResult> {
    let n = validate_input_size(input_size, config)?;
    Ok(run_simulation(algorithm, n))
}

pub(crate) fn validate_input_size(input_size: i64, config: &SimulatorConfig) -> EngineResult<u64> {
    if input_size < 1 || input_size > config.max_input_size {
        Err(EngineError::InvalidInputSize { input_size, max: config.max_input_size })
    } else {
        Ok(input_size as u64)
    }
}

/// runs an already validated simulation
pub(crate) fn run_simulation(algorithm: Algorithm, n: u64) -> SimulationResult {
    let workload = algorithm.workload();
    let pass = run_sync_pass(|| workload(n));
    let result = SimulationResult {
        algorithm,
        input_size:           n,
        operation_count:      pass.operation_count,
        elapsed_time_seconds: pass.elapsed.as_secs_f64(),
    };
    debug!(algorithm = %algorithm, input_size = n, operation_count = result.operation_count,
           elapsed_seconds = result.elapsed_time_seconds, "simulation finished");
    result
}

/// `round(n·log2(n))` -- the total element moves across the `log2(n)` levels of a merge sort
pub fn merge_operation_count(n: u64) -> u64 {
    let n = n as f64;
    (n * n.log2()).round() as u64
}


fn linear_scan(n: u64) -> u64 {
    let mut total = 0u64;
    let mut operations = 0;
    for i in 0..n {
        total = total.wrapping_add(black_box(i));
        operations += 1;
    }
    black_box(total);
    operations
}

fn binary_halving(n: u64) -> u64 {
    let mut remaining = n;
    let mut operations = 0;
    while remaining > 1 {
        remaining = black_box(remaining / 2);
        operations += 1;
    }
    operations
}

fn nested_double_loop(n: u64) -> u64 {
    let mut total = 0u64;
    let mut operations = 0;
    for i in 0..n {
        for j in 0..n {
            total = total.wrapping_add(black_box(i + j));
            operations += 1;
        }
    }
    black_box(total);
    operations
}

fn merge_levels(n: u64) -> u64 {
    let mut total = 0u64;
    let mut operations = 0;
    for step in 0..merge_operation_count(n) {
        total = total.wrapping_add(black_box(step));
        operations += 1;
    }
    black_box(total);
    operations
}


#[cfg(test)]
mod tests {

    //! Unit tests for the [simulator](super) module -- using 'serial_test' so parallel tests don't disturb the time measurements.

    use super::*;
    use serial_test::serial;


    #[test]
    #[serial]
    fn operation_counts() {
        assert_eq!(simulate(Algorithm::Binary, 1024).unwrap().operation_count, 10);
        assert_eq!(simulate(Algorithm::Binary, 1025).unwrap().operation_count, 10);
        assert_eq!(simulate(Algorithm::Binary, 1).unwrap().operation_count, 0);
        assert_eq!(simulate(Algorithm::Linear, 1000).unwrap().operation_count, 1000);
        assert_eq!(simulate(Algorithm::Merge, 1000).unwrap().operation_count, (1000.0 * 1000f64.log2()).round() as u64);
        assert_eq!(simulate(Algorithm::Merge, 1000).unwrap().operation_count, 9966);
        assert_eq!(simulate(Algorithm::Merge, 1).unwrap().operation_count, 0);
        assert_eq!(simulate(Algorithm::Bubble, 3).unwrap().operation_count, 9);
    }

    #[test]
    #[serial]
    fn operation_counts_are_deterministic() {
        let counts: Vec<u64> = (0..5)
            .map(|_| simulate(Algorithm::Bubble, 500).unwrap().operation_count)
            .collect();
        assert_eq!(counts, vec![250_000; 5]);
    }

    #[test]
    fn invalid_input_sizes() {
        let max = SimulatorConfig::default().max_input_size;
        assert_eq!(simulate(Algorithm::Linear, 0),  Err(EngineError::InvalidInputSize { input_size: 0,  max }));
        assert_eq!(simulate(Algorithm::Linear, -5), Err(EngineError::InvalidInputSize { input_size: -5, max }));
        assert_eq!(simulate(Algorithm::Bubble, max + 1), Err(EngineError::InvalidInputSize { input_size: max + 1, max }));
        let config = SimulatorConfig::new().with_max_input_size(100);
        assert!(simulate_with_config(Algorithm::Linear, 100, &config).is_ok());
        assert_eq!(simulate_with_config(Algorithm::Linear, 101, &config), Err(EngineError::InvalidInputSize { input_size: 101, max: 100 }));
    }

    #[test]
    #[serial]
    fn results_carry_their_inputs() {
        let result = simulate(Algorithm::Merge, 64).unwrap();
        assert_eq!(result.algorithm, Algorithm::Merge);
        assert_eq!(result.input_size, 64);
        assert_eq!(result.operation_count, 384);
        assert!(result.elapsed_time_seconds >= 0.0);
        let display = result.to_string();
        assert!(display.starts_with("Merge(n=64): 384ops in "), "unexpected display '{display}'");
        assert!(display.ends_with("O(n log n), Ω(n log n), Θ(n log n)"), "unexpected display '{display}'");
    }

    #[test]
    fn algorithms_parse_from_their_names() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("Merge Sort".parse::<Algorithm>(), Ok(Algorithm::Merge));
        assert_eq!("Quick".parse::<Algorithm>(), Err(EngineError::UnknownName { kind: "algorithm", name: "Quick".to_string() }));
        assert_eq!(EngineError::UnknownName { kind: "algorithm", name: "Quick".to_string() }.to_string(), "unknown algorithm 'Quick'");
    }
}
