//! Contains code shared between this module's submodules

use std::{
    hint::black_box,
    time::{Duration, Instant},
};
use crate::utils::presentable_measurements::{duration_measurement, operations_measurement};


/// What running a workload once -- a "pass" -- measured
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassResult {
    /// wall-clock time taken by the pass -- noisy & not reproducible
    pub elapsed:         Duration,
    /// units of work the workload reported doing -- deterministic for a given input
    pub operation_count: u64,
}

/// wrap around the original [run_sync_pass()] to output progress & intermediate results
pub fn run_sync_pass_verbosely<_OutputClosure: FnMut(&str)>
                              (result_prefix:  &str,
                               result_suffix:  &str,
                               workload:       impl FnOnce() -> u64,
                               mut output:     _OutputClosure)
                              -> PassResult {
    let pass_result = run_sync_pass(workload);
    output(&format!("{}{}/{}{}",
                    result_prefix,
                    duration_measurement(pass_result.elapsed.as_secs_f64()),
                    operations_measurement(pass_result.operation_count as f64),
                    result_suffix));
    pass_result
}

/// Runs `workload` once, measuring the wall-clock time it takes.\
/// `workload` returns the number of operations it performed -- which also prevents
/// the compiler from optimizing the work away.
pub fn run_sync_pass(workload: impl FnOnce() -> u64) -> PassResult {
    let start = Instant::now();
    let operation_count = black_box(workload());
    let elapsed = start.elapsed();
    PassResult { elapsed, operation_count }
}
