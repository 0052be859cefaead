//! Runs several simulations for the same input size -- as the "Run Simulation" button of the explainer does --
//! each on its own thread: simulations share no state, so no coordination is needed.

use std::{
    any::Any,
    fmt::{Display, Formatter},
};
use crate::{
    configs::SimulatorConfig,
    errors::{EngineError, EngineResult},
    features::OUTPUT,
    runners::simulator::{run_simulation, validate_input_size, Algorithm, SimulationResult},
    utils::presentable_measurements::{duration_measurement, operations_measurement},
};


/// Simulates every one of `algorithms` on `input_size` elements, concurrently, returning the results in the requested order.\
/// `input_size` is validated once, before any work starts -- so either every simulation runs or none does.
pub fn simulate_batch(algorithms: &[Algorithm], input_size: i64, config: &SimulatorConfig) -> EngineResult<Vec<SimulationResult>> {
    let n = validate_input_size(input_size, config)?;

    // use crossbeam's scoped threads to avoid requiring a 'static lifetime for the borrowed algorithms
    crossbeam::scope(|scope| {

        // start all threads
        let thread_handlers: Vec<(Algorithm, crossbeam::thread::ScopedJoinHandle<SimulationResult>)> = algorithms.iter()
            .map(|&algorithm| (algorithm, scope.spawn(move |_| run_simulation(algorithm, n))))
            .collect();

        // wait for them all to finish
        thread_handlers.into_iter()
            .map(|(algorithm, handler)| handler.join()
                .map_err(|panic_payload| EngineError::WorkerFailure(format!("'{algorithm}' simulation panicked: {}", panic_message(panic_payload.as_ref())))))
            .collect::<EngineResult<Vec<SimulationResult>>>()
    })
        .map_err(|panic_payload| EngineError::WorkerFailure(format!("simulation scope panicked: {}", panic_message(panic_payload.as_ref()))))?
}

/// async version of [simulate_batch()], running each simulation as a tokio blocking task
#[cfg(feature = "async")]
pub async fn simulate_batch_async(algorithms: &[Algorithm], input_size: i64, config: &SimulatorConfig) -> EngineResult<Vec<SimulationResult>> {
    let n = validate_input_size(input_size, config)?;
    let tasks: Vec<_> = algorithms.iter()
        .map(|&algorithm| (algorithm, tokio::task::spawn_blocking(move || run_simulation(algorithm, n))))
        .collect();
    let mut results = Vec::with_capacity(tasks.len());
    for (algorithm, task) in tasks {
        let result = task.await
            .map_err(|err| EngineError::WorkerFailure(format!("'{algorithm}' simulation task failed: {err}")))?;
        results.push(result);
    }
    Ok(results)
}

/// Runs [simulate_batch()] and sinks its [SimulationReport] through [OUTPUT]
pub fn report_batch(algorithms: &[Algorithm], input_size: i64, config: &SimulatorConfig) -> EngineResult<SimulationReport> {
    let report = SimulationReport { results: simulate_batch(algorithms, input_size, config)? };
    OUTPUT(&format!("{}\n", report));
    Ok(report)
}

fn panic_message(panic_payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = panic_payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = panic_payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "<non-string panic payload>".to_string()
    }
}


/// A batch of [SimulationResult]s, presentable as a table
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub results: Vec<SimulationResult>,
}

impl SimulationReport {

    /// the result with the smallest elapsed time, if any
    pub fn fastest(&self) -> Option<&SimulationResult> {
        self.results.iter().min_by(|a, b| a.elapsed_time_seconds.total_cmp(&b.elapsed_time_seconds))
    }
}

impl Display for SimulationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "simulation results:")?;
        writeln!(f, "algorithm         n           ops             Δt            t⁻  notation")?;
        for result in &self.results {
            // placing those in string variables since {:>12} seem not to work on implementers of Display
            let operations = operations_measurement(result.operation_count as f64).to_string();
            let elapsed    = duration_measurement(result.elapsed_time_seconds).to_string();
            let per_op     = if result.operation_count > 0 {
                duration_measurement(result.elapsed_time_seconds / result.operation_count as f64).to_string()
            } else {
                "-".to_string()
            };
            writeln!(f, "{:<9} {:>9}  {:>12}  {:>12}  {:>12}  {}",
                     result.algorithm.name(), result.input_size, operations, elapsed, per_op, result.algorithm.notation())?;
        }
        Ok(())
    }
}
