//! Checks, at runtime, that a toy algorithm grows as the explainer claims it does: simulating it on `n` and `2n` elements,
//! its operation count growth must not exceed its modeled class and its time growth must not exceed a given maximum.\
//! Operation counts are deterministic, so an excess there is fatal; elapsed times are noisy, so a time excess is
//! retried -- with slightly different input sizes on each attempt -- before giving up.\
//! Operation growth may legitimately be observed *below* the modeled class: when `n` doubles at large sizes,
//! `n.log(n)` grows within tolerance of `n`.

use keen_retry::{loggable_retry_errors, ResolvedResult, RetryProducerResult, RetryResult};
use tracing::{debug, warn};
use crate::{
    configs::{SimulatorConfig, GROWTH_CHECK_RETRY_DELAY, MIN_GROWTH_CHECK_INPUT_SIZE},
    empirical::{analyse_operation_growth, analyse_time_growth, types::{GrowthAnalysis, ObservedGrowth}},
    errors::{EngineError, EngineResult},
    features::OUTPUT,
    runners::{
        common::run_sync_pass_verbosely,
        simulator::{simulate_with_config, validate_input_size, Algorithm},
    },
};


/// Runs [analyse_algorithm_growth()], trying to match the observed time growth to at most `max_time_growth`
/// -- retrying as much as `max_retry_attempts` to avoid flaky results.\
/// `input_size` must be at least [MIN_GROWTH_CHECK_INPUT_SIZE] -- as `log2(1)` is zero -- and its double must be accepted by `config`.
/// In case of rejection, a detailed log with measurements & analysis results is issued through [OUTPUT].
pub fn check_algorithm_growth(algorithm:          Algorithm,
                              input_size:         i64,
                              max_time_growth:    ObservedGrowth,
                              max_retry_attempts: u32,
                              config:             &SimulatorConfig)
                             -> EngineResult<GrowthAnalysis> {
    // invalid sizes are the caller's concern, not something a retry would fix
    if input_size < MIN_GROWTH_CHECK_INPUT_SIZE {
        return Err(EngineError::InvalidInputSize { input_size, max: config.max_input_size });
    }
    validate_input_size(input_size, config)?;
    validate_input_size(input_size.saturating_mul(2), config)?;

    let mut attempt = 0;
    let result = analyse_algorithm_growth(algorithm, input_size, max_time_growth, config)
        .retry_with(|_| {
            attempt += 1;
            analyse_algorithm_growth(algorithm, adapt(attempt, input_size, config), max_time_growth, config)
        })
        .with_delays((0..max_retry_attempts).map(|_| GROWTH_CHECK_RETRY_DELAY));
    match result {
        ResolvedResult::Ok { output, .. } => Ok(output),
        ResolvedResult::Recovered { output, .. } => {
            debug!(algorithm = %algorithm, attempts = attempt + 1, "growth check recovered after retrying");
            Ok(output)
        },
        ResolvedResult::Fatal { error, .. } => Err(EngineError::GrowthCheckFailed { message: error }),
        ResolvedResult::GivenUp { retry_errors, fatal_error, .. } => {
            warn!(algorithm = %algorithm, "growth check given up");
            Err(EngineError::GrowthCheckFailed { message: format!("Given up with '{}' after {max_retry_attempts} attempts. Previous transient errors: {}", fatal_error, loggable_retry_errors(&retry_errors)) })
        },
        ResolvedResult::Unrecoverable { retry_errors, fatal_error, .. } => {
            Err(EngineError::GrowthCheckFailed { message: format!("Stopped after retrying for {max_retry_attempts} attempts due to the fatal outcome '{}'. Previous transient errors: {}", fatal_error, loggable_retry_errors(&retry_errors)) })
        },
    }
}

/// adapts the `input_size` to the `attempt` number, so each retry uses slightly different values
/// -- never exceeding half of the configured ceiling, as the second pass runs on the double of it
fn adapt(attempt: u32, input_size: i64, config: &SimulatorConfig) -> i64 {
    let factor = 10 - (((attempt % 15) / 3) * 2) as i64; // [10,8,6,4,2,10,8,6,4,2,...]
    let adapted = match attempt {
        0 => input_size,
        _ => match (attempt - 1) % 3 {
            0 => input_size - (input_size / factor),
            _ => input_size + (input_size / factor),
        }
    };
    adapted.clamp(MIN_GROWTH_CHECK_INPUT_SIZE, (config.max_input_size / 2).max(MIN_GROWTH_CHECK_INPUT_SIZE))
}

/// Internal version of [check_algorithm_growth()], allowing retries
fn analyse_algorithm_growth(algorithm:       Algorithm,
                            input_size:      i64,
                            max_time_growth: ObservedGrowth,
                            config:          &SimulatorConfig)
                           -> RetryProducerResult<GrowthAnalysis, String> {

    OUTPUT(&format!("Checking '{}' growth:", algorithm));
    let simulate_pass = |prefix: &str, suffix: &str, n: i64| {
        let mut outcome = None;
        run_sync_pass_verbosely(prefix, suffix, || {
            let result = simulate_with_config(algorithm, n, config);
            let operation_count = result.as_ref().map_or(0, |r| r.operation_count);
            outcome = Some(result);
            operation_count
        }, OUTPUT);
        outcome.unwrap_or_else(|| Err(EngineError::WorkerFailure(format!("'{algorithm}' pass did not run"))))
    };
    let passes = simulate_pass(" Pass 1: ", "", input_size)
        .and_then(|pass_1| simulate_pass("; Pass 2: ", "", input_size * 2).map(|pass_2| (pass_1, pass_2)))
        .and_then(|(pass_1, pass_2)| {
            let operation_growth = analyse_operation_growth(&pass_1, &pass_2)?;
            let time_growth      = analyse_time_growth(&pass_1, &pass_2)?;
            Ok(GrowthAnalysis { pass_1, pass_2, operation_growth, time_growth })
        });
    let analysis = match passes {
        Ok(analysis) => analysis,
        Err(err) => return RetryResult::Fatal { input: (), error: err.to_string() },
    };

    OUTPUT("\n\n");
    OUTPUT(&format!("{}\n", analysis));

    let expected_operation_growth = ObservedGrowth::from(algorithm.modeled_class());
    if analysis.operation_growth > expected_operation_growth {
        let msg = format!("Aborted due to OPERATIONS growth mismatch on '{}': maximum: {:?}, measured: {:?}", algorithm, expected_operation_growth, analysis.operation_growth);
        OUTPUT(&format!("\n ** {msg}\n\n"));
        RetryResult::Fatal { input: (), error: msg }
    } else if analysis.time_growth > max_time_growth {
        let msg = format!("TIME growth mismatch on '{}': maximum: {:?}, measured: {:?}", algorithm, max_time_growth, analysis.time_growth);
        OUTPUT(&format!("\n ** {msg} -- a reattempt may be performed...\n\n"));
        RetryResult::Transient { input: (), error: msg }
    } else {
        RetryResult::Ok { reported_input: (), output: analysis }
    }
}
