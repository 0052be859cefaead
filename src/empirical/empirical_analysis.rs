//! See [super].

use crate::{
    errors::{EngineError, EngineResult},
    features::PERCENT_TOLERANCE,
    runners::simulator::SimulationResult,
    empirical::types::ObservedGrowth,
};


/// Performs the growth analysis on the resource denoted by `u`, where `u1` & `u2` are the resource
/// utilization on passes 1 & 2 and, likewise, `n1` & `n2` represent the number of elements, iterations or computations
/// -- in other words, represents the `n` in the Big-O notation... `O(n)`, `O(log(n))`, `O(n²)`, etc...\
/// The observed ratio `u2/u1` is compared, within [PERCENT_TOLERANCE], to the ratio each reference function yields for `n2/n1`.
pub fn analyse_growth(u1: f64, u2: f64, n1: f64, n2: f64) -> ObservedGrowth {
    let ratio = u2 / u1;
    let matches   = |reference: f64| ((ratio / reference) - 1.0).abs() <= PERCENT_TOLERANCE;
    let below     = |reference: f64| (ratio / reference) < 1.0 - PERCENT_TOLERANCE;
    let nlogn = |n: f64| n * n.log2();
    if ratio < 1.0 - PERCENT_TOLERANCE {
        ObservedGrowth::BetterThanO1
    } else if matches(1.0) {
        ObservedGrowth::O1
    } else if below(n2.log2() / n1.log2()) {
        ObservedGrowth::BetweenO1AndOLogN
    } else if matches(n2.log2() / n1.log2()) {
        ObservedGrowth::OLogN
    } else if below(n2 / n1) {
        ObservedGrowth::BetweenOLogNAndON
    } else if matches(n2 / n1) {
        ObservedGrowth::ON
    } else if below(nlogn(n2) / nlogn(n1)) {
        ObservedGrowth::BetweenONAndONLogN
    } else if matches(nlogn(n2) / nlogn(n1)) {
        ObservedGrowth::ONLogN
    } else if below((n2 / n1).powi(2)) {
        ObservedGrowth::BetweenONLogNAndON2
    } else if matches((n2 / n1).powi(2)) {
        ObservedGrowth::ON2
    } else if below((n2 / n1).powi(3)) {
        ObservedGrowth::BetweenON2AndON3
    } else if matches((n2 / n1).powi(3)) {
        ObservedGrowth::ON3
    } else if below((n2 / n1).powi(4)) {
        ObservedGrowth::BetweenON3AndON4
    } else if matches((n2 / n1).powi(4)) {
        ObservedGrowth::ON4
    } else if (u2 / u1.powf(n2/n1)) < 1.0 - PERCENT_TOLERANCE {
        ObservedGrowth::BetweenON4AndOkN
    } else if ( (u2 / u1.powf(n2/n1)) - 1.0 ).abs() <= PERCENT_TOLERANCE {
        ObservedGrowth::OkN
    } else {
        ObservedGrowth::WorseThanExponential
    }
}

/// Performs the growth analysis on the operation counts of two simulations of the same algorithm.\
/// Pass 1 must have run on at least 2 elements, or [EngineError::InvalidDomain] is returned.
pub fn analyse_operation_growth(pass_1: &SimulationResult, pass_2: &SimulationResult) -> EngineResult<ObservedGrowth> {
    let (n1, n2) = pass_sizes(pass_1, pass_2)?;
    Ok(analyse_growth(pass_1.operation_count as f64, pass_2.operation_count as f64, n1, n2))
}

/// Performs the growth analysis on the elapsed times of two simulations of the same algorithm.\
/// Being based on wall-clock measurements, the outcome is not reproducible.
pub fn analyse_time_growth(pass_1: &SimulationResult, pass_2: &SimulationResult) -> EngineResult<ObservedGrowth> {
    let (n1, n2) = pass_sizes(pass_1, pass_2)?;
    Ok(analyse_growth(pass_1.elapsed_time_seconds, pass_2.elapsed_time_seconds, n1, n2))
}

fn pass_sizes(pass_1: &SimulationResult, pass_2: &SimulationResult) -> EngineResult<(f64, f64)> {
    if pass_1.algorithm != pass_2.algorithm {
        return Err(EngineError::MismatchedPasses { first: pass_1.algorithm, second: pass_2.algorithm });
    }
    if pass_1.input_size < 2 {
        // `log2(1)` is zero: no logarithmic reference ratio exists
        return Err(EngineError::InvalidDomain { value: pass_1.input_size as f64 });
    }
    Ok((pass_1.input_size as f64, pass_2.input_size as f64))
}


#[cfg(test)]
mod tests {

    //! Unit tests for the [empirical_analysis](super) module

    use super::*;
    use crate::runners::simulator::{simulate, Algorithm};
    use serial_test::serial;


    /// test growth analysis progression when resource utilization increases -- no variant may be skipped
    #[test]
    fn smooth_transitions() {
        let mut last_growth = ObservedGrowth::BetterThanO1;
        for u2 in 0..11_000_001 {
            let current_growth = analyse_growth(10.0, u2 as f64, 2.0, 14.0);
            let delta = current_growth as i32 - last_growth as i32;
            assert!(delta == 0 || delta == 1, "'analyse_growth(..., {}, ..., ...)' suddenly went from {:?} to {:?} when `u2` went from {} to {}", u2, last_growth, current_growth, u2 as i64 - 1, u2);
            last_growth = current_growth;
        }
        assert_eq!(last_growth, ObservedGrowth::WorseThanExponential, "Please update this test to cycle through all variants of `ObservedGrowth`");
    }

    /// tests the growth analysis results based on some known-to-be-correct measurements
    #[test]
    fn theoretical_measurements() {
        let assert = |measurement_name, expected_growth, u1: f64, u2: f64, n1: f64, n2: f64| {
            let observed_growth = analyse_growth(u1, u2, n1, n2);
            assert_eq!(observed_growth, expected_growth, "Growth analysis for '{}' check failed!", measurement_name);
        };
        assert("Theoretical better than O(1) algorithm",             ObservedGrowth::BetterThanO1,        100.0,   89.0, 1000.0, 2000.0);
        assert("Theoretical O(1) algorithm",                         ObservedGrowth::O1,                  100.0,  100.0, 1000.0, 2000.0);
        assert("Theoretical O(log(n)) algorithm",                    ObservedGrowth::OLogN,               100.0,  111.0, 1000.0, 2000.0);
        assert("Theoretical between O(log(n)) and O(n) algorithm",   ObservedGrowth::BetweenOLogNAndON,   100.0,  150.0, 1000.0, 2000.0);
        assert("Theoretical O(n) algorithm",                         ObservedGrowth::ON,                  100.0,  200.0, 1000.0, 2000.0);
        assert("Theoretical O(n.log(n)) algorithm",                  ObservedGrowth::ONLogN,             1000.0, 2220.0, 1000.0, 2000.0);
        assert("Theoretical between O(n.log(n)) and O(n²) algorithm", ObservedGrowth::BetweenONLogNAndON2, 1000.0, 3000.0, 1000.0, 2000.0);
        assert("Theoretical O(n²) algorithm",                        ObservedGrowth::ON2,                1000.0, 4000.0, 1000.0, 2000.0);
        assert("Theoretical O(n³) algorithm",                        ObservedGrowth::ON3,                1000.0, 8000.0, 1000.0, 2000.0);
        assert("Theoretical O(n^4) algorithm",                       ObservedGrowth::ON4,                1000.0, 16000.0, 1000.0, 2000.0);
        assert("Theoretical O(k^n) algorithm",                       ObservedGrowth::OkN,                  1.0e1,  1.0e7,   10.0,   70.0);
        assert("Worse than exponential algorithm",                   ObservedGrowth::WorseThanExponential, 1.0e1, 1.0e7 * (1.0 + PERCENT_TOLERANCE + 0.001), 10.0, 70.0);
    }

    #[test]
    #[serial]
    fn operation_growth_of_the_toy_algorithms() {
        let assert = |algorithm, n1, n2, expected_growth| {
            let pass_1 = simulate(algorithm, n1).unwrap();
            let pass_2 = simulate(algorithm, n2).unwrap();
            assert_eq!(analyse_operation_growth(&pass_1, &pass_2), Ok(expected_growth), "{:?}'s operations growth from n={} to n={}", algorithm, n1, n2);
        };
        assert(Algorithm::Linear, 1000, 2000, ObservedGrowth::ON);
        assert(Algorithm::Bubble, 1000, 2000, ObservedGrowth::ON2);
        assert(Algorithm::Merge,  1000, 4000, ObservedGrowth::ONLogN);
        assert(Algorithm::Binary, 1024, 4096, ObservedGrowth::OLogN);
    }

    #[test]
    #[serial]
    fn passes_must_be_of_the_same_algorithm() {
        let pass_1 = simulate(Algorithm::Linear, 100).unwrap();
        let pass_2 = simulate(Algorithm::Merge, 200).unwrap();
        assert_eq!(analyse_time_growth(&pass_1, &pass_2), Err(EngineError::MismatchedPasses { first: Algorithm::Linear, second: Algorithm::Merge }));
    }

    #[test]
    #[serial]
    fn single_element_passes_have_no_growth_reference() {
        let pass_1 = simulate(Algorithm::Binary, 1).unwrap();
        let pass_2 = simulate(Algorithm::Binary, 2).unwrap();
        assert_eq!(analyse_operation_growth(&pass_1, &pass_2), Err(EngineError::InvalidDomain { value: 1.0 }));
        let pass_1 = simulate(Algorithm::Binary, 2).unwrap();
        let pass_2 = simulate(Algorithm::Binary, 4).unwrap();
        assert_eq!(analyse_operation_growth(&pass_1, &pass_2), Ok(ObservedGrowth::OLogN));
    }

    #[test]
    fn named_observations_map_back_to_classes() {
        use crate::growth::types::ComplexityClass;
        for class in ComplexityClass::ALL {
            assert_eq!(ObservedGrowth::from(class).as_complexity_class(), Some(class));
        }
        assert_eq!(ObservedGrowth::BetweenONAndONLogN.as_complexity_class(), None);
    }
}
