//! Contains the canonical, pure growth functions `f(n) -> operation count` for each [ComplexityClass].

use crate::{
    configs::EXPONENTIAL_CLAMP_CEILING,
    errors::{EngineError, EngineResult},
    growth::types::{ComplexityClass, SampleSeries},
};


/// Evaluates the growth function of `class` at the input size `n`.\
/// Logarithmic classes require `n > 0`; all others accept `n ≥ 0`, behaving per the formula
/// (`Quadratic(0) = 0`). Negative or non-finite sizes are reported as [EngineError::InvalidDomain].
pub fn evaluate(class: ComplexityClass, n: f64) -> EngineResult<f64> {
    if !n.is_finite() || n < 0.0 {
        return Err(EngineError::InvalidDomain { value: n });
    }
    let value = match class {
        ComplexityClass::Constant           => 1.0,
        ComplexityClass::Logarithmic        => positive(n)?.log2(),
        ComplexityClass::Linear             => n,
        ComplexityClass::Linearithmic       => positive(n)? * n.log2(),
        ComplexityClass::Quadratic          => n.powi(2),
        ComplexityClass::Cubic              => n.powi(3),
        ComplexityClass::ExponentialBounded => n.min(EXPONENTIAL_CLAMP_CEILING).exp2(),
    };
    Ok(value)
}

/// Evaluates `class`'s growth function over every input size in `domain`, labeling the series after the class.\
/// Fails as a whole -- no partial series -- on the first value outside of the function's domain.
pub fn evaluate_series(class: ComplexityClass, domain: &[f64]) -> EngineResult<SampleSeries> {
    SampleSeries::try_from_fn(class.label(), domain, |n| evaluate(class, n))
}

/// Same as [evaluate_series()], but multiplying each value by `constant` -- for comparing `n²` against `2n²` & friends.\
/// The series is labeled `"{constant}·{class}"` unless `constant` is `1`.
pub fn evaluate_scaled_series(class: ComplexityClass, constant: f64, domain: &[f64]) -> EngineResult<SampleSeries> {
    if !constant.is_finite() {
        return Err(EngineError::InvalidDomain { value: constant });
    }
    let label = if constant == 1.0 {
        class.label().to_string()
    } else {
        format!("{constant}·{}", class.label())
    };
    SampleSeries::try_from_fn(label, domain, |n| evaluate(class, n).map(|value| constant * value))
}

fn positive(n: f64) -> EngineResult<f64> {
    if n > 0.0 {
        Ok(n)
    } else {
        Err(EngineError::InvalidDomain { value: n })
    }
}


#[cfg(test)]
mod tests {

    //! Unit tests for the [growth_functions](super) module

    use super::*;
    use rand::Rng;


    #[test]
    fn growth_functions_are_monotone() {
        let mut rng = rand::thread_rng();
        let mut domain: Vec<f64> = (0..512).map(|_| rng.gen_range(1.0..5000.0)).collect();
        domain.extend([1.0, 2.0, 19.5, 20.0, 20.5, 21.0]);
        domain.sort_by(f64::total_cmp);
        for class in ComplexityClass::ALL {
            let series = evaluate_series(class, &domain).expect("domain is valid for every class");
            let ys: Vec<f64> = series.ys().collect();
            for (i, pair) in ys.windows(2).enumerate() {
                assert!(pair[0] <= pair[1], "{class:?} decreased from f({})={} to f({})={}", domain[i], pair[0], domain[i+1], pair[1]);
            }
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(evaluate(ComplexityClass::Logarithmic, 1.0), Ok(0.0));
        assert_eq!(evaluate(ComplexityClass::Logarithmic, 1024.0), Ok(10.0));
        assert_eq!(evaluate(ComplexityClass::Linearithmic, 8.0), Ok(24.0));
        assert_eq!(evaluate(ComplexityClass::Cubic, 3.0), Ok(27.0));
        assert_eq!(evaluate(ComplexityClass::ExponentialBounded, 10.0), Ok(1024.0));
        for n in [0.0, 1.0, 7.0, 1e6] {
            assert_eq!(evaluate(ComplexityClass::Constant, n), Ok(1.0));
        }
        assert_eq!(evaluate(ComplexityClass::Quadratic, 0.0), Ok(0.0));
        assert_eq!(evaluate(ComplexityClass::Linear, 0.0), Ok(0.0));
    }

    #[test]
    fn quadratic_is_linear_squared() {
        for n in [1.0, 2.0, 3.5, 10.0, 999.0, 12345.0] {
            let linear = evaluate(ComplexityClass::Linear, n).unwrap();
            assert_eq!(evaluate(ComplexityClass::Quadratic, n), Ok(linear.powi(2)));
        }
    }

    #[test]
    fn exponential_is_clamped() {
        let ceiling = evaluate(ComplexityClass::ExponentialBounded, EXPONENTIAL_CLAMP_CEILING).unwrap();
        assert_eq!(ceiling, 1_048_576.0);
        assert_eq!(evaluate(ComplexityClass::ExponentialBounded, 64.0), Ok(ceiling));
        assert_eq!(evaluate(ComplexityClass::ExponentialBounded, 1e9), Ok(ceiling));
    }

    #[test]
    fn logarithms_reject_non_positive_sizes() {
        for class in [ComplexityClass::Logarithmic, ComplexityClass::Linearithmic] {
            assert_eq!(evaluate(class, 0.0), Err(EngineError::InvalidDomain { value: 0.0 }));
            assert_eq!(evaluate(class, -4.0), Err(EngineError::InvalidDomain { value: -4.0 }));
        }
        assert_eq!(evaluate(ComplexityClass::Quadratic, -1.0), Err(EngineError::InvalidDomain { value: -1.0 }));
        assert!(evaluate(ComplexityClass::Linear, f64::NAN).is_err());
    }

    #[test]
    fn series_fail_without_partial_results() {
        let result = evaluate_series(ComplexityClass::Logarithmic, &[4.0, 2.0, 0.0, 8.0]);
        assert_eq!(result, Err(EngineError::InvalidDomain { value: 0.0 }));
        let series = evaluate_series(ComplexityClass::Linear, &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(series.label, "O(n)");
        assert_eq!(series.points, vec![(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
    }

    #[test]
    fn scaled_series() {
        let series = evaluate_scaled_series(ComplexityClass::Quadratic, 2.0, &[1.0, 10.0]).unwrap();
        assert_eq!(series.label, "2·O(n²)");
        assert_eq!(series.points, vec![(1.0, 2.0), (10.0, 200.0)]);
        assert_eq!(evaluate_scaled_series(ComplexityClass::Linear, 1.0, &[5.0]).unwrap().label, "O(n)");
        assert!(evaluate_scaled_series(ComplexityClass::Linear, f64::INFINITY, &[5.0]).is_err());
    }
}
