//! Composes the lower & upper envelopes used to illustrate tight-bound (Θ) reasoning:
//! `c₁·n² ≤ f(n) ≤ c₂·n²`, for the fixed illustrative polynomial `f(n) = n² + 2n + 1`.

use crate::{
    errors::{EngineError, EngineResult},
    growth::types::{BoundEnvelope, SampleSeries},
};


/// The fixed polynomial the envelopes bracket
pub fn target_polynomial(n: f64) -> f64 {
    n.powi(2) + 2.0*n + 1.0
}

/// Builds the `c₁·n²` & `c₂·n²` envelopes, along with the [target_polynomial()], over the same `domain`.\
/// Requires `0 < lower_constant < upper_constant`, both finite -- constants are never swapped: on violation,
/// [EngineError::InvalidBoundOrdering] is returned so the caller may ask for valid ones.
/// Every `domain` value must be positive.
pub fn compose_bounds(lower_constant: f64, upper_constant: f64, domain: &[f64]) -> EngineResult<BoundEnvelope> {
    let valid_constant = |c: f64| c.is_finite() && c > 0.0;
    if !valid_constant(lower_constant) || !valid_constant(upper_constant) || lower_constant >= upper_constant {
        return Err(EngineError::InvalidBoundOrdering { lower: lower_constant, upper: upper_constant });
    }
    if let Some(&invalid) = domain.iter().find(|&&n| !(n.is_finite() && n > 0.0)) {
        return Err(EngineError::InvalidDomain { value: invalid });
    }
    let sample = |label: String, f: &dyn Fn(f64) -> f64| SampleSeries::new(label, domain.iter().map(|&n| (n, f(n))).collect());
    Ok(BoundEnvelope {
        lower_constant,
        upper_constant,
        lower:  sample(format!("{lower_constant}·n²"), &|n| lower_constant * n.powi(2)),
        upper:  sample(format!("{upper_constant}·n²"), &|n| upper_constant * n.powi(2)),
        target: sample("n² + 2n + 1".to_string(), &target_polynomial),
    })
}


#[cfg(test)]
mod tests {
    use super::*;

    fn tens() -> Vec<f64> {
        (1..=10).map(|i| (i * 10) as f64).collect()
    }

    #[test]
    fn tight_bound_holds_on_every_sample() {
        let envelope = compose_bounds(0.5, 2.0, &tens()).expect("constants are well ordered");
        assert_eq!(envelope.target.len(), 10);
        for i in 0..envelope.target.len() {
            let (n, f) = envelope.target.points[i];
            let (_, lower) = envelope.lower.points[i];
            let (_, upper) = envelope.upper.points[i];
            assert_eq!(f, n*n + 2.0*n + 1.0);
            assert!(lower <= f && f <= upper, "bound broken at n={n}: {lower} ≤ {f} ≤ {upper}");
            assert!(envelope.holds_at(i));
        }
        assert_eq!(envelope.holds_from(), Some(0));
    }

    #[test]
    fn small_sizes_are_not_dominated_yet() {
        // at n=1, f(1)=4 > 2·1² -- lower order terms still dominate
        let envelope = compose_bounds(0.5, 2.0, &[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!(!envelope.holds_at(0));
        assert_eq!(envelope.holds_from(), Some(2));
    }

    #[test]
    fn constants_must_be_ordered_and_positive() {
        assert_eq!(compose_bounds(2.0, 0.5, &tens()), Err(EngineError::InvalidBoundOrdering { lower: 2.0, upper: 0.5 }));
        assert_eq!(compose_bounds(1.0, 1.0, &tens()), Err(EngineError::InvalidBoundOrdering { lower: 1.0, upper: 1.0 }));
        assert!(matches!(compose_bounds(-1.0, 1.0, &tens()), Err(EngineError::InvalidBoundOrdering { .. })));
        assert!(matches!(compose_bounds(0.5, f64::INFINITY, &tens()), Err(EngineError::InvalidBoundOrdering { .. })));
    }

    #[test]
    fn domain_must_be_positive() {
        assert_eq!(compose_bounds(0.5, 2.0, &[10.0, 0.0]), Err(EngineError::InvalidDomain { value: 0.0 }));
    }
}
