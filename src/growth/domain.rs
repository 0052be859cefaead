//! Builders for the ordered input size sequences growth functions get sampled on.

use crate::errors::{EngineError, EngineResult};


/// `count` evenly spaced values from `start` to `end`, both inclusive.\
/// `count == 0` yields an empty domain & `count == 1` yields `[start]`.
pub fn linspace(start: f64, end: f64, count: usize) -> EngineResult<Vec<f64>> {
    finite(start)?;
    finite(end)?;
    Ok(match count {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { end } else { start + step * i as f64 })
                .collect()
        },
    })
}

/// every integer from `start` up to `end_inclusive`, as input sizes
pub fn arange(start: u64, end_inclusive: u64) -> Vec<f64> {
    (start..=end_inclusive).map(|n| n as f64).collect()
}

/// `count` values evenly spaced on a log scale, from `10^start_exponent` to `10^end_exponent`
pub fn logspace(start_exponent: f64, end_exponent: f64, count: usize) -> EngineResult<Vec<f64>> {
    Ok(linspace(start_exponent, end_exponent, count)?
        .into_iter()
        .map(|exponent| 10f64.powf(exponent))
        .collect())
}

fn finite(value: f64) -> EngineResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::InvalidDomain { value })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_ends() {
        assert_eq!(linspace(1.0, 5.0, 5), Ok(vec![1.0, 2.0, 3.0, 4.0, 5.0]));
        assert_eq!(linspace(10.0, 20.0, 1), Ok(vec![10.0]));
        assert_eq!(linspace(10.0, 20.0, 0), Ok(vec![]));
        let domain = linspace(1.0, 2000.0, 200).unwrap();
        assert_eq!(domain.len(), 200);
        assert_eq!(domain.first(), Some(&1.0));
        assert_eq!(domain.last(), Some(&2000.0));
        assert!(linspace(f64::NAN, 1.0, 3).is_err());
    }

    #[test]
    fn arange_is_inclusive() {
        assert_eq!(arange(1, 4), vec![1.0, 2.0, 3.0, 4.0]);
        assert!(arange(5, 4).is_empty());
    }

    #[test]
    fn logspace_spans_decades() {
        let domain = logspace(3.0, 6.0, 4).unwrap();
        let expected = [1e3, 1e4, 1e5, 1e6];
        for (observed, expected) in domain.iter().zip(expected) {
            assert!((observed - expected).abs() / expected < 1e-12, "{observed} != {expected}");
        }
    }
}
