//! Operation counts comparing linear & binary searches, and the best / average / worst cases of a linear search.

use crate::{
    errors::{EngineError, EngineResult},
    growth::types::SampleSeries,
};


/// Expected operations to find an element among `size` ones
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchComparison {
    pub size:              u64,
    /// `size / 2` -- the average linear search
    pub linear_operations: f64,
    /// `log2(size)`
    pub binary_operations: f64,
    /// how many times fewer operations the binary search needs
    pub speedup:           f64,
}

/// Compares the average linear search against the binary search on `size` sorted elements.\
/// Sizes below 2 -- where a binary search does no work -- are rejected with [EngineError::InvalidInputSize].
pub fn compare_search_operations(size: i64) -> EngineResult<SearchComparison> {
    if size < 2 {
        return Err(EngineError::InvalidInputSize { input_size: size, max: i64::MAX });
    }
    let n = size as f64;
    let linear_operations = n / 2.0;
    let binary_operations = n.log2();
    Ok(SearchComparison {
        size: size as u64,
        linear_operations,
        binary_operations,
        speedup: linear_operations / binary_operations,
    })
}


/// Comparisons a linear search does on `size` elements
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchCases {
    /// the target is the first element
    pub best:    u64,
    /// the target is at the requested position
    pub yours:   u64,
    pub average: f64,
    /// the target is the last element -- or is missing
    pub worst:   u64,
}

/// Comparisons of a linear search on `size` elements, finding the one at the 1-based position `target`
pub fn linear_search_cases(size: i64, target: i64) -> EngineResult<SearchCases> {
    if size < 1 {
        return Err(EngineError::InvalidInputSize { input_size: size, max: i64::MAX });
    }
    if !(1..=size).contains(&target) {
        return Err(EngineError::TargetOutOfRange { target, size });
    }
    Ok(SearchCases {
        best:    1,
        yours:   target as u64,
        average: (size as f64 + 1.0) / 2.0,
        worst:   size as u64,
    })
}

/// The best (`1`), average (`(n+1)/2`) & worst (`n`) linear search cases over `domain` -- whose values must be `≥ 1`
pub fn linear_search_case_series(domain: &[f64]) -> EngineResult<[SampleSeries; 3]> {
    let checked = |n: f64| if n.is_finite() && n >= 1.0 { Ok(n) } else { Err(EngineError::InvalidDomain { value: n }) };
    Ok([
        SampleSeries::try_from_fn("Best Case: O(1)",    domain, |n| checked(n).map(|_| 1.0))?,
        SampleSeries::try_from_fn("Average Case: O(n)", domain, |n| checked(n).map(|n| (n + 1.0) / 2.0))?,
        SampleSeries::try_from_fn("Worst Case: O(n)",   domain, checked)?,
    ])
}
