//! Defines the enums & structs returned / shared by the growth functions.

use std::{
    collections::HashMap,
    fmt::{Display, Formatter},
    str::FromStr,
};
use once_cell::sync::Lazy;
use crate::errors::{EngineError, EngineResult};


/// Named growth rates, in big-O notation, ordered from the slowest to the fastest growing
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum ComplexityClass {
    Constant,
    Logarithmic,
    Linear,
    Linearithmic,
    Quadratic,
    Cubic,
    /// `2^n`, clamped -- see [crate::configs::EXPONENTIAL_CLAMP_CEILING]
    ExponentialBounded,
}

impl ComplexityClass {

    /// every class, in growth order
    pub const ALL: [ComplexityClass; 7] = [
        Self::Constant,
        Self::Logarithmic,
        Self::Linear,
        Self::Linearithmic,
        Self::Quadratic,
        Self::Cubic,
        Self::ExponentialBounded,
    ];

    /// short big-O label, as shown in chart legends
    pub fn label(&self) -> &'static str {
        match self {
            Self::Constant           => "O(1)",
            Self::Logarithmic        => "O(log n)",
            Self::Linear             => "O(n)",
            Self::Linearithmic       => "O(n log n)",
            Self::Quadratic          => "O(n²)",
            Self::Cubic              => "O(n³)",
            Self::ExponentialBounded => "O(2ⁿ)",
        }
    }

    /// verbose description for each enum element
    pub fn as_pretty_str(&self) -> &'static str {
        match self {
            Self::Constant           => "O(1) -- constant",
            Self::Logarithmic        => "O(log(n)) -- logarithmic",
            Self::Linear             => "O(n) -- linear",
            Self::Linearithmic       => "O(n.log(n)) -- linearithmic",
            Self::Quadratic          => "O(n²) -- quadratic",
            Self::Cubic              => "O(n³) -- cubic",
            Self::ExponentialBounded => "O(2^n) -- exponential (clamped for plotting)",
        }
    }

    /// lowercase identifier, accepted back by [FromStr]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Constant           => "constant",
            Self::Logarithmic        => "logarithmic",
            Self::Linear             => "linear",
            Self::Linearithmic       => "linearithmic",
            Self::Quadratic          => "quadratic",
            Self::Cubic              => "cubic",
            Self::ExponentialBounded => "exponential",
        }
    }
}

impl Display for ComplexityClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// label & name spellings -- as typed by users or sent by the presentation layer -- to classes
static CLASS_LOOKUP: Lazy<HashMap<String, ComplexityClass>> = Lazy::new(|| {
    let mut lookup = HashMap::new();
    for class in ComplexityClass::ALL {
        lookup.insert(class.label().to_lowercase(), class);
        lookup.insert(class.name().to_string(), class);
    }
    let aliases = [
        ("o(log(n))",   ComplexityClass::Logarithmic),
        ("o(n.log(n))", ComplexityClass::Linearithmic),
        ("o(nlogn)",    ComplexityClass::Linearithmic),
        ("o(n^2)",      ComplexityClass::Quadratic),
        ("o(n^3)",      ComplexityClass::Cubic),
        ("o(2^n)",      ComplexityClass::ExponentialBounded),
        ("o(k^n)",      ComplexityClass::ExponentialBounded),
        ("exponential-bounded", ComplexityClass::ExponentialBounded),
    ];
    for (alias, class) in aliases {
        lookup.insert(alias.to_string(), class);
    }
    lookup
});

impl FromStr for ComplexityClass {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        CLASS_LOOKUP.get(&key)
            .copied()
            .ok_or_else(|| EngineError::UnknownName { kind: "complexity class", name: s.to_string() })
    }
}


/// Ordered `(input_size, value)` samples of a growth function or simulation, ready to be charted
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    /// a name for this series, for presentation purposes
    pub label:  String,
    pub points: Vec<(f64, f64)>,
}

impl SampleSeries {

    pub fn new(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), points }
    }

    /// builds a series by applying the fallible `f` to each `domain` value -- either all points are produced or the first error is returned
    pub(crate) fn try_from_fn(label: impl Into<String>, domain: &[f64], mut f: impl FnMut(f64) -> EngineResult<f64>) -> EngineResult<Self> {
        let points = domain.iter()
            .map(|&n| f(n).map(|value| (n, value)))
            .collect::<EngineResult<Vec<_>>>()?;
        Ok(Self::new(label, points))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> impl Iterator<Item=f64> + '_ {
        self.points.iter().map(|&(x, _)| x)
    }

    pub fn ys(&self) -> impl Iterator<Item=f64> + '_ {
        self.points.iter().map(|&(_, y)| y)
    }
}


/// The lower & upper `c·n²` curves bracketing a target polynomial -- see [super::bounds::compose_bounds()]
#[derive(Debug, Clone, PartialEq)]
pub struct BoundEnvelope {
    pub lower_constant: f64,
    pub upper_constant: f64,
    /// `c₁·n²`
    pub lower:  SampleSeries,
    /// `c₂·n²`
    pub upper:  SampleSeries,
    /// `f(n)`, sampled on the same domain as the bounds
    pub target: SampleSeries,
}

impl BoundEnvelope {

    /// tells if `lower ≤ f(n) ≤ upper` on the `i`th sample -- `false` if there is no such sample
    pub fn holds_at(&self, i: usize) -> bool {
        match (self.lower.points.get(i), self.target.points.get(i), self.upper.points.get(i)) {
            (Some(&(_, lower)), Some(&(_, target)), Some(&(_, upper))) => lower <= target && target <= upper,
            _ => false,
        }
    }

    /// The index of the first sample from which the bound holds for every later sample -- the `n₀` of the tight bound
    /// definition, as seen through the sampled domain.\
    /// `None` if the bound doesn't hold on the last sample (or if there are no samples).
    pub fn holds_from(&self) -> Option<usize> {
        let len = self.target.len();
        if len == 0 || !self.holds_at(len - 1) {
            return None;
        }
        let mut first = len - 1;
        while first > 0 && self.holds_at(first - 1) {
            first -= 1;
        }
        Some(first)
    }
}
