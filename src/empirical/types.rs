//! Defines the enums & structs returned by the empirical growth analysis.

use std::fmt::{Display, Formatter};
use crate::{
    growth::types::ComplexityClass,
    runners::simulator::SimulationResult,
};


/// Possible outcomes of comparing a resource utilization on 2 passes, in big-O notation.\
/// Variants are ordered by growth: the `Between*` ones are the gaps left by measurement noise
/// (or by algorithms that genuinely grow in-between two reference functions).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum ObservedGrowth {
    BetterThanO1,
    O1,
    BetweenO1AndOLogN,
    OLogN,
    BetweenOLogNAndON,
    ON,
    BetweenONAndONLogN,
    ONLogN,
    BetweenONLogNAndON2,
    ON2,
    BetweenON2AndON3,
    ON3,
    BetweenON3AndON4,
    ON4,
    BetweenON4AndOkN,
    OkN,
    WorseThanExponential,
}

impl ObservedGrowth {

    /// verbose description for each enum element
    pub fn as_pretty_str(&self) -> &'static str {
        match self {
            Self::BetterThanO1         => "Better than O(1)",
            Self::O1                   => "O(1)",
            Self::BetweenO1AndOLogN    => "Worse than O(1), but better than O(log(n))",
            Self::OLogN                => "O(log(n))",
            Self::BetweenOLogNAndON    => "Worse than O(log(n)), but better than O(n)",
            Self::ON                   => "O(n)",
            Self::BetweenONAndONLogN   => "Worse than O(n), but better than O(n.log(n))",
            Self::ONLogN               => "O(n.log(n))",
            Self::BetweenONLogNAndON2  => "Worse than O(n.log(n)), but better than O(n²)",
            Self::ON2                  => "O(n²)",
            Self::BetweenON2AndON3     => "Worse than O(n²), but better than O(n³)",
            Self::ON3                  => "O(n³)",
            Self::BetweenON3AndON4     => "Worse than O(n³), but better than O(n^4)",
            Self::ON4                  => "O(n^4)",
            Self::BetweenON4AndOkN     => "Worse than O(n^4), but better than O(k^n)",
            Self::OkN                  => "O(k^n)",
            Self::WorseThanExponential => "Worse than O(k^n)",
        }
    }

    /// same as [Self::as_pretty_str()], with additional info for time analysis
    pub fn as_time_pretty_str(&self) -> &'static str {
        match self {
            Self::BetterThanO1         => "Better than O(1) -- aren't the machines idle? is the pass too short to be measured?",
            Self::WorseThanExponential => "Worse than Exponential!! -- too short execution times or is the machine busy?",
            _ => self.as_pretty_str(),
        }
    }

    /// the named [ComplexityClass] this observation corresponds to -- `None` for the in-between observations
    pub fn as_complexity_class(&self) -> Option<ComplexityClass> {
        match self {
            Self::O1     => Some(ComplexityClass::Constant),
            Self::OLogN  => Some(ComplexityClass::Logarithmic),
            Self::ON     => Some(ComplexityClass::Linear),
            Self::ONLogN => Some(ComplexityClass::Linearithmic),
            Self::ON2    => Some(ComplexityClass::Quadratic),
            Self::ON3    => Some(ComplexityClass::Cubic),
            Self::OkN    => Some(ComplexityClass::ExponentialBounded),
            _            => None,
        }
    }
}

impl From<ComplexityClass> for ObservedGrowth {
    fn from(class: ComplexityClass) -> Self {
        match class {
            ComplexityClass::Constant           => Self::O1,
            ComplexityClass::Logarithmic        => Self::OLogN,
            ComplexityClass::Linear             => Self::ON,
            ComplexityClass::Linearithmic       => Self::ONLogN,
            ComplexityClass::Quadratic          => Self::ON2,
            ComplexityClass::Cubic              => Self::ON3,
            ComplexityClass::ExponentialBounded => Self::OkN,
        }
    }
}


/// Two simulation passes of the same algorithm, with the growth observed between them
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthAnalysis {
    pub pass_1: SimulationResult,
    pub pass_2: SimulationResult,
    /// how the (deterministic) operation counts grew
    pub operation_growth: ObservedGrowth,
    /// how the (noisy) elapsed times grew
    pub time_growth:      ObservedGrowth,
}

impl Display for GrowthAnalysis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' growth analysis:\n\
                   pass 1) {}\n\
                   pass 2) {}\n\
                   --> Operations Growth: {}\n\
                   --> Time Growth:       {}\n",
               self.pass_1.algorithm,
               self.pass_1, self.pass_2,
               self.operation_growth.as_pretty_str(),
               self.time_growth.as_time_pretty_str())
    }
}
