//! Conditions reported by the engine's operations.\
//! All of them are local, deterministic & recoverable: the caller is expected to supply a corrected input
//! -- retrying with the same input is meaningless.

use thiserror::Error;

use crate::runners::simulator::Algorithm;


#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// a growth function (or domain builder) was given a value outside of its domain
    #[error("invalid domain value {value}: growth functions require finite, non-negative input sizes (positive for logarithms)")]
    InvalidDomain { value: f64 },

    #[error("invalid bound ordering: lower constant {lower} must be positive, finite and strictly less than upper constant {upper}")]
    InvalidBoundOrdering { lower: f64, upper: f64 },

    #[error("invalid input size {input_size}: out of the accepted range (maximum {max})")]
    InvalidInputSize { input_size: i64, max: i64 },

    /// the structural estimator refuses to guess
    #[error("ambiguous structure at line {line}: {reason}")]
    AmbiguousStructure { line: usize, reason: String },

    #[error("unparsable expression '{expression}': {reason}")]
    UnparsableExpression { expression: String, reason: String },

    /// a complexity class or algorithm was looked up by a name nobody answers to
    #[error("unknown {kind} '{name}'")]
    UnknownName { kind: &'static str, name: String },

    #[error("target {target} is out of range for a set of {size} elements (expected 1..={size})")]
    TargetOutOfRange { target: i64, size: i64 },

    /// passes from different algorithms can't have their growth compared
    #[error("mismatched passes: pass 1 ran {first:?} while pass 2 ran {second:?}")]
    MismatchedPasses { first: Algorithm, second: Algorithm },

    #[error("simulation worker failed: {0}")]
    WorkerFailure(String),

    #[error("growth check failed: {message}")]
    GrowthCheckFailed { message: String },
}

pub type EngineResult<T> = Result<T, EngineError>;
